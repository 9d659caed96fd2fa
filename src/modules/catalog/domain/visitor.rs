use super::entities::{Bonus, Episode, Feature, Season, Title, TvSeries};

/// Double dispatch over the closed title variant set.
///
/// One handler per concrete variant; [`Title::accept`] guarantees exactly
/// the matching handler runs. All variant-specific business logic (delta
/// updates, relinking, children projection) is written as a visitor so no
/// type-tag conditionals leak anywhere else.
pub trait TitleVisitor {
    type Output;

    fn visit_feature(&mut self, feature: &mut Feature) -> Self::Output;
    fn visit_tv_series(&mut self, series: &mut TvSeries) -> Self::Output;
    fn visit_season(&mut self, season: &mut Season) -> Self::Output;
    fn visit_episode(&mut self, episode: &mut Episode) -> Self::Output;
    fn visit_bonus(&mut self, bonus: &mut Bonus) -> Self::Output;
}

impl Title {
    /// Dispatch to the visitor handler matching this title's variant.
    /// The match is exhaustive, so a new variant cannot be added without
    /// the compiler demanding a handler for it.
    pub fn accept<V: TitleVisitor>(&mut self, visitor: &mut V) -> V::Output {
        match self {
            Title::Feature(feature) => visitor.visit_feature(feature),
            Title::TvSeries(series) => visitor.visit_tv_series(series),
            Title::Season(season) => visitor.visit_season(season),
            Title::Episode(episode) => visitor.visit_episode(episode),
            Title::Bonus(bonus) => visitor.visit_bonus(bonus),
        }
    }
}
