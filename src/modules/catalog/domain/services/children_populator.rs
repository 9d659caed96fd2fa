use crate::modules::catalog::domain::entities::{
    Bonus, Episode, Feature, Season, Title, TvSeries,
};
use crate::modules::catalog::domain::visitor::TitleVisitor;

/// Assigns a fetched batch of child titles to the derived view lists of the
/// accepted owner, partitioned by variant.
///
/// The batch is whatever a back-reference query returned for the owner's id;
/// this visitor decides which subsets the owner exposes: a TV series gets
/// seasons and bonuses, a season episodes and bonuses, features and episodes
/// bonuses only. A bonus populates nothing, since bonuses never own bonuses.
pub struct ChildrenPopulator {
    children: Vec<Title>,
}

impl ChildrenPopulator {
    pub fn new(children: Vec<Title>) -> Self {
        Self { children }
    }

    fn take_seasons(&mut self) -> Vec<Season> {
        let mut seasons = Vec::new();
        let mut rest = Vec::new();
        for child in std::mem::take(&mut self.children) {
            match child {
                Title::Season(season) => seasons.push(season),
                other => rest.push(other),
            }
        }
        self.children = rest;
        seasons
    }

    fn take_episodes(&mut self) -> Vec<Episode> {
        let mut episodes = Vec::new();
        let mut rest = Vec::new();
        for child in std::mem::take(&mut self.children) {
            match child {
                Title::Episode(episode) => episodes.push(episode),
                other => rest.push(other),
            }
        }
        self.children = rest;
        episodes
    }

    fn take_bonuses(&mut self) -> Vec<Bonus> {
        let mut bonuses = Vec::new();
        let mut rest = Vec::new();
        for child in std::mem::take(&mut self.children) {
            match child {
                Title::Bonus(bonus) => bonuses.push(bonus),
                other => rest.push(other),
            }
        }
        self.children = rest;
        bonuses
    }
}

impl TitleVisitor for ChildrenPopulator {
    type Output = ();

    fn visit_feature(&mut self, feature: &mut Feature) {
        feature.bonuses = Some(self.take_bonuses());
    }

    fn visit_tv_series(&mut self, series: &mut TvSeries) {
        series.seasons = Some(self.take_seasons());
        series.bonuses = Some(self.take_bonuses());
    }

    fn visit_season(&mut self, season: &mut Season) {
        season.episodes = Some(self.take_episodes());
        season.bonuses = Some(self.take_bonuses());
    }

    fn visit_episode(&mut self, episode: &mut Episode) {
        episode.bonuses = Some(self.take_bonuses());
    }

    fn visit_bonus(&mut self, _: &mut Bonus) {
        // Bonuses do not own children.
    }
}
