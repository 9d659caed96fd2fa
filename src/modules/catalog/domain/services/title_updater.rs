use crate::modules::catalog::domain::entities::{
    Bonus, Episode, Feature, Season, Title, TitleKind, TvSeries,
};
use crate::modules::catalog::domain::visitor::TitleVisitor;
use crate::shared::errors::{AppError, AppResult};

/// Applies a partial update payload to the accepted title, in place.
///
/// Only fields populated on the payload overwrite the target; absent
/// fields leave the target untouched. The payload's variant must match the
/// target's, and the target keeps its own `id` no matter what the payload
/// carries. Children lists are derived views and are never merged.
pub struct TitleUpdater {
    update: Title,
}

impl TitleUpdater {
    pub fn new(update: Title) -> Self {
        Self { update }
    }

    fn incompatible(&self, expected: TitleKind) -> AppError {
        AppError::IncompatibleUpdateType {
            offered: self.update.kind(),
            expected,
        }
    }
}

fn merge<T: Clone>(target: &mut Option<T>, update: &Option<T>) {
    if update.is_some() {
        *target = update.clone();
    }
}

impl TitleVisitor for TitleUpdater {
    type Output = AppResult<()>;

    fn visit_feature(&mut self, feature: &mut Feature) -> AppResult<()> {
        let Title::Feature(update) = &self.update else {
            return Err(self.incompatible(TitleKind::Feature));
        };
        merge(&mut feature.name, &update.name);
        merge(&mut feature.description, &update.description);
        merge(
            &mut feature.theatrical_release_date,
            &update.theatrical_release_date,
        );
        merge(&mut feature.duration, &update.duration);
        Ok(())
    }

    fn visit_tv_series(&mut self, series: &mut TvSeries) -> AppResult<()> {
        let Title::TvSeries(update) = &self.update else {
            return Err(self.incompatible(TitleKind::TvSeries));
        };
        merge(&mut series.name, &update.name);
        merge(&mut series.description, &update.description);
        merge(&mut series.release_date, &update.release_date);
        Ok(())
    }

    fn visit_season(&mut self, season: &mut Season) -> AppResult<()> {
        let Title::Season(update) = &self.update else {
            return Err(self.incompatible(TitleKind::Season));
        };
        merge(&mut season.name, &update.name);
        merge(&mut season.description, &update.description);
        merge(&mut season.release_date, &update.release_date);
        merge(&mut season.parent, &update.parent);
        Ok(())
    }

    fn visit_episode(&mut self, episode: &mut Episode) -> AppResult<()> {
        let Title::Episode(update) = &self.update else {
            return Err(self.incompatible(TitleKind::Episode));
        };
        merge(&mut episode.name, &update.name);
        merge(&mut episode.description, &update.description);
        merge(&mut episode.release_date, &update.release_date);
        merge(&mut episode.duration, &update.duration);
        merge(&mut episode.parent, &update.parent);
        Ok(())
    }

    fn visit_bonus(&mut self, bonus: &mut Bonus) -> AppResult<()> {
        let Title::Bonus(update) = &self.update else {
            return Err(self.incompatible(TitleKind::Bonus));
        };
        merge(&mut bonus.name, &update.name);
        merge(&mut bonus.description, &update.description);
        merge(&mut bonus.duration, &update.duration);
        merge(&mut bonus.parent, &update.parent);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn updates_episode_with_episode() {
        let mut title = Title::Episode(Episode::default());
        let update = Episode {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            description: Some("Anna and her sister run around freezing things".to_owned()),
            duration: Some("100 min".to_owned()),
            release_date: Some(date("2018-02-13")),
            bonuses: Some(vec![Bonus::default()]),
            ..Default::default()
        };

        title
            .accept(&mut TitleUpdater::new(Title::Episode(update.clone())))
            .unwrap();

        let Title::Episode(episode) = &title else {
            unreachable!()
        };
        assert_eq!(episode.id, None, "id is never taken from the update");
        assert_eq!(episode.name, update.name);
        assert_eq!(episode.description, update.description);
        assert_eq!(episode.release_date, update.release_date);
        assert_eq!(episode.duration, update.duration);
        assert!(episode.bonuses.is_none(), "derived views are not merged");
    }

    #[test]
    fn does_not_update_episode_fields_absent_from_update() {
        let mut title = Title::Episode(Episode {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            description: Some("Anna and her sister run around freezing things".to_owned()),
            duration: Some("100 min".to_owned()),
            release_date: Some(date("2018-02-13")),
            ..Default::default()
        });
        let before = title.clone();

        title
            .accept(&mut TitleUpdater::new(Title::Episode(Episode::default())))
            .unwrap();

        assert_eq!(
            serde_json::to_value(&title).unwrap(),
            serde_json::to_value(&before).unwrap()
        );
    }

    #[test]
    fn updates_bonus_with_bonus() {
        let mut title = Title::Bonus(Bonus::default());
        let update = Bonus {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            description: Some("Anna and her sister run around freezing things".to_owned()),
            duration: Some("100 min".to_owned()),
            ..Default::default()
        };

        title
            .accept(&mut TitleUpdater::new(Title::Bonus(update.clone())))
            .unwrap();

        let Title::Bonus(bonus) = &title else {
            unreachable!()
        };
        assert_eq!(bonus.id, None);
        assert_eq!(bonus.name, update.name);
        assert_eq!(bonus.description, update.description);
        assert_eq!(bonus.duration, update.duration);
    }

    #[test]
    fn updates_tv_series_with_tv_series() {
        let mut title = Title::TvSeries(TvSeries::default());
        let update = TvSeries {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            description: Some("Anna and her sister run around freezing things".to_owned()),
            release_date: Some(date("2018-02-13")),
            seasons: Some(vec![Season::default()]),
            bonuses: Some(vec![Bonus::default()]),
        };

        title
            .accept(&mut TitleUpdater::new(Title::TvSeries(update.clone())))
            .unwrap();

        let Title::TvSeries(series) = &title else {
            unreachable!()
        };
        assert_eq!(series.id, None);
        assert_eq!(series.name, update.name);
        assert_eq!(series.description, update.description);
        assert_eq!(series.release_date, update.release_date);
        assert!(series.seasons.is_none());
        assert!(series.bonuses.is_none());
    }

    #[test]
    fn updates_season_with_season() {
        let mut title = Title::Season(Season::default());
        let update = Season {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            release_date: Some(date("2018-02-13")),
            episodes: Some(vec![Episode::default()]),
            ..Default::default()
        };

        title
            .accept(&mut TitleUpdater::new(Title::Season(update.clone())))
            .unwrap();

        let Title::Season(season) = &title else {
            unreachable!()
        };
        assert_eq!(season.id, None);
        assert_eq!(season.name, update.name);
        assert_eq!(season.release_date, update.release_date);
        assert!(season.episodes.is_none());
    }

    #[test]
    fn updates_feature_with_feature() {
        let mut title = Title::Feature(Feature::default());
        let update = Feature {
            id: Some("big no".to_owned()),
            name: Some("Frozen".to_owned()),
            duration: Some("100 min".to_owned()),
            theatrical_release_date: Some(date("2018-02-13")),
            ..Default::default()
        };

        title
            .accept(&mut TitleUpdater::new(Title::Feature(update.clone())))
            .unwrap();

        let Title::Feature(feature) = &title else {
            unreachable!()
        };
        assert_eq!(feature.id, None);
        assert_eq!(feature.name, update.name);
        assert_eq!(feature.duration, update.duration);
        assert_eq!(feature.theatrical_release_date, update.theatrical_release_date);
    }

    #[test]
    fn merges_parent_under_the_same_rule() {
        let original_parent = Title::stub(TitleKind::Season, "s1");
        let mut title = Title::Episode(Episode {
            parent: Some(Box::new(original_parent.clone())),
            ..Default::default()
        });

        // Absent parent on the update leaves the current one in place.
        title
            .accept(&mut TitleUpdater::new(Title::Episode(Episode::default())))
            .unwrap();
        assert_eq!(title.parent(), Some(&original_parent));

        // A populated parent wins.
        let new_parent = Title::stub(TitleKind::Season, "s2");
        title
            .accept(&mut TitleUpdater::new(Title::Episode(Episode {
                parent: Some(Box::new(new_parent.clone())),
                ..Default::default()
            })))
            .unwrap();
        assert_eq!(title.parent(), Some(&new_parent));
    }

    #[test]
    fn rejects_every_cross_variant_update() {
        for target_kind in TitleKind::ALL {
            for update_kind in TitleKind::ALL {
                if target_kind == update_kind {
                    continue;
                }
                let mut target = Title::stub(target_kind, "t1");
                let before = serde_json::to_value(&target).unwrap();

                let err = target
                    .accept(&mut TitleUpdater::new(Title::empty(update_kind)))
                    .unwrap_err();

                assert!(matches!(
                    err,
                    AppError::IncompatibleUpdateType { offered, expected }
                        if offered == update_kind && expected == target_kind
                ));
                assert_eq!(
                    serde_json::to_value(&target).unwrap(),
                    before,
                    "failed update must leave the target unmodified"
                );
            }
        }
    }
}
