use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::{
    Bonus, Episode, Feature, Season, Title, TitleKind, TvSeries,
};

/// Weak reference persisted in place of a full parent document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TitleKind,
}

/// The persisted document shape.
///
/// One flat record covers all five variants; fields a variant does not use
/// stay absent. Children lists are structurally missing here on purpose:
/// `seasons`/`episodes`/`bonuses` exist only as read-time projections, so
/// they can never leak into storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TitleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theatrical_release_date: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
}

impl TitleRecord {
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().map(|parent| parent.id.as_str())
    }

    /// Collapse a domain title to its stored shape. The parent reference
    /// keeps identity only; derived children views are dropped.
    pub fn from_title(title: &Title) -> TitleRecord {
        let parent = title.parent().and_then(|parent| {
            parent.id().map(|id| ParentRef {
                id: id.to_owned(),
                kind: parent.kind(),
            })
        });
        let mut record = TitleRecord {
            id: title.id().map(str::to_owned),
            kind: title.kind(),
            name: title.name().map(str::to_owned),
            description: None,
            theatrical_release_date: None,
            release_date: None,
            duration: None,
            parent,
        };
        match title {
            Title::Feature(feature) => {
                record.description = feature.description.clone();
                record.theatrical_release_date = feature.theatrical_release_date;
                record.duration = feature.duration.clone();
            }
            Title::TvSeries(series) => {
                record.description = series.description.clone();
                record.release_date = series.release_date;
            }
            Title::Season(season) => {
                record.description = season.description.clone();
                record.release_date = season.release_date;
            }
            Title::Episode(episode) => {
                record.description = episode.description.clone();
                record.release_date = episode.release_date;
                record.duration = episode.duration.clone();
            }
            Title::Bonus(bonus) => {
                record.description = bonus.description.clone();
                record.duration = bonus.duration.clone();
            }
        }
        record
    }

    /// Rebuild a domain title. The parent comes back as an identity stub;
    /// hydrating it into a full title is the repository's call.
    pub fn into_title(self) -> Title {
        let parent = self
            .parent
            .map(|parent| Box::new(Title::stub(parent.kind, parent.id)));
        match self.kind {
            TitleKind::Feature => Title::Feature(Feature {
                id: self.id,
                name: self.name,
                description: self.description,
                theatrical_release_date: self.theatrical_release_date,
                duration: self.duration,
                bonuses: None,
            }),
            TitleKind::TvSeries => Title::TvSeries(TvSeries {
                id: self.id,
                name: self.name,
                description: self.description,
                release_date: self.release_date,
                seasons: None,
                bonuses: None,
            }),
            TitleKind::Season => Title::Season(Season {
                id: self.id,
                name: self.name,
                description: self.description,
                release_date: self.release_date,
                parent,
                episodes: None,
                bonuses: None,
            }),
            TitleKind::Episode => Title::Episode(Episode {
                id: self.id,
                name: self.name,
                description: self.description,
                release_date: self.release_date,
                duration: self.duration,
                parent,
                bonuses: None,
            }),
            TitleKind::Bonus => Title::Bonus(Bonus {
                id: self.id,
                name: self.name,
                description: self.description,
                duration: self.duration,
                parent,
            }),
        }
    }
}
