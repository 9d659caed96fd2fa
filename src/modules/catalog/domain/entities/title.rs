use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::title_kind::TitleKind;

/// A feature film. Top level, never a child of anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theatrical_release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Derived view, populated at read time only (never persisted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Vec<Bonus>>,
}

/// A TV series. Top level; owns seasons and bonus content as derived views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<Season>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Vec<Bonus>>,
}

/// A season of a TV series. Valid parent: exactly a TV series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Weak back reference; hydrated transiently for responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Title>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Vec<Bonus>>,
}

/// An episode of a season. Valid parent: exactly a season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Title>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<Vec<Bonus>>,
}

/// Bonus content. May hang off any other variant, but never off another
/// bonus, and never owns bonuses of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Title>>,
}

/// The polymorphic catalog entity: exactly one of five concrete variants.
///
/// Serialized with an internal `type` tag matching [`TitleKind`] display
/// names, which is also the persisted discriminator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Title {
    Feature(Feature),
    #[serde(rename = "TV Series")]
    TvSeries(TvSeries),
    Season(Season),
    Episode(Episode),
    Bonus(Bonus),
}

impl Title {
    pub fn kind(&self) -> TitleKind {
        match self {
            Title::Feature(_) => TitleKind::Feature,
            Title::TvSeries(_) => TitleKind::TvSeries,
            Title::Season(_) => TitleKind::Season,
            Title::Episode(_) => TitleKind::Episode,
            Title::Bonus(_) => TitleKind::Bonus,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Title::Feature(t) => t.id.as_deref(),
            Title::TvSeries(t) => t.id.as_deref(),
            Title::Season(t) => t.id.as_deref(),
            Title::Episode(t) => t.id.as_deref(),
            Title::Bonus(t) => t.id.as_deref(),
        }
    }

    pub fn set_id(&mut self, id: Option<String>) {
        match self {
            Title::Feature(t) => t.id = id,
            Title::TvSeries(t) => t.id = id,
            Title::Season(t) => t.id = id,
            Title::Episode(t) => t.id = id,
            Title::Bonus(t) => t.id = id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Title::Feature(t) => t.name.as_deref(),
            Title::TvSeries(t) => t.name.as_deref(),
            Title::Season(t) => t.name.as_deref(),
            Title::Episode(t) => t.name.as_deref(),
            Title::Bonus(t) => t.name.as_deref(),
        }
    }

    /// The current parent reference, for the variants that can have one.
    pub fn parent(&self) -> Option<&Title> {
        match self {
            Title::Season(t) => t.parent.as_deref(),
            Title::Episode(t) => t.parent.as_deref(),
            Title::Bonus(t) => t.parent.as_deref(),
            Title::Feature(_) | Title::TvSeries(_) => None,
        }
    }

    /// An empty instance of the given variant carrying only an identity.
    /// Used to rebuild parent references loaded from storage.
    pub fn stub(kind: TitleKind, id: impl Into<String>) -> Title {
        let mut title = Title::empty(kind);
        title.set_id(Some(id.into()));
        title
    }

    pub fn empty(kind: TitleKind) -> Title {
        match kind {
            TitleKind::Feature => Title::Feature(Feature::default()),
            TitleKind::TvSeries => Title::TvSeries(TvSeries::default()),
            TitleKind::Season => Title::Season(Season::default()),
            TitleKind::Episode => Title::Episode(Episode::default()),
            TitleKind::Bonus => Title::Bonus(Bonus::default()),
        }
    }
}

/// Identity equality: same variant and same store-assigned id. A title
/// without an id equals nothing, itself included.
impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => self.kind() == other.kind() && a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[id={}, name={}]",
            self.kind(),
            self.id().unwrap_or("-"),
            self.name().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: Option<&str>) -> Title {
        Title::Feature(Feature {
            id: id.map(str::to_owned),
            name: Some("Frozen".to_owned()),
            duration: Some("102 min".to_owned()),
            ..Default::default()
        })
    }

    #[test]
    fn equality_is_by_id_and_kind() {
        assert_eq!(feature(Some("a")), feature(Some("a")));
        assert_ne!(feature(Some("a")), feature(Some("b")));
        assert_ne!(feature(Some("a")), Title::stub(TitleKind::Bonus, "a"));
    }

    #[test]
    fn title_without_id_equals_nothing() {
        let title = feature(None);
        assert_ne!(title, title.clone());
        assert_ne!(feature(None), feature(None));
    }

    #[test]
    fn clone_is_a_structural_round_trip() {
        let title = Title::Episode(Episode {
            id: Some("ep1".to_owned()),
            name: Some("Pilot".to_owned()),
            description: Some("It begins".to_owned()),
            release_date: Some(NaiveDate::from_ymd_opt(2004, 9, 22).unwrap()),
            duration: Some("42 min".to_owned()),
            parent: Some(Box::new(Title::stub(TitleKind::Season, "s1"))),
            bonuses: Some(vec![Bonus::default()]),
        });
        let copy = title.clone();
        assert_eq!(
            serde_json::to_value(&title).unwrap(),
            serde_json::to_value(&copy).unwrap()
        );
    }

    #[test]
    fn serializes_with_public_type_tag() {
        let json = serde_json::to_value(Title::empty(TitleKind::TvSeries)).unwrap();
        assert_eq!(json["type"], "TV Series");

        let back: Title = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), TitleKind::TvSeries);
    }

    #[test]
    fn summaries_omit_absent_fields() {
        let json = serde_json::to_string(&feature(Some("a"))).unwrap();
        assert!(!json.contains("bonuses"));
        assert!(!json.contains("description"));
    }
}
