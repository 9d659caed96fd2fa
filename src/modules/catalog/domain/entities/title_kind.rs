use serde::{Deserialize, Serialize};

/// The closed set of concrete title variants.
///
/// Display names double as the persisted `type` discriminator and the
/// public names accepted by type filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleKind {
    Feature,
    #[serde(rename = "TV Series")]
    TvSeries,
    Season,
    Episode,
    Bonus,
}

impl TitleKind {
    pub const ALL: [TitleKind; 5] = [
        TitleKind::Feature,
        TitleKind::TvSeries,
        TitleKind::Season,
        TitleKind::Episode,
        TitleKind::Bonus,
    ];

    /// Variants that may carry a parent reference.
    pub fn is_child(&self) -> bool {
        matches!(
            self,
            TitleKind::Season | TitleKind::Episode | TitleKind::Bonus
        )
    }
}

impl std::fmt::Display for TitleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleKind::Feature => write!(f, "Feature"),
            TitleKind::TvSeries => write!(f, "TV Series"),
            TitleKind::Season => write!(f, "Season"),
            TitleKind::Episode => write!(f, "Episode"),
            TitleKind::Bonus => write!(f, "Bonus"),
        }
    }
}

impl std::str::FromStr for TitleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Feature" => Ok(TitleKind::Feature),
            "TV Series" => Ok(TitleKind::TvSeries),
            "Season" => Ok(TitleKind::Season),
            "Episode" => Ok(TitleKind::Episode),
            "Bonus" => Ok(TitleKind::Bonus),
            _ => Err(format!("Invalid title type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name_back() {
        for kind in TitleKind::ALL {
            assert_eq!(kind.to_string().parse::<TitleKind>(), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("Documentary".parse::<TitleKind>().is_err());
        assert!("feature".parse::<TitleKind>().is_err());
        assert!("TvSeries".parse::<TitleKind>().is_err());
    }

    #[test]
    fn only_season_episode_bonus_are_children() {
        assert!(!TitleKind::Feature.is_child());
        assert!(!TitleKind::TvSeries.is_child());
        assert!(TitleKind::Season.is_child());
        assert!(TitleKind::Episode.is_child());
        assert!(TitleKind::Bonus.is_child());
    }
}
