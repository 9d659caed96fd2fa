use crate::modules::catalog::domain::entities::{
    Bonus, Episode, Feature, Season, Title, TitleKind, TvSeries,
};
use crate::modules::catalog::domain::visitor::TitleVisitor;
use crate::shared::errors::{AppError, AppResult};

fn invalid_relationship(child: TitleKind, parent: TitleKind) -> AppError {
    AppError::InvalidRelationship(format!("a {} cannot have a {} parent", child, parent))
}

fn not_a_child(kind: TitleKind) -> AppError {
    AppError::InvalidRelationship(format!("a {} cannot be a child title", kind))
}

/// Establishes a parent reference on the accepted child title.
///
/// Season accepts only a TV Series parent, Episode only a Season, Bonus any
/// non-Bonus variant. Feature and TV Series can never be children. A valid
/// parent overwrites any previous one unconditionally; on failure the child
/// is left unchanged.
pub struct ParentSetter {
    parent: Title,
}

impl ParentSetter {
    pub fn new(parent: Title) -> Self {
        Self { parent }
    }

    fn link(&self, slot: &mut Option<Box<Title>>) {
        *slot = Some(Box::new(self.parent.clone()));
    }
}

impl TitleVisitor for ParentSetter {
    type Output = AppResult<()>;

    fn visit_feature(&mut self, _: &mut Feature) -> AppResult<()> {
        Err(not_a_child(TitleKind::Feature))
    }

    fn visit_tv_series(&mut self, _: &mut TvSeries) -> AppResult<()> {
        Err(not_a_child(TitleKind::TvSeries))
    }

    fn visit_season(&mut self, season: &mut Season) -> AppResult<()> {
        if self.parent.kind() != TitleKind::TvSeries {
            return Err(invalid_relationship(TitleKind::Season, self.parent.kind()));
        }
        self.link(&mut season.parent);
        Ok(())
    }

    fn visit_episode(&mut self, episode: &mut Episode) -> AppResult<()> {
        if self.parent.kind() != TitleKind::Season {
            return Err(invalid_relationship(TitleKind::Episode, self.parent.kind()));
        }
        self.link(&mut episode.parent);
        Ok(())
    }

    fn visit_bonus(&mut self, bonus: &mut Bonus) -> AppResult<()> {
        // Bonuses hang off anything except another bonus.
        if self.parent.kind() == TitleKind::Bonus {
            return Err(invalid_relationship(TitleKind::Bonus, TitleKind::Bonus));
        }
        self.link(&mut bonus.parent);
        Ok(())
    }
}

/// Clears the parent reference of the accepted child title, but only when
/// the caller names the child's current parent.
pub struct ParentUnsetter {
    parent_id: String,
}

impl ParentUnsetter {
    pub fn new(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
        }
    }

    fn unlink(&self, slot: &mut Option<Box<Title>>) -> AppResult<()> {
        let actual = slot.as_deref().and_then(Title::id);
        if actual != Some(self.parent_id.as_str()) {
            return Err(AppError::ParentMismatch {
                expected: self.parent_id.clone(),
                actual: actual.unwrap_or("none").to_owned(),
            });
        }
        *slot = None;
        Ok(())
    }
}

impl TitleVisitor for ParentUnsetter {
    type Output = AppResult<()>;

    fn visit_feature(&mut self, _: &mut Feature) -> AppResult<()> {
        Err(not_a_child(TitleKind::Feature))
    }

    fn visit_tv_series(&mut self, _: &mut TvSeries) -> AppResult<()> {
        Err(not_a_child(TitleKind::TvSeries))
    }

    fn visit_season(&mut self, season: &mut Season) -> AppResult<()> {
        self.unlink(&mut season.parent)
    }

    fn visit_episode(&mut self, episode: &mut Episode) -> AppResult<()> {
        self.unlink(&mut episode.parent)
    }

    fn visit_bonus(&mut self, bonus: &mut Bonus) -> AppResult<()> {
        self.unlink(&mut bonus.parent)
    }
}
