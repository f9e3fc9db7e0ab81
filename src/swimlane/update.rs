//! UpdateSwimlane operation

use crate::error::{BoardError, Result};
use crate::store::Apply;
use crate::types::{Board, SwimlaneId};

/// Rename or recolor a swimlane. Unset fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateSwimlane {
    /// The swimlane to update
    pub id: SwimlaneId,
    /// New display name
    pub name: Option<String>,
    /// New color
    pub color: Option<String>,
}

impl UpdateSwimlane {
    pub fn new(id: impl Into<SwimlaneId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for UpdateSwimlane {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(lane) = board.swimlane(&self.id) else {
            return Err(BoardError::SwimlaneNotFound {
                id: self.id.to_string(),
            });
        };

        let mut lane = lane.clone();
        if let Some(name) = &self.name {
            lane.name = name.clone();
        }
        if let Some(color) = &self.color {
            lane.color = Some(color.clone());
        }

        let mut next = board.clone();
        next.upsert_swimlane(lane);
        Ok(next)
    }
}
