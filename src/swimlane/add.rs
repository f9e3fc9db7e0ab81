//! AddSwimlane operation

use crate::error::{BoardError, Result};
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, Swimlane, SwimlaneId};

/// Add a new swimlane at the end of the board.
///
/// The display name and the default list template are both optional; a bare
/// `AddSwimlane::new()` appends an empty, generically named lane.
#[derive(Debug, Clone)]
pub struct AddSwimlane {
    /// Id of the swimlane to create (generated up front so the caller can
    /// refer to the lane after dispatch)
    pub id: SwimlaneId,
    /// Optional display name
    pub name: Option<String>,
    /// Seed the lane with the default list template
    pub template: bool,
    /// Optional color
    pub color: Option<String>,
}

impl Default for AddSwimlane {
    fn default() -> Self {
        Self::new()
    }
}

impl AddSwimlane {
    /// Create a new AddSwimlane operation
    pub fn new() -> Self {
        Self {
            id: SwimlaneId::new(),
            name: None,
            template: false,
            color: None,
        }
    }

    /// Use an explicit id instead of the generated one
    pub fn with_id(mut self, id: impl Into<SwimlaneId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Seed the lane with the default list template
    pub fn with_template(mut self) -> Self {
        self.template = true;
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for AddSwimlane {
    fn apply(&self, board: &Board) -> Result<Board> {
        if board.swimlane(&self.id).is_some() {
            return Err(BoardError::duplicate_id("swimlane", self.id.to_string()));
        }

        let mut next = board.clone();
        let name = self.name.clone().unwrap_or_else(|| "New swimlane".into());
        let mut lane = Swimlane::new(name);
        lane.id = self.id.clone();
        lane.color = self.color.clone();

        if self.template {
            for list in Board::default_lists() {
                lane.lists.push(list.id.clone());
                next.upsert_list(list);
            }
        }

        next.swimlane_order.push(lane.id.clone());
        next.upsert_swimlane(lane);
        ordering::reindex_swimlanes(&mut next);
        Ok(next)
    }
}
