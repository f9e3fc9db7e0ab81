//! InitBoard operation

use crate::error::Result;
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, Swimlane};

/// Reset the store to a fresh board.
///
/// Optionally seeds the board with one swimlane carrying the default list
/// template, so a new board renders with usable columns immediately.
#[derive(Debug, Clone)]
pub struct InitBoard {
    /// The board display name
    pub name: String,
    /// Seed a default swimlane with the default list template
    pub template: bool,
}

impl InitBoard {
    /// Create a new InitBoard operation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: false,
        }
    }

    /// Seed the board with a templated default swimlane
    pub fn with_template(mut self) -> Self {
        self.template = true;
        self
    }
}

impl Apply for InitBoard {
    fn apply(&self, _board: &Board) -> Result<Board> {
        let mut next = Board::new(self.name.clone());

        if self.template {
            let mut lane = Swimlane::new("Main");
            for list in Board::default_lists() {
                lane.lists.push(list.id.clone());
                next.upsert_list(list);
            }
            next.swimlane_order.push(lane.id.clone());
            next.upsert_swimlane(lane);
            ordering::reindex_swimlanes(&mut next);
        }

        Ok(next)
    }
}
