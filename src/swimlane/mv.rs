//! MoveSwimlane operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, SwimlaneId};

/// Reorder a swimlane within the board.
///
/// `before` names the swimlane the moving lane is inserted in front of. With
/// no anchor the lane goes to the end of the board (the end-of-board drop
/// zone). Moving a lane in front of itself is a no-op that still re-derives
/// the order caches.
#[derive(Debug, Clone)]
pub struct MoveSwimlane {
    /// The swimlane to move
    pub id: SwimlaneId,
    /// Insert immediately before this swimlane; absent means end of board
    pub before: Option<SwimlaneId>,
}

impl MoveSwimlane {
    /// Create a new MoveSwimlane operation targeting the end of the board
    pub fn new(id: impl Into<SwimlaneId>) -> Self {
        Self {
            id: id.into(),
            before: None,
        }
    }

    /// Insert before the given swimlane
    pub fn before(mut self, anchor: impl Into<SwimlaneId>) -> Self {
        self.before = Some(anchor.into());
        self
    }
}

impl Apply for MoveSwimlane {
    fn apply(&self, board: &Board) -> Result<Board> {
        if board.swimlane(&self.id).is_none() {
            return Err(BoardError::SwimlaneNotFound {
                id: self.id.to_string(),
            });
        }

        let mut next = board.clone();

        // Self-anchored drop: nothing moves, caches re-derived
        if self.before.as_ref() == Some(&self.id) {
            ordering::reindex_swimlanes(&mut next);
            return Ok(next);
        }

        integrity::remove_id(&mut next.swimlane_order, &self.id);
        integrity::insert_before(&mut next.swimlane_order, self.id.clone(), self.before.as_ref());
        ordering::reindex_swimlanes(&mut next);
        Ok(next)
    }
}
