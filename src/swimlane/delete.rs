//! DeleteSwimlane operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::store::Apply;
use crate::types::{Board, SwimlaneId};

/// Delete a swimlane and everything it owns.
///
/// Every list the lane owns and every card those lists own are removed from
/// their entity maps along with the lane itself; remaining swimlane orders
/// are re-derived.
#[derive(Debug, Clone)]
pub struct DeleteSwimlane {
    /// The swimlane to delete
    pub id: SwimlaneId,
}

impl DeleteSwimlane {
    pub fn new(id: impl Into<SwimlaneId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteSwimlane {
    fn apply(&self, board: &Board) -> Result<Board> {
        if board.swimlane(&self.id).is_none() {
            return Err(BoardError::SwimlaneNotFound {
                id: self.id.to_string(),
            });
        }

        let mut next = board.clone();
        integrity::cascade_delete_swimlane(&mut next, &self.id);
        Ok(next)
    }
}
