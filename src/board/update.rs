//! UpdateBoard operation

use crate::error::Result;
use crate::store::Apply;
use crate::types::Board;

/// Rename the board
#[derive(Debug, Clone)]
pub struct UpdateBoard {
    /// New display name
    pub name: String,
}

impl UpdateBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Apply for UpdateBoard {
    fn apply(&self, board: &Board) -> Result<Board> {
        let mut next = board.clone();
        next.name = self.name.clone();
        Ok(next)
    }
}
