//! DeleteList operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::store::Apply;
use crate::types::{Board, ListId};

/// Delete a list and every card it owns
#[derive(Debug, Clone)]
pub struct DeleteList {
    /// The list to delete
    pub id: ListId,
}

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteList {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(source) = board.owner_of_list(&self.id).cloned() else {
            return Err(BoardError::ListNotFound {
                id: self.id.to_string(),
            });
        };

        let mut next = board.clone();
        if let Some(list) = next.lists.remove(&self.id) {
            for card_id in &list.cards {
                next.cards.remove(card_id);
            }
        }
        if let Some(lane) = next.swimlanes.get_mut(&source) {
            integrity::remove_id(&mut lane.lists, &self.id);
        }
        Ok(next)
    }
}
