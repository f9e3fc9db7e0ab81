//! DeleteCard operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, CardId};

/// Delete a card, closing the gap in its owning list
#[derive(Debug, Clone)]
pub struct DeleteCard {
    /// The card to delete
    pub id: CardId,
}

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteCard {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(source) = board.owner_of_card(&self.id).cloned() else {
            return Err(BoardError::CardNotFound {
                id: self.id.to_string(),
            });
        };

        let mut next = board.clone();
        next.cards.remove(&self.id);
        if let Some(list) = next.lists.get_mut(&source) {
            integrity::remove_id(&mut list.cards, &self.id);
        }
        ordering::reindex_list(&mut next, &source);
        Ok(next)
    }
}
