//! UpdateCard operation

use crate::error::{BoardError, Result};
use crate::store::Apply;
use crate::types::{Board, CardId};
use chrono::NaiveDate;

/// Edit a card's title, description, deadline, or color.
/// Unset fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateCard {
    /// The card to update
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New deadline
    pub deadline: Option<NaiveDate>,
    /// New color
    pub color: Option<String>,
}

impl UpdateCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            deadline: None,
            color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for UpdateCard {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(card) = board.card(&self.id) else {
            return Err(BoardError::CardNotFound {
                id: self.id.to_string(),
            });
        };

        let mut card = card.clone();
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = Some(description.clone());
        }
        if let Some(deadline) = self.deadline {
            card.deadline = Some(deadline);
        }
        if let Some(color) = &self.color {
            card.color = Some(color.clone());
        }

        let mut next = board.clone();
        next.upsert_card(card);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::list::AddList;
    use crate::swimlane::AddSwimlane;

    fn board_with_card() -> (Board, CardId) {
        let lane = AddSwimlane::new().with_name("Team");
        let board = lane.apply(&Board::new("Test")).unwrap();
        let list = AddList::new(lane.id.clone(), "Backlog");
        let board = list.apply(&board).unwrap();
        let card = AddCard::new(list.id.clone(), "Task");
        let board = card.apply(&board).unwrap();
        (board, card.id)
    }

    #[test]
    fn test_update_all_fields() {
        let (board, card_id) = board_with_card();
        let due = NaiveDate::from_ymd_opt(2026, 11, 5).unwrap();

        let board = UpdateCard::new(card_id.clone())
            .with_title("Renamed")
            .with_description("More detail")
            .with_deadline(due)
            .with_color("e36209")
            .apply(&board)
            .unwrap();

        let card = board.card(&card_id).unwrap();
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description.as_deref(), Some("More detail"));
        assert_eq!(card.deadline, Some(due));
        assert_eq!(card.color.as_deref(), Some("e36209"));
    }

    #[test]
    fn test_partial_update_leaves_rest() {
        let (board, card_id) = board_with_card();

        let board = UpdateCard::new(card_id.clone())
            .with_color("0e8a16")
            .apply(&board)
            .unwrap();

        let card = board.card(&card_id).unwrap();
        assert_eq!(card.title, "Task");
        assert!(card.description.is_none());
        assert_eq!(card.color.as_deref(), Some("0e8a16"));
    }

    #[test]
    fn test_missing_card_errors() {
        let result = UpdateCard::new("ghost").apply(&Board::new("Test"));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }
}
