//! AddCard operation

use crate::error::{BoardError, Result};
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, Card, CardId, ListId};
use chrono::NaiveDate;

/// Add a new card at the end of a list
#[derive(Debug, Clone)]
pub struct AddCard {
    /// Id of the card to create
    pub id: CardId,
    /// The owning list
    pub list: ListId,
    /// The card title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional deadline
    pub deadline: Option<NaiveDate>,
    /// Optional color
    pub color: Option<String>,
}

impl AddCard {
    /// Create a new AddCard operation
    pub fn new(list: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            list: list.into(),
            title: title.into(),
            description: None,
            deadline: None,
            color: None,
        }
    }

    /// Use an explicit id instead of the generated one
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for AddCard {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(list) = board.list(&self.list) else {
            return Err(BoardError::ListNotFound {
                id: self.list.to_string(),
            });
        };
        if board.card(&self.id).is_some() {
            return Err(BoardError::duplicate_id("card", self.id.to_string()));
        }

        let mut card = Card::new(self.title.clone());
        card.id = self.id.clone();
        card.description = self.description.clone();
        card.deadline = self.deadline;
        card.color = self.color.clone();

        let mut list = list.clone();
        list.cards.push(card.id.clone());

        let mut next = board.clone();
        next.upsert_card(card);
        next.upsert_list(list);
        ordering::reindex_list(&mut next, &self.list);
        Ok(next)
    }
}
