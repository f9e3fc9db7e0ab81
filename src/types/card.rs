//! Card type: a task/work-item on the board

use super::ids::CardId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A card on the kanban board.
///
/// Cards are owned by exactly one list through that list's ordered card-id
/// sequence. The `order` field caches the card's index in the owning
/// sequence; it is rewritten after every structural change and is never
/// authoritative on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deadline as a calendar date (ISO form in serialized output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Cached index within the owning list's card sequence
    pub order: usize,
    /// 6-character hex color code without `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Card {
    /// Create a new card with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            deadline: None,
            order: 0,
            color: None,
        }
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

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
