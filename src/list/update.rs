//! UpdateList operation

use crate::error::{BoardError, Result};
use crate::store::Apply;
use crate::types::{Board, ListId};

/// Rename or recolor a list. Unset fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateList {
    /// The list to update
    pub id: ListId,
    /// New title
    pub title: Option<String>,
    /// New color
    pub color: Option<String>,
}

impl UpdateList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for UpdateList {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(list) = board.list(&self.id) else {
            return Err(BoardError::ListNotFound {
                id: self.id.to_string(),
            });
        };

        let mut list = list.clone();
        if let Some(title) = &self.title {
            list.title = title.clone();
        }
        if let Some(color) = &self.color {
            list.color = Some(color.clone());
        }

        let mut next = board.clone();
        next.upsert_list(list);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::AddList;
    use crate::swimlane::AddSwimlane;

    #[test]
    fn test_rename_and_recolor() {
        let lane = AddSwimlane::new().with_name("Team");
        let board = lane.apply(&Board::new("Test")).unwrap();
        let add = AddList::new(lane.id.clone(), "Backlog");
        let board = add.apply(&board).unwrap();

        let board = UpdateList::new(add.id.clone())
            .with_title("Icebox")
            .with_color("006b75")
            .apply(&board)
            .unwrap();

        let list = board.list(&add.id).unwrap();
        assert_eq!(list.title, "Icebox");
        assert_eq!(list.color.as_deref(), Some("006b75"));
    }

    #[test]
    fn test_missing_list_errors() {
        let result = UpdateList::new("ghost").apply(&Board::new("Test"));
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }
}
