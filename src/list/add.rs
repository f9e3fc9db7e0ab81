//! AddList operation

use crate::error::{BoardError, Result};
use crate::store::Apply;
use crate::types::{Board, List, ListId, SwimlaneId};

/// Add a new list at the end of a swimlane
#[derive(Debug, Clone)]
pub struct AddList {
    /// Id of the list to create
    pub id: ListId,
    /// The owning swimlane
    pub swimlane: SwimlaneId,
    /// The list title
    pub title: String,
    /// Optional color
    pub color: Option<String>,
}

impl AddList {
    /// Create a new AddList operation
    pub fn new(swimlane: impl Into<SwimlaneId>, title: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            swimlane: swimlane.into(),
            title: title.into(),
            color: None,
        }
    }

    /// Use an explicit id instead of the generated one
    pub fn with_id(mut self, id: impl Into<ListId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Apply for AddList {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(lane) = board.swimlane(&self.swimlane) else {
            return Err(BoardError::SwimlaneNotFound {
                id: self.swimlane.to_string(),
            });
        };
        if board.list(&self.id).is_some() {
            return Err(BoardError::duplicate_id("list", self.id.to_string()));
        }

        let mut list = List::new(self.title.clone());
        list.id = self.id.clone();
        list.color = self.color.clone();

        let mut lane = lane.clone();
        lane.lists.push(list.id.clone());

        let mut next = board.clone();
        next.upsert_list(list);
        next.upsert_swimlane(lane);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity;
    use crate::swimlane::AddSwimlane;

    #[test]
    fn test_add_list_appends_to_swimlane() {
        let lane = AddSwimlane::new().with_name("Team");
        let board = lane.apply(&Board::new("Test")).unwrap();

        let first = AddList::new(lane.id.clone(), "Backlog");
        let second = AddList::new(lane.id.clone(), "Doing").with_color("0e8a16");
        let board = first.apply(&board).unwrap();
        let board = second.apply(&board).unwrap();

        let owner = board.swimlane(&lane.id).unwrap();
        assert_eq!(owner.lists, vec![first.id.clone(), second.id.clone()]);
        assert_eq!(board.list(&second.id).unwrap().color.as_deref(), Some("0e8a16"));
        assert_eq!(integrity::verify(&board), Ok(()));
    }

    #[test]
    fn test_add_list_missing_swimlane() {
        let result = AddList::new("ghost", "Backlog").apply(&Board::new("Test"));
        assert!(matches!(result, Err(BoardError::SwimlaneNotFound { .. })));
    }

    #[test]
    fn test_add_list_duplicate_id() {
        let lane = AddSwimlane::new().with_name("Team");
        let board = lane.apply(&Board::new("Test")).unwrap();

        let op = AddList::new(lane.id.clone(), "Backlog").with_id("list-1");
        let board = op.apply(&board).unwrap();

        let dup = AddList::new(lane.id.clone(), "Another").with_id("list-1");
        assert!(matches!(dup.apply(&board), Err(BoardError::DuplicateId { .. })));
    }
}
