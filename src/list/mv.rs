//! MoveList operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::store::Apply;
use crate::types::{Board, ListId, SwimlaneId};

/// Move a list within or across swimlanes.
///
/// `before` names the list the moving list is inserted in front of. A
/// cross-swimlane move with no anchor appends at the end of the target lane.
/// Dropping a list back onto its own swimlane with no anchor, or in front of
/// itself, is a no-op; so is dropping it onto a swimlane that contains only
/// that list.
#[derive(Debug, Clone)]
pub struct MoveList {
    /// The list to move
    pub id: ListId,
    /// The target swimlane
    pub to_swimlane: SwimlaneId,
    /// Insert immediately before this list; absent means end of the lane
    pub before: Option<ListId>,
}

impl MoveList {
    /// Create a new MoveList operation targeting the end of a swimlane
    pub fn new(id: impl Into<ListId>, to_swimlane: impl Into<SwimlaneId>) -> Self {
        Self {
            id: id.into(),
            to_swimlane: to_swimlane.into(),
            before: None,
        }
    }

    /// Insert before the given list
    pub fn before(mut self, anchor: impl Into<ListId>) -> Self {
        self.before = Some(anchor.into());
        self
    }
}

impl Apply for MoveList {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(source) = board.owner_of_list(&self.id).cloned() else {
            return Err(BoardError::ListNotFound {
                id: self.id.to_string(),
            });
        };
        if board.swimlane(&self.to_swimlane).is_none() {
            return Err(BoardError::SwimlaneNotFound {
                id: self.to_swimlane.to_string(),
            });
        }

        let same_lane = source == self.to_swimlane;
        let next = board.clone();

        // No-op drops: self-anchored, back onto the own lane body, or onto a
        // lane that holds nothing but the moving list. List sequences carry
        // no order caches, so there is nothing to re-derive.
        if self.before.as_ref() == Some(&self.id) || (same_lane && self.before.is_none()) {
            return Ok(next);
        }

        let mut next = next;
        if let Some(lane) = next.swimlanes.get_mut(&source) {
            integrity::remove_id(&mut lane.lists, &self.id);
        }
        if !same_lane {
            if let Some(lane) = next.swimlanes.get_mut(&self.to_swimlane) {
                integrity::remove_id(&mut lane.lists, &self.id);
            }
        }
        if let Some(lane) = next.swimlanes.get_mut(&self.to_swimlane) {
            integrity::insert_before(&mut lane.lists, self.id.clone(), self.before.as_ref());
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::verify;
    use crate::list::AddList;
    use crate::swimlane::AddSwimlane;

    fn two_lane_board() -> (Board, SwimlaneId, SwimlaneId, Vec<ListId>) {
        let lane_a = AddSwimlane::new().with_name("A");
        let lane_b = AddSwimlane::new().with_name("B");
        let mut board = lane_a.apply(&Board::new("Test")).unwrap();
        board = lane_b.apply(&board).unwrap();

        let mut ids = Vec::new();
        for title in ["L1", "L2"] {
            let op = AddList::new(lane_a.id.clone(), title);
            board = op.apply(&board).unwrap();
            ids.push(op.id);
        }
        (board, lane_a.id, lane_b.id, ids)
    }

    #[test]
    fn test_cross_lane_move_appends() {
        let (board, lane_a, lane_b, lists) = two_lane_board();

        let moved = MoveList::new(lists[0].clone(), lane_b.clone())
            .apply(&board)
            .unwrap();

        assert_eq!(moved.swimlane(&lane_a).unwrap().lists, vec![lists[1].clone()]);
        assert_eq!(moved.swimlane(&lane_b).unwrap().lists, vec![lists[0].clone()]);
        assert_eq!(verify(&moved), Ok(()));
    }

    #[test]
    fn test_intra_lane_move_with_anchor() {
        let (board, lane_a, _, lists) = two_lane_board();

        let moved = MoveList::new(lists[1].clone(), lane_a.clone())
            .before(lists[0].clone())
            .apply(&board)
            .unwrap();

        assert_eq!(
            moved.swimlane(&lane_a).unwrap().lists,
            vec![lists[1].clone(), lists[0].clone()]
        );
        assert_eq!(verify(&moved), Ok(()));
    }

    #[test]
    fn test_own_lane_body_drop_is_noop() {
        let (board, lane_a, _, lists) = two_lane_board();

        let moved = MoveList::new(lists[0].clone(), lane_a.clone())
            .apply(&board)
            .unwrap();
        assert_eq!(moved, board);
    }

    #[test]
    fn test_self_anchor_is_noop() {
        let (board, lane_a, _, lists) = two_lane_board();

        let moved = MoveList::new(lists[0].clone(), lane_a.clone())
            .before(lists[0].clone())
            .apply(&board)
            .unwrap();
        assert_eq!(moved, board);
    }

    #[test]
    fn test_sole_list_lane_drop_is_noop() {
        let (board, _, lane_b, lists) = two_lane_board();

        let board = MoveList::new(lists[0].clone(), lane_b.clone())
            .apply(&board)
            .unwrap();

        // lane_b now holds only lists[0]; dropping it there again changes nothing
        let again = MoveList::new(lists[0].clone(), lane_b.clone())
            .apply(&board)
            .unwrap();
        assert_eq!(again, board);
    }

    #[test]
    fn test_missing_list_errors() {
        let (board, lane_a, _, _) = two_lane_board();
        let result = MoveList::new("ghost", lane_a).apply(&board);
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }

    #[test]
    fn test_missing_target_lane_errors() {
        let (board, _, _, lists) = two_lane_board();
        let result = MoveList::new(lists[0].clone(), "ghost").apply(&board);
        assert!(matches!(result, Err(BoardError::SwimlaneNotFound { .. })));
    }
}
