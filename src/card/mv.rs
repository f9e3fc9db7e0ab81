//! MoveCard operation

use crate::error::{BoardError, Result};
use crate::integrity;
use crate::ordering;
use crate::store::Apply;
use crate::types::{Board, CardId, ListId};

/// Move a card within or across lists.
///
/// `before` names the card the moving card is inserted in front of; the
/// anchor and everything after it shift one position later. A cross-list
/// move with no anchor appends at the end of the target list. Dropping a
/// card back onto its own list body (no anchor) or in front of itself is a
/// no-op that still re-derives the order caches.
///
/// The moving id is always removed from the source sequence before
/// insertion, and from the target sequence as well on a cross-list move, so
/// a stale copy can never be duplicated.
#[derive(Debug, Clone)]
pub struct MoveCard {
    /// The card to move
    pub id: CardId,
    /// The target list
    pub to_list: ListId,
    /// Insert immediately before this card; absent means end of the list
    pub before: Option<CardId>,
}

impl MoveCard {
    /// Create a new MoveCard operation targeting the end of a list
    pub fn new(id: impl Into<CardId>, to_list: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            to_list: to_list.into(),
            before: None,
        }
    }

    /// Insert before the given card
    pub fn before(mut self, anchor: impl Into<CardId>) -> Self {
        self.before = Some(anchor.into());
        self
    }
}

impl Apply for MoveCard {
    fn apply(&self, board: &Board) -> Result<Board> {
        let Some(source) = board.owner_of_card(&self.id).cloned() else {
            return Err(BoardError::CardNotFound {
                id: self.id.to_string(),
            });
        };
        if board.list(&self.to_list).is_none() {
            return Err(BoardError::ListNotFound {
                id: self.to_list.to_string(),
            });
        }

        let same_list = source == self.to_list;
        let mut next = board.clone();

        // No-op drops: self-anchored, or back onto the own list body.
        // Order caches are still re-derived (value-identical).
        if self.before.as_ref() == Some(&self.id) || (same_list && self.before.is_none()) {
            ordering::reindex_list(&mut next, &source);
            return Ok(next);
        }

        if let Some(list) = next.lists.get_mut(&source) {
            integrity::remove_id(&mut list.cards, &self.id);
        }
        if !same_list {
            if let Some(list) = next.lists.get_mut(&self.to_list) {
                integrity::remove_id(&mut list.cards, &self.id);
            }
        }
        if let Some(list) = next.lists.get_mut(&self.to_list) {
            integrity::insert_before(&mut list.cards, self.id.clone(), self.before.as_ref());
        }

        ordering::reindex_list(&mut next, &source);
        if !same_list {
            ordering::reindex_list(&mut next, &self.to_list);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::integrity::verify;
    use crate::list::AddList;
    use crate::swimlane::AddSwimlane;

    fn board_with_two_lists() -> (Board, ListId, ListId) {
        let lane = AddSwimlane::new().with_name("Team");
        let mut board = lane.apply(&Board::new("Test")).unwrap();
        let l1 = AddList::new(lane.id.clone(), "L1").with_id("l1");
        let l2 = AddList::new(lane.id.clone(), "L2").with_id("l2");
        board = l1.apply(&board).unwrap();
        board = l2.apply(&board).unwrap();
        (board, l1.id, l2.id)
    }

    fn add_card(board: &Board, list: &ListId, id: &str) -> Board {
        AddCard::new(list.clone(), id).with_id(id).apply(board).unwrap()
    }

    #[test]
    fn test_cross_list_move_with_anchor() {
        let (board, l1, l2) = board_with_two_lists();
        let board = add_card(&board, &l1, "x");
        let board = add_card(&board, &l1, "y");
        let board = add_card(&board, &l2, "z");

        let moved = MoveCard::new("x", l2.clone()).before("z").apply(&board).unwrap();

        assert_eq!(moved.list(&l1).unwrap().cards, vec![CardId::from_string("y")]);
        assert_eq!(
            moved.list(&l2).unwrap().cards,
            vec![CardId::from_string("x"), CardId::from_string("z")]
        );
        assert_eq!(moved.card(&CardId::from_string("y")).unwrap().order, 0);
        assert_eq!(moved.card(&CardId::from_string("x")).unwrap().order, 0);
        assert_eq!(moved.card(&CardId::from_string("z")).unwrap().order, 1);
        assert_eq!(verify(&moved), Ok(()));
    }

    #[test]
    fn test_cross_list_move_no_anchor_appends() {
        let (board, l1, l2) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let board = add_card(&board, &l2, "b");

        let moved = MoveCard::new("a", l2.clone()).apply(&board).unwrap();

        assert_eq!(
            moved.list(&l2).unwrap().cards,
            vec![CardId::from_string("b"), CardId::from_string("a")]
        );
        assert!(moved.list(&l1).unwrap().cards.is_empty());
        assert_eq!(verify(&moved), Ok(()));
    }

    #[test]
    fn test_intra_list_reorder() {
        let (board, l1, _) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let board = add_card(&board, &l1, "b");
        let board = add_card(&board, &l1, "c");

        let moved = MoveCard::new("c", l1.clone()).before("a").apply(&board).unwrap();

        let ids: Vec<&str> = moved
            .list(&l1)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(verify(&moved), Ok(()));
    }

    #[test]
    fn test_own_list_body_drop_is_noop() {
        let (board, l1, _) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let board = add_card(&board, &l1, "b");

        let moved = MoveCard::new("a", l1.clone()).apply(&board).unwrap();
        assert_eq!(moved, board);
    }

    #[test]
    fn test_self_anchor_is_noop() {
        let (board, l1, _) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let board = add_card(&board, &l1, "b");

        let moved = MoveCard::new("b", l1.clone()).before("b").apply(&board).unwrap();
        assert_eq!(moved, board);
    }

    #[test]
    fn test_unknown_anchor_appends() {
        let (board, l1, l2) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let board = add_card(&board, &l2, "b");

        let moved = MoveCard::new("a", l2.clone()).before("gone").apply(&board).unwrap();
        assert_eq!(
            moved.list(&l2).unwrap().cards,
            vec![CardId::from_string("b"), CardId::from_string("a")]
        );
    }

    #[test]
    fn test_missing_card_errors() {
        let (board, l1, _) = board_with_two_lists();
        let result = MoveCard::new("ghost", l1).apply(&board);
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }

    #[test]
    fn test_missing_target_list_errors() {
        let (board, l1, _) = board_with_two_lists();
        let board = add_card(&board, &l1, "a");
        let result = MoveCard::new("a", "ghost").apply(&board);
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }
}
