//! Order-cache maintenance.
//!
//! `order` fields on cards and swimlanes cache the entity's index in its
//! owning sequence. They are never authoritative: after any operation that
//! adds, removes, or repositions ids within a sequence, the caches for every
//! id remaining in that sequence are rewritten here, 0-based and contiguous.
//! Operations call these helpers as their final step for every sequence they
//! touched; index rewriting is never inlined at call sites.

use crate::types::{Board, ListId};

/// Rewrite the `order` cache of every card in the given list's sequence.
///
/// Missing list or missing cards are tolerated silently; a concurrent
/// structural change may have removed them within the same synchronous pass.
pub fn reindex_list(board: &mut Board, list: &ListId) {
    let ids = match board.lists.get(list) {
        Some(list) => list.cards.clone(),
        None => return,
    };
    for (idx, card_id) in ids.iter().enumerate() {
        if let Some(card) = board.cards.get_mut(card_id) {
            card.order = idx;
        }
    }
}

/// Rewrite the `order` cache of every swimlane from `swimlane_order`.
pub fn reindex_swimlanes(board: &mut Board) {
    let ids = board.swimlane_order.clone();
    for (idx, lane_id) in ids.iter().enumerate() {
        if let Some(lane) = board.swimlanes.get_mut(lane_id) {
            lane.order = idx;
        }
    }
}
