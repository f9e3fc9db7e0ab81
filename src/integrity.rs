//! Referential-integrity helpers and the board invariant checker.
//!
//! The splice helpers implement remove-before-insert: a moving id is always
//! pulled out of the source sequence (and of the target sequence on a
//! cross-container move, in case a stale copy is already present) before it
//! is inserted at its new position. Cascade deletion keeps the entity maps
//! free of orphans when a container goes away.
//!
//! `verify` checks every board invariant and names the first violation. The
//! store runs it behind `debug_assert!`; tests call it directly.

use crate::ordering;
use crate::types::{Board, SwimlaneId};
use std::collections::HashSet;
use thiserror::Error;

/// A broken board invariant, as reported by [`verify`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("sequence references missing {kind}: {id}")]
    Dangling { kind: &'static str, id: String },

    #[error("{kind} {id} appears in more than one owning sequence")]
    MultipleOwners { kind: &'static str, id: String },

    #[error("{kind} {id} is in the entity map but no owning sequence")]
    Orphaned { kind: &'static str, id: String },

    #[error("{kind} {id} has order {cached} but sequence index {actual}")]
    StaleOrder {
        kind: &'static str,
        id: String,
        cached: usize,
        actual: usize,
    },
}

/// Remove the first occurrence of `id` from `seq`, returning its old index.
pub(crate) fn remove_id<T: PartialEq>(seq: &mut Vec<T>, id: &T) -> Option<usize> {
    let idx = seq.iter().position(|x| x == id)?;
    seq.remove(idx);
    Some(idx)
}

/// Insert `id` immediately before `anchor`, pushing the anchor and everything
/// after it one position later. An absent or unknown anchor appends at the end.
pub(crate) fn insert_before<T: PartialEq>(seq: &mut Vec<T>, id: T, anchor: Option<&T>) {
    match anchor.and_then(|a| seq.iter().position(|x| x == a)) {
        Some(idx) => seq.insert(idx, id),
        None => seq.push(id),
    }
}

/// Delete a swimlane and everything it owns.
///
/// Removes the swimlane from the map and from `swimlane_order`, every list it
/// owns from the list map, and every card those lists own from the card map,
/// then re-derives the remaining swimlane orders.
pub(crate) fn cascade_delete_swimlane(board: &mut Board, id: &SwimlaneId) {
    let Some(lane) = board.swimlanes.remove(id) else {
        return;
    };
    for list_id in &lane.lists {
        if let Some(list) = board.lists.remove(list_id) {
            for card_id in &list.cards {
                board.cards.remove(card_id);
            }
        }
    }
    remove_id(&mut board.swimlane_order, id);
    ordering::reindex_swimlanes(board);
}

/// Check every board invariant, returning the first violation found.
///
/// Invariants:
/// - every id in an ordered sequence exists in its entity map;
/// - every card belongs to exactly one list, every list to exactly one
///   swimlane, every swimlane appears exactly once in `swimlane_order`;
/// - every `order` cache equals the entity's index in its owning sequence.
pub fn verify(board: &Board) -> std::result::Result<(), Violation> {
    let mut seen_lanes = HashSet::new();
    for (idx, lane_id) in board.swimlane_order.iter().enumerate() {
        let lane = board.swimlanes.get(lane_id).ok_or_else(|| Violation::Dangling {
            kind: "swimlane",
            id: lane_id.to_string(),
        })?;
        if !seen_lanes.insert(lane_id) {
            return Err(Violation::MultipleOwners {
                kind: "swimlane",
                id: lane_id.to_string(),
            });
        }
        if lane.order != idx {
            return Err(Violation::StaleOrder {
                kind: "swimlane",
                id: lane_id.to_string(),
                cached: lane.order,
                actual: idx,
            });
        }
    }
    for lane_id in board.swimlanes.keys() {
        if !seen_lanes.contains(lane_id) {
            return Err(Violation::Orphaned {
                kind: "swimlane",
                id: lane_id.to_string(),
            });
        }
    }

    let mut seen_lists = HashSet::new();
    for lane in board.swimlanes.values() {
        for list_id in &lane.lists {
            if !board.lists.contains_key(list_id) {
                return Err(Violation::Dangling {
                    kind: "list",
                    id: list_id.to_string(),
                });
            }
            if !seen_lists.insert(list_id) {
                return Err(Violation::MultipleOwners {
                    kind: "list",
                    id: list_id.to_string(),
                });
            }
        }
    }
    for list_id in board.lists.keys() {
        if !seen_lists.contains(list_id) {
            return Err(Violation::Orphaned {
                kind: "list",
                id: list_id.to_string(),
            });
        }
    }

    let mut seen_cards = HashSet::new();
    for list in board.lists.values() {
        for (idx, card_id) in list.cards.iter().enumerate() {
            let card = board.cards.get(card_id).ok_or_else(|| Violation::Dangling {
                kind: "card",
                id: card_id.to_string(),
            })?;
            if !seen_cards.insert(card_id) {
                return Err(Violation::MultipleOwners {
                    kind: "card",
                    id: card_id.to_string(),
                });
            }
            if card.order != idx {
                return Err(Violation::StaleOrder {
                    kind: "card",
                    id: card_id.to_string(),
                    cached: card.order,
                    actual: idx,
                });
            }
        }
    }
    for card_id in board.cards.keys() {
        if !seen_cards.contains(card_id) {
            return Err(Violation::Orphaned {
                kind: "card",
                id: card_id.to_string(),
            });
        }
    }

    Ok(())
}
