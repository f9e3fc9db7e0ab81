//! The board state container.
//!
//! `BoardStore` owns the committed board and applies operations through the
//! [`Apply`] trait: each operation is a pure transition from the current
//! board to a new one, and the store replaces the whole state on success.
//! That keeps invariant-preserving logic out of the event/render layer and
//! independently testable.

use crate::error::Result;
use crate::types::Board;

/// A pure state transition.
///
/// Implementations never mutate the input board; they return a new board
/// with the change applied, or an error describing why nothing changed.
pub trait Apply {
    fn apply(&self, board: &Board) -> Result<Board>;
}

/// Owns the committed board state and applies operations to it.
///
/// Single-writer by construction: `dispatch` is synchronous and runs each
/// transition to completion, so two structural mutations can never
/// interleave. Reference misses (an operation naming an entity that no
/// longer exists) are swallowed here and leave the state unchanged, because
/// drag-and-drop races rapid pointer events against re-renders and a miss is
/// a normal outcome of that race. Everything else propagates.
pub struct BoardStore {
    state: Board,
}

impl BoardStore {
    /// Create a store owning the given board
    pub fn new(board: Board) -> Self {
        Self { state: board }
    }

    /// The committed board state
    pub fn state(&self) -> &Board {
        &self.state
    }

    /// Apply an operation, committing the new state on success.
    ///
    /// Returns the (possibly unchanged) committed state. Operations against
    /// missing entities are logged at debug and dropped.
    pub fn dispatch<O: Apply + ?Sized>(&mut self, op: &O) -> Result<&Board> {
        match op.apply(&self.state) {
            Ok(next) => {
                debug_assert_eq!(crate::integrity::verify(&next), Ok(()));
                self.state = next;
                Ok(&self.state)
            }
            Err(err) if err.is_reference_miss() => {
                tracing::debug!(error = %err, "dropping operation against missing entity");
                Ok(&self.state)
            }
            Err(err) => {
                tracing::warn!(error = %err, "operation rejected");
                Err(err)
            }
        }
    }
}
