//! Drag session tracking.
//!
//! The session is a small state machine kept apart from the committed board:
//! a drag in progress never mutates board state. Hovering over candidate
//! drop zones only updates the preview; the commit happens on drop, when the
//! session hands back the matching move operation and resets to idle whether
//! or not that operation later succeeds.
//!
//! Payloads are tagged variants carrying the dragged entity's id and its
//! source container, so drop handling is a match on kinds rather than a
//! string lookup in transfer data.

use crate::card::MoveCard;
use crate::error::Result;
use crate::list::MoveList;
use crate::store::Apply;
use crate::swimlane::MoveSwimlane;
use crate::types::{Board, CardId, ListId, SwimlaneId};

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    Card { id: CardId, source_list: ListId },
    List { id: ListId, source_swimlane: SwimlaneId },
    Swimlane { id: SwimlaneId },
}

/// A candidate drop zone, as reported by the interaction layer.
///
/// `before` is the anchor: the entity the dragged one would be inserted in
/// front of. Absent means the end-of-container zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    List {
        list: ListId,
        before: Option<CardId>,
    },
    Swimlane {
        swimlane: SwimlaneId,
        before: Option<ListId>,
    },
    Board {
        before: Option<SwimlaneId>,
    },
}

impl DropTarget {
    /// Whether this target can accept the given payload kind
    fn accepts(&self, payload: &DragPayload) -> bool {
        matches!(
            (payload, self),
            (DragPayload::Card { .. }, DropTarget::List { .. })
                | (DragPayload::List { .. }, DropTarget::Swimlane { .. })
                | (DragPayload::Swimlane { .. }, DropTarget::Board { .. })
        )
    }
}

/// The move operation produced by a completed drop, ready for dispatch
#[derive(Debug, Clone)]
pub enum DragCommit {
    Card(MoveCard),
    List(MoveList),
    Swimlane(MoveSwimlane),
}

impl Apply for DragCommit {
    fn apply(&self, board: &Board) -> Result<Board> {
        match self {
            Self::Card(op) => op.apply(board),
            Self::List(op) => op.apply(board),
            Self::Swimlane(op) => op.apply(board),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Dragging {
        payload: DragPayload,
        preview: Option<DropTarget>,
    },
}

/// Tracks one drag interaction from start to drop or cancellation
#[derive(Debug, Clone)]
pub struct DragSession {
    state: State,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// The payload of the drag in progress, if any
    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            State::Dragging { payload, .. } => Some(payload),
            State::Idle => None,
        }
    }

    /// The current drop-target preview, if any
    pub fn preview(&self) -> Option<&DropTarget> {
        match &self.state {
            State::Dragging { preview, .. } => preview.as_ref(),
            State::Idle => None,
        }
    }

    /// Enter the dragging state. A drag started over a running drag replaces it.
    pub fn begin(&mut self, payload: DragPayload) {
        tracing::debug!(?payload, "drag started");
        self.state = State::Dragging {
            payload,
            preview: None,
        };
    }

    /// Update the drop-target preview from a drag-over event.
    ///
    /// Fires many times per second while the pointer moves; never touches
    /// committed state. A target that cannot accept the payload kind clears
    /// the preview.
    pub fn hover(&mut self, target: DropTarget) {
        if let State::Dragging { payload, preview } = &mut self.state {
            *preview = target.accepts(payload).then_some(target);
        }
    }

    /// Abandon the drag without committing
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag cancelled");
        }
        self.state = State::Idle;
    }

    /// Complete the drag on the given target.
    ///
    /// Returns the move operation to dispatch, or `None` when idle or when
    /// the target kind cannot accept the payload. The session resets to idle
    /// either way; commit failure downstream does not re-enter dragging.
    pub fn drop_on(&mut self, target: DropTarget) -> Option<DragCommit> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Dragging { payload, .. } = state else {
            return None;
        };

        let commit = match (payload, target) {
            (DragPayload::Card { id, .. }, DropTarget::List { list, before }) => {
                Some(DragCommit::Card(MoveCard {
                    id,
                    to_list: list,
                    before,
                }))
            }
            (DragPayload::List { id, .. }, DropTarget::Swimlane { swimlane, before }) => {
                Some(DragCommit::List(MoveList {
                    id,
                    to_swimlane: swimlane,
                    before,
                }))
            }
            (DragPayload::Swimlane { id }, DropTarget::Board { before }) => {
                Some(DragCommit::Swimlane(MoveSwimlane { id, before }))
            }
            _ => None,
        };
        tracing::debug!(committed = commit.is_some(), "drag dropped");
        commit
    }
}
