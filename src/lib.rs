//! Kanban board state engine
//!
//! This crate owns the data model and mutation logic of a kanban board:
//! swimlanes grouping lists, lists owning cards, all reorderable by drag and
//! drop. It has no rendering, no storage, and no string tables; a host feeds
//! it operations and renders the resulting state.
//!
//! ## Overview
//!
//! - **Normalized state** - cards, lists, and swimlanes live in maps keyed by
//!   id; hierarchy and order are carried by id sequences
//! - **Pure transitions** - every operation maps the current board to a new
//!   one through the [`Apply`] trait; [`BoardStore`] commits the result
//! - **Forgiving moves** - operations naming entities that no longer exist
//!   are dropped silently, because drag-and-drop races pointer events
//!   against re-renders
//! - **AI ranking** - an async collaborator can rank a list's cards; the
//!   engine re-sorts by the response and degrades gracefully on partial or
//!   malformed replies
//!
//! ## Basic Usage
//!
//! ```rust
//! use boardflow::{board::InitBoard, card::MoveCard, swimlane::AddSwimlane};
//! use boardflow::{Board, BoardStore};
//!
//! # fn example() -> boardflow::Result<()> {
//! let mut store = BoardStore::new(Board::new("seed"));
//! store.dispatch(&InitBoard::new("Sprint 12"))?;
//!
//! let lane = AddSwimlane::new().with_name("Team A").with_template();
//! store.dispatch(&lane)?;
//!
//! // Drag a card to the front of another list
//! store.dispatch(&MoveCard::new("card-1", "list-2").before("card-9"))?;
//! # Ok(())
//! # }
//! ```

pub mod auto_color;
mod error;
pub mod integrity;
pub mod ordering;
mod store;
pub mod types;

// Operation modules
pub mod board;
pub mod card;
pub mod drag;
pub mod list;
pub mod rank;
pub mod swimlane;

pub use error::{BoardError, Result};
pub use store::{Apply, BoardStore};

// Re-export commonly used types
pub use types::{Board, BoardId, Card, CardId, List, ListId, Swimlane, SwimlaneId};
