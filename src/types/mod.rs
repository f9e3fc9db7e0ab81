//! Core types for the board engine

mod board;
mod card;
mod ids;

pub use board::{Board, List, Swimlane};
pub use card::Card;
pub use ids::{BoardId, CardId, ListId, SwimlaneId};
