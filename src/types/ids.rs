//! Identifier newtypes for board entities.
//!
//! Ids are opaque strings. `new()` generates a ULID; `from_string()` accepts
//! any slug, which keeps fixture ids readable in tests and lets a host supply
//! its own identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing string id
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id!(
    /// Identifies a board
    BoardId
);
entity_id!(
    /// Identifies a swimlane
    SwimlaneId
);
entity_id!(
    /// Identifies a list (a column within a swimlane)
    ListId
);
entity_id!(
    /// Identifies a card
    CardId
);
