use std::fmt;

use serde::Serialize;

/// Events that can change an item's availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemEvent {
    /// Lend the item out
    CheckOut,
    /// Bring the item back
    CheckIn,
}

impl fmt::Display for ItemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckOut => write!(f, "checkout"),
            Self::CheckIn => write!(f, "checkin"),
        }
    }
}
