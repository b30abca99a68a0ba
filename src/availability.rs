use std::fmt;

use serde::Serialize;

use crate::events::ItemEvent;

/// Whether an item can currently be lent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Availability {
    /// Item is on the shelf and can be checked out
    #[default]
    Available,
    /// Item is lent out
    CheckedOut,
}

/// Outcome of applying an event to an availability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// The state before the event
    pub from: Availability,
    /// The state after the event
    pub to: Availability,
    /// The event that was applied
    pub event: ItemEvent,
    /// False only for a checkout attempted on an item that is already lent
    pub accepted: bool,
}

impl Transition {
    /// True when the event changed the state
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        self.from != self.to
    }
}

impl Availability {
    /// Apply an event and return the resulting transition.
    ///
    /// Every state handles every event; rejected checkouts and repeated
    /// check-ins are self-loops.
    #[must_use]
    pub fn apply(self, event: ItemEvent) -> Transition {
        let (to, accepted) = match (self, event) {
            (Self::Available, ItemEvent::CheckOut) => (Self::CheckedOut, true),
            (Self::CheckedOut, ItemEvent::CheckOut) => (Self::CheckedOut, false),
            (_, ItemEvent::CheckIn) => (Self::Available, true),
        };
        Transition { from: self, to, event, accepted }
    }

    /// Get a human-readable description of the current state
    #[must_use]
    pub fn get_description(self) -> &'static str {
        match self {
            Self::Available => "Item is available for checkout",
            Self::CheckedOut => "Item is currently lent out",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::CheckedOut => write!(f, "CheckedOut"),
        }
    }
}
