use std::{collections::VecDeque, fmt};

use serde::Serialize;

use crate::{
    availability::{Availability, Transition},
    events::ItemEvent,
    item::Lendable,
    observers::StateObserver,
    timestamp::TimeStamp,
};

/// Default number of history entries kept by a tracker
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// One recorded event applied to a tracked item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    /// The state before the event
    pub from: Availability,
    /// The state after the event
    pub to: Availability,
    /// The event that was applied
    pub event: ItemEvent,
    /// Whether the event was accepted
    pub accepted: bool,
    /// When the event was applied
    pub at: TimeStamp,
}

impl From<Transition> for TransitionRecord {
    fn from(transition: Transition) -> Self {
        Self {
            from: transition.from,
            to: transition.to,
            event: transition.event,
            accepted: transition.accepted,
            at: TimeStamp::now(),
        }
    }
}

/// Wraps a lendable item with bounded history and observers
pub struct LendingTracker<T> {
    /// The tracked item
    item: T,
    /// Oldest entries first
    history: VecDeque<TransitionRecord>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Registered observers
    observers: Vec<Box<dyn StateObserver + Send>>,
}

impl<T: fmt::Debug> fmt::Debug for LendingTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingTracker")
            .field("item", &self.item)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl<T: Lendable> LendingTracker<T> {
    /// Start tracking an item with the default history size
    #[must_use]
    pub fn new(item: T) -> Self {
        Self::with_history_size(item, DEFAULT_HISTORY_SIZE)
    }

    /// Start tracking an item, keeping at most `max_history_size` entries
    #[must_use]
    pub fn with_history_size(item: T, max_history_size: usize) -> Self {
        Self {
            item,
            history: VecDeque::with_capacity(max_history_size.min(DEFAULT_HISTORY_SIZE)),
            max_history_size,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of every event
    pub fn register_observer(&mut self, observer: Box<dyn StateObserver + Send>) {
        self.observers.push(observer);
    }

    /// Apply an event, record it, and notify observers.
    ///
    /// Returns whether the event was accepted.
    pub fn process_event(&mut self, event: ItemEvent) -> bool {
        self.apply(event).accepted
    }

    /// Borrow the tracked item
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Stop tracking and hand back the item
    #[must_use]
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Recorded events, oldest first
    #[must_use]
    pub fn get_history(&self) -> Vec<TransitionRecord> {
        self.history.iter().cloned().collect()
    }

    /// Print the history to stdout
    #[allow(clippy::arithmetic_side_effects)]
    pub fn print_history(&self) {
        println!("History for \"{}\":", self.item.title());
        for (i, record) in self.history.iter().enumerate() {
            let outcome = if record.accepted { "ok" } else { "refused" };
            println!("{}. {} --({})--> {} [{outcome}]", i + 1, record.from, record.event, record.to);
        }
    }

    /// Append to the history, dropping the oldest entries past the cap
    fn record(&mut self, transition: Transition) {
        if self.max_history_size == 0 {
            return;
        }
        while self.history.len() >= self.max_history_size {
            self.history.pop_front();
        }
        self.history.push_back(transition.into());
    }
}

impl<T: Lendable> Lendable for LendingTracker<T> {
    fn title(&self) -> &str {
        self.item.title()
    }

    fn author(&self) -> &str {
        self.item.author()
    }

    fn availability(&self) -> Availability {
        self.item.availability()
    }

    fn apply(&mut self, event: ItemEvent) -> Transition {
        let transition = self.item.apply(event);
        self.record(transition);
        for observer in &self.observers {
            observer.on_transition(self.item.title(), &transition);
        }
        transition
    }
}

impl<T: Lendable> fmt::Display for LendingTracker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item.availability().get_description())
    }
}
