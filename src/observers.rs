use tracing::{debug, info};

use crate::{availability::Availability, availability::Transition, events::ItemEvent};

/// Trait for availability change observation
pub trait StateObserver {
    /// Called after every event applied to an item, accepted or not
    fn on_transition(&self, title: &str, transition: &Transition);
}

/// Logs every transition that occurs
#[derive(Debug)]
pub struct TransitionLogger;

impl StateObserver for TransitionLogger {
    fn on_transition(&self, title: &str, transition: &Transition) {
        if transition.accepted {
            debug!(
                title,
                from = %transition.from,
                to = %transition.to,
                event = %transition.event,
                "transition occurred"
            );
        } else {
            info!(title, event = %transition.event, "item is not currently available");
        }
    }
}

/// Announces items going out and coming back
#[derive(Debug)]
pub struct NotificationService;

impl StateObserver for NotificationService {
    fn on_transition(&self, title: &str, transition: &Transition) {
        match (transition.from, transition.to, transition.event) {
            (Availability::Available, Availability::CheckedOut, ItemEvent::CheckOut) => {
                info!(title, "item successfully lent");
            }
            (Availability::CheckedOut, Availability::Available, ItemEvent::CheckIn) => {
                info!(title, "item has been returned");
            }
            _ => {}
        }
    }
}
