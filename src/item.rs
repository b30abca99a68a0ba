use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::{
    availability::{Availability, Transition},
    events::ItemEvent,
};

/// Something that can be lent out and brought back
pub trait Lendable {
    /// Title of the underlying item
    fn title(&self) -> &str;

    /// Author of the underlying item
    fn author(&self) -> &str;

    /// Current availability
    fn availability(&self) -> Availability;

    /// Apply an event and report what happened.
    ///
    /// Runs the same transition table as `checkout` and `checkin`, which are
    /// the supported way to change availability; this is the dispatch point
    /// wrappers such as `LendingTracker` hook into.
    #[doc(hidden)]
    fn apply(&mut self, event: ItemEvent) -> Transition;

    /// Mark the item as lent.
    ///
    /// Returns `false` without changing anything if the item is already lent.
    fn checkout(&mut self) -> bool {
        self.apply(ItemEvent::CheckOut).accepted
    }

    /// Mark the item as available again, whatever its current state
    fn checkin(&mut self) {
        self.apply(ItemEvent::CheckIn);
    }

    /// Shorthand for `availability() == Available`
    fn is_available(&self) -> bool {
        self.availability() == Availability::Available
    }
}

/// A catalog entry with a title and an author.
///
/// Availability is private: only [`Lendable::checkout`] and
/// [`Lendable::checkin`] change it. Items serialize for display but cannot
/// be deserialized, so no snapshot can smuggle in a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Title, fixed at creation
    title: String,
    /// Author, fixed at creation
    author: String,
    /// Optional list price in whole currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<u32>,
    /// Whether the item is on the shelf
    availability: Availability,
}

impl Item {
    /// Create a new, available item
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price: None,
            availability: Availability::Available,
        }
    }

    /// Set the price while building
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    /// Set or clear the price
    pub fn set_price(&mut self, price: Option<u32>) {
        self.price = price;
    }

    /// List price, if one was set
    #[must_use]
    pub fn price(&self) -> Option<u32> {
        self.price
    }
}

impl Lendable for Item {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn availability(&self) -> Availability {
        self.availability
    }

    fn apply(&mut self, event: ItemEvent) -> Transition {
        let transition = self.availability.apply(event);
        self.availability = transition.to;
        trace!(title = %self.title, %event, accepted = transition.accepted, "applied event");
        transition
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {} Author: {}", self.title, self.author)?;
        if let Some(price) = self.price {
            write!(f, ". Price: {price}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harry_potter() -> Item {
        Item::new("Harry Potter and the Philosopher's Stone", "J.K. Rowling")
    }

    #[test]
    fn test_fresh_item_checks_out() {
        let mut item = harry_potter();
        assert!(item.is_available());
        assert!(item.checkout());
        assert_eq!(item.availability(), Availability::CheckedOut);
    }

    #[test]
    fn test_second_checkout_is_refused() {
        let mut item = harry_potter();
        assert!(item.checkout());
        assert!(!item.checkout());
        assert!(!item.checkout());
        assert_eq!(item.availability(), Availability::CheckedOut);
    }

    #[test]
    fn test_checkin_restores_availability() {
        let mut item = harry_potter();
        assert!(item.checkout());
        item.checkin();
        assert!(item.is_available());
        assert!(item.checkout());
    }

    #[test]
    fn test_checkin_on_available_item_is_noop() {
        let mut item = harry_potter();
        item.checkin();
        item.checkin();
        assert!(item.is_available());
        assert!(item.checkout());
    }

    #[test]
    fn test_untouched_item_stays_available() {
        let item = Item::new("The Little Prince", "Antoine de Saint-Exupéry");
        assert_eq!(item.title(), "The Little Prince");
        assert_eq!(item.author(), "Antoine de Saint-Exupéry");
        assert_eq!(item.availability(), Availability::Available);
        assert_eq!(item.price(), None);
    }

    #[test]
    fn test_price_is_optional() {
        let mut item = harry_potter().with_price(20);
        assert_eq!(item.price(), Some(20));
        assert_eq!(
            item.to_string(),
            "Title: Harry Potter and the Philosopher's Stone Author: J.K. Rowling. Price: 20"
        );

        item.set_price(None);
        assert_eq!(
            item.to_string(),
            "Title: Harry Potter and the Philosopher's Stone Author: J.K. Rowling"
        );
    }

    #[test]
    fn test_price_does_not_touch_availability() {
        let mut item = harry_potter();
        assert!(item.checkout());
        item.set_price(Some(15));
        assert_eq!(item.availability(), Availability::CheckedOut);
    }

    #[test]
    fn test_apply_follows_checkout_and_checkin() {
        let mut dispatched = harry_potter();
        let mut direct = harry_potter();

        let lend = dispatched.apply(ItemEvent::CheckOut);
        assert_eq!(lend.accepted, direct.checkout());
        let again = dispatched.apply(ItemEvent::CheckOut);
        assert_eq!(again.accepted, direct.checkout());
        assert!(!again.accepted);

        let back = dispatched.apply(ItemEvent::CheckIn);
        direct.checkin();
        assert_eq!(back.from, Availability::CheckedOut);
        assert_eq!(dispatched, direct);
    }
}
