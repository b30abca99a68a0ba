use std::fmt;

use serde::Serialize;

use crate::{
    availability::{Availability, Transition},
    events::ItemEvent,
    item::{Item, Lendable},
};

/// An item tagged with the department that holds it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogedItem {
    /// The underlying item
    #[serde(flatten)]
    item: Item,
    /// Organizational department, freely reassignable
    pub department: String,
}

impl CatalogedItem {
    /// Create an available item held by `department`
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self { item: Item::new(title, author), department: department.into() }
    }

    /// Borrow the underlying item
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }
}

impl Lendable for CatalogedItem {
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
        self.item.apply(event)
    }
}

impl fmt::Display for CatalogedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Department: {}", self.item, self.department)
    }
}
