//! Availability model for lendable catalog items.
//!
//! An [`Item`] starts out available and only changes state through
//! [`Lendable::checkout`] and [`Lendable::checkin`]. [`CatalogedItem`] adds a
//! department, [`LendingTracker`] records history and notifies observers, and
//! [`SharedItem`] makes an item safe to lend from several threads.

pub mod availability;
pub mod cataloged;
pub mod error;
pub mod events;
pub mod item;
pub mod observers;
pub mod shared;
pub mod timestamp;
pub mod tracker;
pub mod visualization;

pub use availability::{Availability, Transition};
pub use cataloged::CatalogedItem;
pub use error::ReportError;
pub use events::ItemEvent;
pub use item::{Item, Lendable};
pub use shared::SharedItem;
pub use tracker::{LendingTracker, TransitionRecord};
pub use visualization::StateVisualization;
