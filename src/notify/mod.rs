//! Chat notifications for completed lookups.
//!
//! Notification is best effort: callers log a [`NotificationError`] and carry on.

pub mod card;
pub mod webex;

pub use card::{AdaptiveCard, build_card};
pub use webex::WebexNotifier;

use crate::error::NotificationError;
use crate::models::CreatureRecord;

pub trait Notifier {
    /// One-time provisioning of the destination room. Call once at startup.
    fn initialize(&mut self) -> Result<(), NotificationError>;

    /// Post a card describing `record` to the room
    fn announce(&self, record: &CreatureRecord) -> Result<(), NotificationError>;
}
