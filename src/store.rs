//! Remote collaborators: the list store and the host's service calls.
//!
//! Both are fire-and-await interfaces. Implementations own their transport;
//! the card only sees `Result<_, RemoteError>`.

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{Completion, ListItem};

/// The backing list. Every call names the list entity it acts on.
#[async_trait(?Send)]
pub trait ListStore {
    /// All live items, in store order.
    async fn fetch_all(&self, list: &str) -> Result<Vec<ListItem>, RemoteError>;

    /// Append a new active item.
    async fn add(&self, list: &str, text: &str) -> Result<(), RemoteError>;

    async fn set_completion(
        &self,
        list: &str,
        uid: &str,
        state: Completion,
    ) -> Result<(), RemoteError>;

    /// Remove several items at once.
    async fn remove(&self, list: &str, uids: &[String]) -> Result<(), RemoteError>;

    /// Replace an item's text (used to attach a category tag).
    async fn rename(&self, list: &str, uid: &str, text: &str) -> Result<(), RemoteError>;
}

/// Host-side actions that are not list operations.
#[async_trait(?Send)]
pub trait HostServices {
    /// Press a button entity (starts the host's sort workflow).
    async fn press_button(&self, entity: &str) -> Result<(), RemoteError>;

    /// Flip a boolean entity (the auto-categorize switch).
    async fn toggle_boolean(&self, entity: &str) -> Result<(), RemoteError>;
}
