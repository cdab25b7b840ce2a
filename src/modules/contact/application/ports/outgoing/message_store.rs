// src/modules/contact/application/ports/outgoing/message_store.rs
use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::shared::storage::StoreError;

//
// ──────────────────────────────────────────────────────────
// Port (contact_messages collection)
// ──────────────────────────────────────────────────────────
//

/// Single-document operations only: no transactions, no batching, no
/// retries. An unacknowledged write surfaces as `StoreError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError>;

    /// Most recent first, capped at `limit`.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ContactMessage>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<ContactMessage>, StoreError>;

    /// Returns the matched count; 0 means no such message.
    async fn set_status(&self, id: &str, status: MessageStatus) -> Result<u64, StoreError>;

    /// Returns the deleted count; 0 means no such message.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Count matching messages; `None` counts the whole collection.
    async fn count(&self, status: Option<MessageStatus>) -> Result<u64, StoreError>;
}
