// src/modules/contact/adapter/outgoing/message_store_mongo.rs
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::modules::contact::application::ports::outgoing::MessageStore;
use crate::shared::storage::StoreError;

const COLLECTION: &str = "contact_messages";

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct MongoMessageStore {
    db: Database,
}

impl MongoMessageStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ContactMessage> {
        self.db.collection::<ContactMessage>(COLLECTION)
    }
}

#[async_trait]
impl MessageStore for MongoMessageStore {
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError> {
        self.collection().insert_one(message).await?;
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ContactMessage>, StoreError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ContactMessage>, StoreError> {
        Ok(self.collection().find_one(doc! { "id": id }).await?)
    }

    async fn set_status(&self, id: &str, status: MessageStatus) -> Result<u64, StoreError> {
        let result = self
            .collection()
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = self.collection().delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn count(&self, status: Option<MessageStatus>) -> Result<u64, StoreError> {
        let filter = match status {
            Some(status) => doc! { "status": status.as_str() },
            None => doc! {},
        };

        Ok(self.collection().count_documents(filter).await?)
    }
}
