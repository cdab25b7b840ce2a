// src/shared/storage/mod.rs
//
// Mongo bootstrap shared by every outgoing adapter. One database handle
// is created at startup and cloned into the per-module stores; the driver
// multiplexes requests over its own connection pool.

use mongodb::bson::doc;
use mongodb::{Client, Database, IndexModel};
use uuid::Uuid;

/// Storage-level failure, mapped to `ApiError::Store` at the handler seam.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("write was not acknowledged")]
    Unacknowledged,
}

/// Document ids are opaque strings, assigned once at insertion time.
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

pub async fn connect(mongo_url: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_url).await?;
    Ok(client.database(db_name))
}

async fn index_on(
    db: &Database,
    collection: &str,
    keys: mongodb::bson::Document,
) -> Result<(), mongodb::error::Error> {
    db.collection::<mongodb::bson::Document>(collection)
        .create_index(IndexModel::builder().keys(keys).build())
        .await?;

    Ok(())
}

/// Secondary indexes for the hot query paths. Best effort: the caller logs
/// a warning on failure and keeps serving.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    index_on(db, "contact_messages", doc! { "created_at": 1 }).await?;
    index_on(db, "contact_messages", doc! { "status": 1 }).await?;
    index_on(db, "contact_messages", doc! { "email": 1 }).await?;

    index_on(db, "projects", doc! { "created_at": 1 }).await?;
    index_on(db, "projects", doc! { "featured": 1 }).await?;

    index_on(db, "education", doc! { "created_at": 1 }).await?;
    index_on(db, "experience", doc! { "created_at": 1 }).await?;
    index_on(db, "achievements", doc! { "created_at": 1 }).await?;

    Ok(())
}
