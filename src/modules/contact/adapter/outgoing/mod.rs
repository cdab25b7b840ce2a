pub mod message_store_mongo;

pub use message_store_mongo::MongoMessageStore;
