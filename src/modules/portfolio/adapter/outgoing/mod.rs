pub mod portfolio_store_mongo;

pub use portfolio_store_mongo::MongoPortfolioStore;
