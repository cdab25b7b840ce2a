pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::portfolio;

use crate::contact::adapter::outgoing::MongoMessageStore;
use crate::contact::application::ports::outgoing::MessageStore;
use crate::portfolio::adapter::outgoing::MongoPortfolioStore;
use crate::portfolio::application::ports::outgoing::PortfolioStore;
use crate::shared::api::custom_json_config;
use crate::shared::storage;

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub messages: Arc<dyn MessageStore>,
    pub portfolio: Arc<dyn PortfolioStore>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let mongo_url = env::var("MONGO_URL").expect("MONGO_URL is not set in .env file");
    let db_name = env::var("DB_NAME").unwrap_or_else(|_| "portfolio_db".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let db = storage::connect(&mongo_url, &db_name)
        .await
        .expect("Failed to connect to database");

    if let Err(e) = storage::ensure_indexes(&db).await {
        warn!("Failed to create indexes: {e}");
    }

    let state = AppState {
        messages: Arc::new(MongoMessageStore::new(db.clone())),
        portfolio: Arc::new(MongoPortfolioStore::new(db.clone())),
    };

    // Clone db for the readiness probe
    let db_for_server = db.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(db_for_server.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::create_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_messages_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::update_message_status_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::delete_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::message_stats_handler);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_hero_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_about_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_skills_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_contact_info_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_achievement_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_achievements_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
