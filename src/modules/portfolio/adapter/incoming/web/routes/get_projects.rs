// src/modules/portfolio/adapter/incoming/web/routes/get_projects.rs
use actix_web::{get, web, HttpResponse};

use crate::shared::api::ApiError;
use crate::AppState;

/// Listing cap; newest projects first.
const PROJECT_LIST_LIMIT: i64 = 100;

#[get("/api/portfolio/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let projects = data
        .portfolio
        .list_projects(PROJECT_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::store("Failed to fetch projects", e))?;

    Ok(HttpResponse::Ok().json(projects))
}
