// src/modules/portfolio/adapter/incoming/web/routes/create_project.rs
use actix_web::{post, web, HttpResponse};

use crate::modules::portfolio::application::domain::entries::{Project, ProjectCreate};
use crate::shared::api::ApiError;
use crate::AppState;

#[post("/api/portfolio/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let project = Project::new(req.into_inner());

    data.portfolio
        .insert_project(&project)
        .await
        .map_err(|e| ApiError::store("Failed to create project", e))?;

    Ok(HttpResponse::Ok().json(project))
}
