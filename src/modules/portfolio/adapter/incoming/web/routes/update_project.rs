// src/modules/portfolio/adapter/incoming/web/routes/update_project.rs
use actix_web::{put, web, HttpResponse};

use crate::modules::portfolio::application::domain::entries::{Project, ProjectCreate};
use crate::shared::api::ApiError;
use crate::AppState;

/// Full replace of an existing project. The id comes from the path; a 404 is
/// decided by a pre-read, then the replacement is written as one document.
#[put("/api/portfolio/projects/{project_id}")]
pub async fn update_project_handler(
    path: web::Path<String>,
    req: web::Json<ProjectCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let existing = data
        .portfolio
        .find_project(&project_id)
        .await
        .map_err(|e| ApiError::store("Failed to update project", e))?;

    if existing.is_none() {
        return Err(ApiError::not_found("Project"));
    }

    let updated = Project::with_id(project_id, req.into_inner());

    data.portfolio
        .replace_project(&updated)
        .await
        .map_err(|e| ApiError::store("Failed to update project", e))?;

    Ok(HttpResponse::Ok().json(updated))
}
