// src/modules/portfolio/adapter/incoming/web/routes/delete_project.rs
use actix_web::{delete, web, HttpResponse};

use crate::shared::api::{AckResponse, ApiError};
use crate::AppState;

#[delete("/api/portfolio/projects/{project_id}")]
pub async fn delete_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let project_id = path.into_inner();

    let deleted = data
        .portfolio
        .delete_project(&project_id)
        .await
        .map_err(|e| ApiError::store("Failed to delete project", e))?;

    if deleted == 0 {
        return Err(ApiError::not_found("Project"));
    }

    Ok(HttpResponse::Ok().json(AckResponse::new("Project deleted successfully")))
}
