// src/modules/portfolio/adapter/incoming/web/routes/update_skills.rs
use actix_web::{put, web, HttpResponse};

use crate::modules::portfolio::application::domain::sections::SkillsSection;
use crate::shared::api::ApiError;
use crate::AppState;

#[put("/api/portfolio/skills")]
pub async fn update_skills_handler(
    req: web::Json<SkillsSection>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let section = req.into_inner();

    data.portfolio
        .upsert_skills(&section)
        .await
        .map_err(|e| ApiError::store("Failed to update skills section", e))?;

    Ok(HttpResponse::Ok().json(section))
}
