// src/modules/portfolio/adapter/incoming/web/routes/experience.rs
use actix_web::{get, post, web, HttpResponse};

use crate::modules::portfolio::application::domain::entries::{Experience, ExperienceCreate};
use crate::shared::api::ApiError;
use crate::AppState;

const EXPERIENCE_LIST_LIMIT: i64 = 100;

#[post("/api/portfolio/experience")]
pub async fn create_experience_handler(
    req: web::Json<ExperienceCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entry = Experience::new(req.into_inner());

    data.portfolio
        .insert_experience(&entry)
        .await
        .map_err(|e| ApiError::store("Failed to create experience entry", e))?;

    Ok(HttpResponse::Ok().json(entry))
}

#[get("/api/portfolio/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let entries = data
        .portfolio
        .list_experience(EXPERIENCE_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::store("Failed to fetch experience", e))?;

    Ok(HttpResponse::Ok().json(entries))
}
