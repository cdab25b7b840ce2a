// src/modules/portfolio/adapter/incoming/web/routes/education.rs
//
// Education entries are append-only through this surface: create and list,
// no update or delete routes.

use actix_web::{get, post, web, HttpResponse};

use crate::modules::portfolio::application::domain::entries::{Education, EducationCreate};
use crate::shared::api::ApiError;
use crate::AppState;

const EDUCATION_LIST_LIMIT: i64 = 100;

#[post("/api/portfolio/education")]
pub async fn create_education_handler(
    req: web::Json<EducationCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entry = Education::new(req.into_inner());

    data.portfolio
        .insert_education(&entry)
        .await
        .map_err(|e| ApiError::store("Failed to create education entry", e))?;

    Ok(HttpResponse::Ok().json(entry))
}

#[get("/api/portfolio/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let entries = data
        .portfolio
        .list_education(EDUCATION_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::store("Failed to fetch education", e))?;

    Ok(HttpResponse::Ok().json(entries))
}
