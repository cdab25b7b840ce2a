// src/modules/portfolio/adapter/incoming/web/routes/update_about.rs
use actix_web::{put, web, HttpResponse};

use crate::modules::portfolio::application::domain::sections::AboutSection;
use crate::shared::api::ApiError;
use crate::AppState;

#[put("/api/portfolio/about")]
pub async fn update_about_handler(
    req: web::Json<AboutSection>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let section = req.into_inner();

    data.portfolio
        .upsert_about(&section)
        .await
        .map_err(|e| ApiError::store("Failed to update about section", e))?;

    Ok(HttpResponse::Ok().json(section))
}
