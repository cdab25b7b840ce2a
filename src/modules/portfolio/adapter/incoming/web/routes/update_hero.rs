// src/modules/portfolio/adapter/incoming/web/routes/update_hero.rs
use actix_web::{put, web, HttpResponse};

use crate::modules::portfolio::application::domain::sections::HeroSection;
use crate::shared::api::ApiError;
use crate::AppState;

/// Full replacement of the hero section, upserted by the id in the body.
/// There is no partial update; callers resend the whole section.
#[put("/api/portfolio/hero")]
pub async fn update_hero_handler(
    req: web::Json<HeroSection>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let section = req.into_inner();

    data.portfolio
        .upsert_hero(&section)
        .await
        .map_err(|e| ApiError::store("Failed to update hero section", e))?;

    Ok(HttpResponse::Ok().json(section))
}
