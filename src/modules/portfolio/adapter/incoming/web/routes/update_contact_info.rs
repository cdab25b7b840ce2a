// src/modules/portfolio/adapter/incoming/web/routes/update_contact_info.rs
use actix_web::{put, web, HttpResponse};

use crate::modules::portfolio::application::domain::sections::ContactInfo;
use crate::shared::api::ApiError;
use crate::AppState;

#[put("/api/portfolio/contact")]
pub async fn update_contact_info_handler(
    req: web::Json<ContactInfo>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let section = req.into_inner();

    data.portfolio
        .upsert_contact_info(&section)
        .await
        .map_err(|e| ApiError::store("Failed to update contact information", e))?;

    Ok(HttpResponse::Ok().json(section))
}
