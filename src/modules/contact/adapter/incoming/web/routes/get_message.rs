// src/modules/contact/adapter/incoming/web/routes/get_message.rs
use actix_web::{get, web, HttpResponse};

use crate::shared::api::ApiError;
use crate::AppState;

#[get("/api/contact/messages/{message_id}")]
pub async fn get_message_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let message_id = path.into_inner();

    let message = data
        .messages
        .find_by_id(&message_id)
        .await
        .map_err(|e| ApiError::store("Failed to fetch contact message", e))?
        .ok_or_else(|| ApiError::not_found("Message"))?;

    Ok(HttpResponse::Ok().json(message))
}
