// src/modules/contact/adapter/incoming/web/routes/update_message_status.rs
use actix_web::{put, web, HttpResponse};
use serde::Deserialize;

use crate::modules::contact::application::domain::entities::MessageStatus;
use crate::shared::api::{AckResponse, ApiError};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/contact/messages/{message_id}/status")]
pub async fn update_message_status_handler(
    path: web::Path<String>,
    query: web::Query<StatusQuery>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let message_id = path.into_inner();

    let status: MessageStatus = query
        .status
        .parse()
        .map_err(|_| ApiError::InvalidArgument("Invalid status".to_string()))?;

    let matched = data
        .messages
        .set_status(&message_id, status)
        .await
        .map_err(|e| ApiError::store("Failed to update message status", e))?;

    if matched == 0 {
        return Err(ApiError::not_found("Message"));
    }

    Ok(HttpResponse::Ok().json(AckResponse::new("Status updated successfully")))
}
