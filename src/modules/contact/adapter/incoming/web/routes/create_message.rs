// src/modules/contact/adapter/incoming/web/routes/create_message.rs
use actix_web::{post, web, HttpResponse};
use email_address::EmailAddress;
use tracing::info;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactMessageCreate,
};
use crate::shared::api::ApiError;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/contact/messages")]
pub async fn create_message_handler(
    req: web::Json<ContactMessageCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    if req.email.parse::<EmailAddress>().is_err() {
        return Err(ApiError::Validation(format!(
            "value is not a valid email address: {}",
            req.email
        )));
    }

    let message = ContactMessage::new(req);

    data.messages
        .insert(&message)
        .await
        .map_err(|e| ApiError::store("Failed to submit contact message", e))?;

    info!(
        "New contact message from {}: {}",
        message.email, message.subject
    );

    Ok(HttpResponse::Ok().json(message))
}
