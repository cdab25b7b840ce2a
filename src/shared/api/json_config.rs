// src/shared/api/json_config.rs
use actix_web::web::JsonConfig;
use actix_web::HttpResponse;
use serde_json::json;

/// Body-deserialization failures (missing field, wrong type, invalid JSON)
/// surface as 422 with the same `{"detail": ...}` shape as every other
/// validation failure.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": message })),
        )
        .into()
    })
}
