// src/shared/api/response.rs
use serde::Serialize;

/// Acknowledgement body for deletes and status updates:
/// `{"message": "..."}` and nothing else.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: &'static str,
}

impl AckResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
