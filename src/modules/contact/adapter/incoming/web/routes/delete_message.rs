// src/modules/contact/adapter/incoming/web/routes/delete_message.rs
use actix_web::{delete, web, HttpResponse};

use crate::shared::api::{AckResponse, ApiError};
use crate::AppState;

#[delete("/api/contact/messages/{message_id}")]
pub async fn delete_message_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let message_id = path.into_inner();

    let deleted = data
        .messages
        .delete(&message_id)
        .await
        .map_err(|e| ApiError::store("Failed to delete contact message", e))?;

    if deleted == 0 {
        return Err(ApiError::not_found("Message"));
    }

    Ok(HttpResponse::Ok().json(AckResponse::new("Contact message deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::contact::application::ports::outgoing::message_store::MockMessageStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn call(store: MockMessageStore, uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_message_store(store)
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(delete_message_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri(uri).to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_delete_message_acks() {
        let mut store = MockMessageStore::new();
        store
            .expect_delete()
            .withf(|id| id == "msg-1")
            .times(1)
            .returning(|_| Ok(1));

        let resp = call(store, "/api/contact/messages/msg-1").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Contact message deleted successfully");
    }

    #[actix_web::test]
    async fn test_delete_message_missing_is_404() {
        let mut store = MockMessageStore::new();
        store.expect_delete().times(1).returning(|_| Ok(0));

        let resp = call(store, "/api/contact/messages/ghost").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Message not found");
    }
}
