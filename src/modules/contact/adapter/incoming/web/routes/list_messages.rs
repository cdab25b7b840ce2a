// src/modules/contact/adapter/incoming/web/routes/list_messages.rs
use actix_web::{get, web, HttpResponse};

use crate::shared::api::ApiError;
use crate::AppState;

/// Admin listing cap; newest messages first.
const MESSAGE_LIST_LIMIT: i64 = 100;

#[get("/api/contact/messages")]
pub async fn list_messages_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let messages = data
        .messages
        .list_recent(MESSAGE_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::store("Failed to fetch contact messages", e))?;

    Ok(HttpResponse::Ok().json(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mockall::predicate::eq;
    use serde_json::Value;

    use crate::modules::contact::application::domain::entities::{
        ContactMessage, ContactMessageCreate,
    };
    use crate::modules::contact::application::ports::outgoing::message_store::MockMessageStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    fn message(subject: &str) -> ContactMessage {
        ContactMessage::new(ContactMessageCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: subject.to_string(),
            message: "hi".to_string(),
        })
    }

    #[actix_web::test]
    async fn test_list_messages_uses_documented_cap() {
        let mut store = MockMessageStore::new();
        store
            .expect_list_recent()
            .with(eq(MESSAGE_LIST_LIMIT))
            .times(1)
            .returning(|_| Ok(vec![message("second"), message("first")]));

        let state = TestAppStateBuilder::default()
            .with_message_store(store)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/contact/messages")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["subject"], "second");
    }

    #[actix_web::test]
    async fn test_list_messages_store_failure_is_500() {
        let mut store = MockMessageStore::new();
        store
            .expect_list_recent()
            .returning(|_| Err(crate::shared::storage::StoreError::Unacknowledged));

        let state = TestAppStateBuilder::default()
            .with_message_store(store)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/contact/messages")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
