// src/modules/contact/adapter/incoming/web/routes/message_stats.rs
use actix_web::{get, web, HttpResponse};

use crate::modules::contact::application::domain::entities::{ContactStats, MessageStatus};
use crate::shared::api::ApiError;
use crate::AppState;

/// Four separate count queries, matching the store's single-operation
/// contract. No aggregation pipeline.
#[get("/api/contact/stats")]
pub async fn message_stats_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let fail = |e| ApiError::store("Failed to fetch contact statistics", e);

    let total_messages = data.messages.count(None).await.map_err(fail)?;
    let new_messages = data
        .messages
        .count(Some(MessageStatus::New))
        .await
        .map_err(fail)?;
    let read_messages = data
        .messages
        .count(Some(MessageStatus::Read))
        .await
        .map_err(fail)?;
    let replied_messages = data
        .messages
        .count(Some(MessageStatus::Replied))
        .await
        .map_err(fail)?;

    Ok(HttpResponse::Ok().json(ContactStats {
        total_messages,
        new_messages,
        read_messages,
        replied_messages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::contact::application::ports::outgoing::message_store::MockMessageStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_stats_total_equals_sum_of_statuses() {
        let mut store = MockMessageStore::new();
        store.expect_count().times(4).returning(|status| {
            Ok(match status {
                None => 6,
                Some(MessageStatus::New) => 3,
                Some(MessageStatus::Read) => 2,
                Some(MessageStatus::Replied) => 1,
            })
        });

        let state = TestAppStateBuilder::default()
            .with_message_store(store)
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(message_stats_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["total_messages"], 6);
        assert_eq!(
            body["total_messages"].as_u64().unwrap(),
            body["new_messages"].as_u64().unwrap()
                + body["read_messages"].as_u64().unwrap()
                + body["replied_messages"].as_u64().unwrap()
        );
    }

    #[actix_web::test]
    async fn test_stats_store_failure_is_500() {
        let mut store = MockMessageStore::new();
        store
            .expect_count()
            .returning(|_| Err(crate::shared::storage::StoreError::Unacknowledged));

        let state = TestAppStateBuilder::default()
            .with_message_store(store)
            .build();

        let app = test::init_service(
            App::new().app_data(state).service(message_stats_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
