// src/modules/portfolio/adapter/incoming/web/routes/achievements.rs
use actix_web::{get, post, web, HttpResponse};

use crate::modules::portfolio::application::domain::entries::{Achievement, AchievementCreate};
use crate::shared::api::ApiError;
use crate::AppState;

const ACHIEVEMENT_LIST_LIMIT: i64 = 100;

#[post("/api/portfolio/achievements")]
pub async fn create_achievement_handler(
    req: web::Json<AchievementCreate>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entry = Achievement::new(req.into_inner());

    data.portfolio
        .insert_achievement(&entry)
        .await
        .map_err(|e| ApiError::store("Failed to create achievement entry", e))?;

    Ok(HttpResponse::Ok().json(entry))
}

#[get("/api/portfolio/achievements")]
pub async fn get_achievements_handler(
    data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let entries = data
        .portfolio
        .list_achievements(ACHIEVEMENT_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::store("Failed to fetch achievements", e))?;

    Ok(HttpResponse::Ok().json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::portfolio::application::ports::outgoing::portfolio_store::MockPortfolioStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_create_achievement_assigns_id_and_echoes() {
        let mut store = MockPortfolioStore::new();
        store
            .expect_insert_achievement()
            .withf(|a| a.kind == "Competition" && !a.id.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let state = TestAppStateBuilder::default()
            .with_portfolio_store(store)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_achievement_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/portfolio/achievements")
            .set_json(json!({
                "title": "Hackathon Winner",
                "description": "First place.",
                "date": "2024-11",
                "type": "Competition"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Hackathon Winner");
        assert_eq!(body["type"], "Competition");
    }

    #[actix_web::test]
    async fn test_get_achievements_lists() {
        let achievement = Achievement::new(AchievementCreate {
            title: "Cert".to_string(),
            description: "x".to_string(),
            date: "2024".to_string(),
            kind: "Certification".to_string(),
        });

        let mut store = MockPortfolioStore::new();
        store
            .expect_list_achievements()
            .returning(move |_| Ok(vec![achievement.clone()]));

        let state = TestAppStateBuilder::default()
            .with_portfolio_store(store)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_achievements_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio/achievements")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["type"], "Certification");
    }
}
