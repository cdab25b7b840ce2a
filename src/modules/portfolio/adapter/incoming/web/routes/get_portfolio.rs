// src/modules/portfolio/adapter/incoming/web/routes/get_portfolio.rs
use actix_web::{get, web, HttpResponse};

use crate::modules::portfolio::application::aggregate::assemble_portfolio;
use crate::shared::api::ApiError;
use crate::AppState;

/// The one endpoint the public page renders from. Absent singleton sections
/// are substituted with placeholders so this never 404s on an empty store.
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let portfolio = assemble_portfolio(data.portfolio.as_ref())
        .await
        .map_err(|e| ApiError::store("Failed to fetch portfolio data", e))?;

    Ok(HttpResponse::Ok().json(portfolio))
}
