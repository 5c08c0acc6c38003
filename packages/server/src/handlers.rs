//! HTTP handler functions for the noise chart API.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use noise_chart_chart::pipeline::run_pipeline;
use noise_chart_server_models::{ApiChart, ApiHealth};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/chart`
///
/// Runs the full pipeline — fetch, filter, aggregate, stack, scale,
/// legend — for the year ending today and returns the render tuple.
pub async fn chart(state: web::Data<AppState>) -> HttpResponse {
    match run_pipeline(Utc::now(), state.source.as_ref(), &state.config).await {
        Ok(chart) => HttpResponse::Ok().json(ApiChart::from(chart)),
        Err(e) => {
            log::error!("Failed to build chart: {e}");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "error": "Failed to fetch complaint data"
            }))
        }
    }
}
