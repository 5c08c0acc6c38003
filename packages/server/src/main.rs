#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the noise complaint chart.
//!
//! Serves the computed chart geometry as JSON for the frontend renderer,
//! plus the static frontend files themselves.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use noise_chart_chart::config::ChartConfig;
use noise_chart_source::ComplaintSource;
use noise_chart_source::socrata::SocrataSource;

/// Shared application state.
pub struct AppState {
    /// Chart configuration (dataset, whitelist, layout, legend).
    pub config: ChartConfig,
    /// Complaint data source.
    pub source: Arc<dyn ComplaintSource>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ChartConfig::embedded().expect("Failed to parse embedded chart config");
    let source =
        SocrataSource::new(config.dataset.clone()).expect("Failed to build Socrata client");

    let state = web::Data::new(AppState {
        config,
        source: Arc::new(source),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/chart", web::get().to(handlers::chart)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
