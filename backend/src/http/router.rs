//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{drivers, earnings, landing, live, occupancy};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(
            landing::DATASETS_PATH,
            get(handlers::list_datasets).post(handlers::upload_dataset),
        )
        .route(
            occupancy::DAILY_OCCUPANCY_PATH,
            get(handlers::get_daily_occupancy),
        )
        .route(
            occupancy::ROLLING_OCCUPANCY_PATH,
            get(handlers::get_rolling_occupancy),
        )
        .route(drivers::DRIVERS_PATH, get(handlers::list_drivers))
        .route(drivers::DRIVER_PATH, get(handlers::get_driver))
        .route(earnings::EARNINGS_PATH, get(handlers::get_earnings))
        .route(live::LIVE_PATH, get(handlers::get_live));

    let body_limit = state.config.server.body_limit_bytes();

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
