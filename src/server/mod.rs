pub mod error;
pub mod handlers;
pub mod page;

pub use error::ApiError;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::forecast::ForecastEngine;
use crate::weather::WeatherLookup;

/// Both uploads together.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ForecastEngine>,
    pub weather: Arc<WeatherLookup>,
    /// Location whose weather accompanies every forecast.
    pub location: String,
}

impl AppState {
    pub fn new(engine: ForecastEngine, weather: WeatherLookup) -> Self {
        let location = weather.default_location().to_string();
        Self {
            engine: Arc::new(engine),
            weather: Arc::new(weather),
            location,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/api/forecast",
            post(handlers::create_forecast).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
