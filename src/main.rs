use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use vanlav_order::config::Config;
use vanlav_order::forecast::ForecastEngine;
use vanlav_order::server::{router, AppState};
use vanlav_order::weather::{InMemoryWeatherCache, OpenWeatherClient, WeatherLookup};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    if cfg.location(&cfg.default_location).is_none() {
        anyhow::bail!("DEFAULT_LOCATION '{}' is not a supported location", cfg.default_location);
    }
    if cfg.weather_api_key.is_empty() {
        info!("OPENWEATHER_API_KEY is not set, weather will use fallback values");
    }

    let provider = OpenWeatherClient::new(&cfg).context("Failed to build weather client")?;
    let weather = WeatherLookup::new(
        Arc::new(provider),
        Arc::new(InMemoryWeatherCache::new()),
        cfg.locations.clone(),
        &cfg.default_location,
    );
    let state = AppState::new(ForecastEngine::default(), weather);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;

    info!("{}", "=".repeat(60));
    info!("VanLavOrder listening on http://{}", cfg.bind_addr);
    info!("Weather location: {}", cfg.default_location);
    info!("{}", "=".repeat(60));

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
