use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ForecastEntry, Location};
use crate::weather::{WeatherError, WeatherProvider};

const FORECAST_PATH: &str = "/data/2.5/forecast";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

/// OpenWeatherMap 5-day / 3-hour forecast client.
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    lang: String,
}

impl OpenWeatherClient {
    pub fn new(cfg: &Config) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: cfg.weather_base_url.trim_end_matches('/').to_string(),
            api_key: cfg.weather_api_key.clone(),
            lang: cfg.weather_lang.clone(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_forecast(&self, location: &Location) -> Result<Vec<ForecastEntry>, WeatherError> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, FORECAST_PATH))
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: ForecastResponse = resp.json().await?;
        Ok(data.list)
    }
}
