pub mod cache;
pub mod error;
pub mod lookup;
pub mod openweather;

pub use cache::{InMemoryWeatherCache, WeatherCache};
pub use error::WeatherError;
pub use lookup::WeatherLookup;
pub use openweather::OpenWeatherClient;

use async_trait::async_trait;

use crate::models::{ForecastEntry, Location};

/// Source of multi-day, 3-hour-interval forecasts.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_forecast(&self, location: &Location) -> Result<Vec<ForecastEntry>, WeatherError>;
}
