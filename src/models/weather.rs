use serde::{Deserialize, Serialize};

pub const FALLBACK_TEMPERATURE: i32 = 20;
pub const FALLBACK_DESCRIPTION: &str = "clear";
pub const FALLBACK_HUMIDITY: u8 = 60;
pub const FALLBACK_WIND_SPEED: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, name: &str) -> Self {
        Self {
            latitude,
            longitude,
            name: name.to_string(),
        }
    }
}

/// Next-day weather summary attached to every forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: i32,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    #[serde(rename = "city")]
    pub location: String,
}

impl WeatherSnapshot {
    pub fn fallback(location: &str) -> Self {
        Self {
            temperature: FALLBACK_TEMPERATURE,
            description: FALLBACK_DESCRIPTION.to_string(),
            humidity: FALLBACK_HUMIDITY,
            wind_speed: FALLBACK_WIND_SPEED,
            location: location.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.temperature == FALLBACK_TEMPERATURE
            && self.description == FALLBACK_DESCRIPTION
            && self.humidity == FALLBACK_HUMIDITY
            && self.wind_speed == FALLBACK_WIND_SPEED
    }
}

/// One 3-hour slot of the provider's multi-day forecast.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}
