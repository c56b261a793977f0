use std::collections::HashMap;

use crate::models::Location;

#[derive(Debug, Clone)]
pub struct Config {
    // Weather provider
    pub weather_api_key: String,
    pub weather_base_url: String,
    pub weather_lang: String,

    // Locations
    pub locations: HashMap<String, Location>,
    pub default_location: String,

    // Server
    pub bind_addr: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let mut locations = HashMap::new();
        locations.insert(
            "pyatigorsk".to_string(),
            Location::new(44.0486, 43.0594, "Пятигорск"),
        );
        locations.insert(
            "kislovodsk".to_string(),
            Location::new(43.9053, 43.1900, "Кисловодск"),
        );

        Config {
            weather_api_key: env("OPENWEATHER_API_KEY", ""),
            weather_base_url: env("WEATHER_BASE_URL", "http://api.openweathermap.org"),
            weather_lang: env("WEATHER_LANG", "ru"),
            locations,
            default_location: env("DEFAULT_LOCATION", "pyatigorsk").to_lowercase(),
            bind_addr: env("BIND_ADDR", "0.0.0.0:8000"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }
}
