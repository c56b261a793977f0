use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::models::{ForecastEntry, Location, WeatherSnapshot};
use crate::weather::{WeatherCache, WeatherError, WeatherProvider};

/// Best-effort next-day weather for a configured location.
///
/// Never fails: provider errors and missing data degrade to
/// [`WeatherSnapshot::fallback`]. Only real provider data is cached.
pub struct WeatherLookup {
    provider: Arc<dyn WeatherProvider>,
    cache: Arc<dyn WeatherCache>,
    locations: HashMap<String, Location>,
    default_location: String,
}

impl WeatherLookup {
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        cache: Arc<dyn WeatherCache>,
        locations: HashMap<String, Location>,
        default_location: &str,
    ) -> Self {
        Self {
            provider,
            cache,
            locations,
            default_location: default_location.to_string(),
        }
    }

    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    pub async fn get_forecast(&self, location_id: &str, now: NaiveDateTime) -> WeatherSnapshot {
        if let Some(snapshot) = self.cache.get(location_id) {
            debug!("Weather cache hit for {}", location_id);
            return snapshot;
        }

        match self.fetch_tomorrow(location_id, now).await {
            Ok(Some(snapshot)) => {
                info!(
                    "Weather for {}: {}°C, {}",
                    snapshot.location, snapshot.temperature, snapshot.description
                );
                self.cache.insert(location_id, snapshot.clone());
                snapshot
            }
            Ok(None) => {
                warn!("No forecast entry for tomorrow at {}, using fallback", location_id);
                WeatherSnapshot::fallback(&self.display_name(location_id))
            }
            Err(e) => {
                warn!("Weather lookup failed for {}: {}", location_id, e);
                WeatherSnapshot::fallback(&self.display_name(location_id))
            }
        }
    }

    async fn fetch_tomorrow(
        &self,
        location_id: &str,
        now: NaiveDateTime,
    ) -> Result<Option<WeatherSnapshot>, WeatherError> {
        let location = self
            .locations
            .get(location_id)
            .ok_or_else(|| WeatherError::UnknownLocation(location_id.to_string()))?;

        let entries = self.provider.fetch_forecast(location).await?;
        match select_tomorrow(&entries, now) {
            Some(entry) => snapshot_from_entry(entry, &location.name).map(Some),
            None => Ok(None),
        }
    }

    fn display_name(&self, location_id: &str) -> String {
        self.locations
            .get(location_id)
            .or_else(|| self.locations.get(&self.default_location))
            .map(|l| l.name.clone())
            .unwrap_or_else(|| location_id.to_string())
    }
}

/// First entry whose timestamp falls on the calendar day after `now`.
pub fn select_tomorrow(entries: &[ForecastEntry], now: NaiveDateTime) -> Option<&ForecastEntry> {
    let tomorrow = (now + Duration::days(1)).format("%Y-%m-%d").to_string();
    entries.iter().find(|e| e.dt_txt.starts_with(&tomorrow))
}

fn snapshot_from_entry(entry: &ForecastEntry, location: &str) -> Result<WeatherSnapshot, WeatherError> {
    let description = entry
        .weather
        .first()
        .map(|c| c.description.clone())
        .ok_or_else(|| WeatherError::Malformed(format!("{} has no conditions", entry.dt_txt)))?;

    Ok(WeatherSnapshot {
        temperature: entry.main.temp.round() as i32,
        description,
        humidity: entry.main.humidity,
        wind_speed: entry.wind.speed,
        location: location.to_string(),
    })
}
