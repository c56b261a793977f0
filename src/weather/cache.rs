use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::WeatherSnapshot;

/// Per-location snapshot store. Entries live until the process exits.
pub trait WeatherCache: Send + Sync {
    fn get(&self, location_id: &str) -> Option<WeatherSnapshot>;
    fn insert(&self, location_id: &str, snapshot: WeatherSnapshot);
}

#[derive(Debug, Default)]
pub struct InMemoryWeatherCache {
    entries: RwLock<HashMap<String, WeatherSnapshot>>,
}

impl InMemoryWeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WeatherCache for InMemoryWeatherCache {
    fn get(&self, location_id: &str) -> Option<WeatherSnapshot> {
        self.entries.read().ok()?.get(location_id).cloned()
    }

    fn insert(&self, location_id: &str, snapshot: WeatherSnapshot) {
        // Poisoning leaves the map intact.
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(location_id.to_string(), snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_snapshots() {
        let cache = InMemoryWeatherCache::new();
        assert!(cache.is_empty());
        assert!(cache.get("pyatigorsk").is_none());

        cache.insert("pyatigorsk", WeatherSnapshot::fallback("Pyatigorsk"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("pyatigorsk").unwrap().location, "Pyatigorsk");
    }

    #[test]
    fn later_insert_overwrites() {
        let cache = InMemoryWeatherCache::new();
        cache.insert("kislovodsk", WeatherSnapshot::fallback("A"));
        cache.insert("kislovodsk", WeatherSnapshot::fallback("B"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("kislovodsk").unwrap().location, "B");
    }
}
