use crate::places::{AutocompleteOptions, Coordinate, NearbyRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How a detail response is treated when the selection changed while the
/// lookup was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPolicy {
    /// Apply a detail response only if it answers the current selection.
    #[default]
    LatestSelectionOnly,
    /// Apply every detail response in completion order, even late ones.
    LastWriterWins,
}

impl std::fmt::Display for DetailPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailPolicy::LatestSelectionOnly => write!(f, "latest"),
            DetailPolicy::LastWriterWins => write!(f, "last-writer-wins"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub env: Environment,
    pub log_level: String,
    pub origin: Coordinate,
    pub search_radius_m: u32,
    pub open_now: bool,
    pub map_zoom: u8,
    pub country: String,
    pub language: String,
    pub places_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub page_delay_ms: u64,
    pub detail_policy: DetailPolicy,
}

impl AppConfig {
    /// The restaurant search around the configured origin.
    #[must_use]
    pub fn nearby_request(&self) -> NearbyRequest {
        NearbyRequest::restaurants_around(self.origin, self.search_radius_m, self.open_now)
    }

    /// Autocomplete scope biased toward the configured origin.
    #[must_use]
    pub fn autocomplete_options(&self) -> AutocompleteOptions {
        AutocompleteOptions {
            country: self.country.clone(),
            language: self.language.clone(),
            location: self.origin,
            radius_m: self.search_radius_m,
            types: vec!["restaurant".to_owned(), "food".to_owned()],
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_maps_api_key", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("origin", &self.origin)
            .field("search_radius_m", &self.search_radius_m)
            .field("open_now", &self.open_now)
            .field("map_zoom", &self.map_zoom)
            .field("country", &self.country)
            .field("language", &self.language)
            .field("places_base_url", &self.places_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("detail_policy", &self.detail_policy)
            .finish()
    }
}
