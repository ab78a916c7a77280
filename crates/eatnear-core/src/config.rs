use std::env::VarError;
use std::str::FromStr;

use crate::app_config::{AppConfig, DetailPolicy, Environment};
use crate::places::Coordinate;
use crate::ConfigError;

/// Default origin: the office the finder is centred on.
pub const DEFAULT_ORIGIN: Coordinate = Coordinate::new(35.664_678_2, 139.737_819_8);

/// Largest radius the places provider accepts for a nearby search.
pub const MAX_SEARCH_RADIUS_M: u32 = 50_000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;

    let env = parse_environment(&or_default("EATNEAR_ENV", "development"))?;
    let log_level = or_default("EATNEAR_LOG_LEVEL", "info");

    let lat: f64 = parse_or_default(&lookup, "EATNEAR_ORIGIN_LAT", DEFAULT_ORIGIN.lat)?;
    let lng: f64 = parse_or_default(&lookup, "EATNEAR_ORIGIN_LNG", DEFAULT_ORIGIN.lng)?;
    check_range("EATNEAR_ORIGIN_LAT", lat, -90.0, 90.0)?;
    check_range("EATNEAR_ORIGIN_LNG", lng, -180.0, 180.0)?;

    let search_radius_m: u32 = parse_or_default(&lookup, "EATNEAR_SEARCH_RADIUS_M", 1000)?;
    if search_radius_m == 0 || search_radius_m > MAX_SEARCH_RADIUS_M {
        return Err(ConfigError::InvalidEnvVar {
            var: "EATNEAR_SEARCH_RADIUS_M".to_string(),
            reason: format!("must be between 1 and {MAX_SEARCH_RADIUS_M}, got {search_radius_m}"),
        });
    }

    let open_now = parse_bool("EATNEAR_OPEN_NOW", &or_default("EATNEAR_OPEN_NOW", "true"))?;
    let map_zoom: u8 = parse_or_default(&lookup, "EATNEAR_MAP_ZOOM", 15)?;
    let country = or_default("EATNEAR_COUNTRY", "jp").to_lowercase();
    let language = or_default("EATNEAR_LANGUAGE", "ja");
    let places_base_url = or_default("EATNEAR_PLACES_BASE_URL", "https://maps.googleapis.com");

    let request_timeout_secs: u64 = parse_or_default(&lookup, "EATNEAR_REQUEST_TIMEOUT_SECS", 30)?;
    let user_agent = or_default("EATNEAR_USER_AGENT", "eatnear/0.1 (restaurant-finder)");
    let max_retries: u32 = parse_or_default(&lookup, "EATNEAR_MAX_RETRIES", 3)?;
    let retry_backoff_base_ms: u64 =
        parse_or_default(&lookup, "EATNEAR_RETRY_BACKOFF_BASE_MS", 500)?;
    let page_delay_ms: u64 = parse_or_default(&lookup, "EATNEAR_PAGE_DELAY_MS", 2000)?;
    let detail_policy = parse_detail_policy(&or_default("EATNEAR_DETAIL_POLICY", "latest"))?;

    Ok(AppConfig {
        google_maps_api_key,
        env,
        log_level,
        origin: Coordinate::new(lat, lng),
        search_radius_m,
        open_now,
        map_zoom,
        country,
        language,
        places_base_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        page_delay_ms,
        detail_policy,
    })
}

fn parse_or_default<T, F>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

fn check_range(var: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("must be between {min} and {max}, got {value}"),
        })
    }
}

fn parse_bool(var: &str, s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "EATNEAR_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_detail_policy(s: &str) -> Result<DetailPolicy, ConfigError> {
    match s {
        "latest" => Ok(DetailPolicy::LatestSelectionOnly),
        "last-writer-wins" => Ok(DetailPolicy::LastWriterWins),
        other => Err(ConfigError::InvalidEnvVar {
            var: "EATNEAR_DETAIL_POLICY".to_string(),
            reason: format!("expected \"latest\" or \"last-writer-wins\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
