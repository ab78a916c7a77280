//! Shared domain types and configuration for the eatnear workspace.

pub mod app_config;
pub mod config;
pub mod error;
pub mod places;

pub use app_config::{AppConfig, DetailPolicy, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use places::{
    AutocompleteOptions, Coordinate, GeocodeResult, NearbyRequest, OpeningHours, PlaceDetail,
    PlacePhoto, PlaceReview, SearchResult, Suggestion,
};
