//! Places, autocomplete and geocoding access for the restaurant finder.
//!
//! [`PlacesProvider`] is the interface the session logic consumes;
//! [`GooglePlacesClient`] implements it over the Google Places Web Service.

pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod provider;
pub mod types;

mod retry;

pub use client::GooglePlacesClient;
pub use error::PlacesError;
pub use pagination::{NearbyPage, MAX_PAGES};
pub use provider::PlacesProvider;
