//! Domain records exchanged between the places provider and the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// One entry from a nearby search, or an address resolved by geocoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Provider-assigned opaque identifier.
    pub place_id: String,
    pub name: String,
    /// `None` when the provider returned no geometry; such entries are never
    /// resolved into details.
    pub location: Option<Coordinate>,
    pub open_now: Option<bool>,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
}

/// Extended information for a selected place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub place_id: String,
    pub name: String,
    pub business_status: Option<String>,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub rating: Option<f64>,
    pub opening_hours: Option<OpeningHours>,
    pub reviews: Vec<PlaceReview>,
    pub photos: Vec<PlacePhoto>,
    pub location: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    /// One human-readable line per weekday, e.g. `"Monday: 11:00 AM – 9:00 PM"`.
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author_name: String,
    pub rating: Option<f64>,
    pub relative_time_description: Option<String>,
    pub text: String,
    /// Seconds since the Unix epoch.
    pub time: Option<i64>,
}

impl PlaceReview {
    #[must_use]
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.time.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    pub width: u32,
    pub height: u32,
}

/// One autocomplete prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub place_id: String,
    pub description: String,
}

/// One coordinate-bearing record from geocoding an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub place_id: String,
    pub formatted_address: String,
    pub location: Coordinate,
}

impl From<GeocodeResult> for SearchResult {
    fn from(g: GeocodeResult) -> Self {
        Self {
            place_id: g.place_id,
            name: g.formatted_address,
            location: Some(g.location),
            open_now: None,
            vicinity: None,
            rating: None,
        }
    }
}

/// Parameters of a nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRequest {
    pub location: Coordinate,
    pub radius_m: u32,
    /// Provider place type filter, e.g. `"restaurant"`.
    pub category: String,
    pub open_now: bool,
}

impl NearbyRequest {
    #[must_use]
    pub fn restaurants_around(location: Coordinate, radius_m: u32, open_now: bool) -> Self {
        Self {
            location,
            radius_m,
            category: "restaurant".to_owned(),
            open_now,
        }
    }
}

/// Scope applied to every autocomplete query.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteOptions {
    /// ISO 3166-1 alpha-2 country restriction.
    pub country: String,
    pub language: String,
    pub location: Coordinate,
    pub radius_m: u32,
    pub types: Vec<String>,
}
