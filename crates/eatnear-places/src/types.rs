//! Google Places Web Service response types.
//!
//! Every endpoint wraps its payload in an envelope carrying a `status`
//! string (`"OK"`, `"ZERO_RESULTS"`, `"OVER_QUERY_LIMIT"`, `"REQUEST_DENIED"`,
//! `"INVALID_REQUEST"`, `"NOT_FOUND"`, `"UNKNOWN_ERROR"`) and an optional
//! `error_message`. The status is checked on the raw JSON before these types
//! are deserialized, so they only model the payload.
//!
//! ### Optional fields
//! The provider omits fields it has no data for rather than sending `null`,
//! and the set of fields varies by place. Everything except the payload
//! arrays is modelled as `Option` with `#[serde(default)]`.
//!
//! ### `next_page_token`
//! Present on nearby-search responses only when another page exists. The
//! token becomes valid a short time after it is issued; requesting it too
//! early yields `INVALID_REQUEST`.
//!
//! ### Review `rating`
//! Integer 1-5 in practice, modelled as `f64` to match place ratings.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<RawPlace>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub result: RawPlace,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<RawGeocodeResult>,
}

/// A place as returned by nearby search and place details. Details fill in
/// the richer fields; nearby search sends a subset.
#[derive(Debug, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub opening_hours: Option<RawOpeningHours>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    pub location: RawLatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawOpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub relative_time_description: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RawPhoto {
    pub photo_reference: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawPrediction {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RawGeocodeResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: RawGeometry,
}
