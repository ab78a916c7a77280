//! Endpoint calls for `GooglePlacesClient` and its `PlacesProvider` impl.

use eatnear_core::{AutocompleteOptions, GeocodeResult, NearbyRequest, PlaceDetail, Suggestion};
use reqwest::Url;

use crate::error::PlacesError;
use crate::normalize::{
    normalize_detail, normalize_geocode, normalize_prediction, normalize_search_result,
};
use crate::pagination::{next_page_token, NearbyPage};
use crate::provider::PlacesProvider;
use crate::types::{
    AutocompleteResponse, GeocodeResponse, NearbySearchResponse, PlaceDetailsResponse,
};

use super::GooglePlacesClient;

const NEARBY_PATH: &str = "maps/api/place/nearbysearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";
const AUTOCOMPLETE_PATH: &str = "maps/api/place/autocomplete/json";
const GEOCODE_PATH: &str = "maps/api/geocode/json";
const PHOTO_PATH: &str = "maps/api/place/photo";

/// Fields requested from Place Details; limits billing to what the detail
/// panel shows.
pub const DETAIL_FIELDS: &str = "place_id,name,business_status,formatted_address,vicinity,\
formatted_phone_number,rating,opening_hours,reviews,photos,geometry";

fn decode<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    context: &str,
) -> Result<T, PlacesError> {
    serde_json::from_value(value).map_err(|e| PlacesError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

impl GooglePlacesClient {
    /// Builds the nearby-search URL. A follow-up page request carries only
    /// the page token.
    pub(super) fn nearby_url(
        &self,
        request: &NearbyRequest,
        page_token: Option<&str>,
    ) -> Result<Url, PlacesError> {
        if let Some(token) = page_token {
            return self.build_url(NEARBY_PATH, &[("pagetoken", token)]);
        }
        let location = request.location.to_string();
        let radius = request.radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", request.category.as_str()),
        ];
        if request.open_now {
            params.push(("opennow", "true"));
        }
        self.build_url(NEARBY_PATH, &params)
    }

    /// Fetches one page of a nearby search.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] when the envelope status is not `OK`/`ZERO_RESULTS`
    ///   (an early page-token request surfaces as `INVALID_REQUEST`).
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`PlacesError::Http`] on network failure after retries.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn nearby_search_page(
        &self,
        request: &NearbyRequest,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, PlacesError> {
        let url = self.nearby_url(request, page_token)?;
        let context = if page_token.is_some() {
            "nearbysearch follow-up page"
        } else {
            "nearbysearch first page"
        };
        let body = self.request_json(&url, context).await?;
        let parsed: NearbySearchResponse = decode(body, context)?;

        let raw_count = parsed.results.len();
        let results: Vec<_> = parsed
            .results
            .into_iter()
            .filter_map(normalize_search_result)
            .collect();
        if results.len() < raw_count {
            tracing::debug!(
                dropped = raw_count - results.len(),
                "nearby results without place_id dropped"
            );
        }

        Ok(NearbyPage {
            results,
            next_page_token: next_page_token(parsed.next_page_token),
        })
    }

    /// Fetches the detail record for `place_id`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::nearby_search_page`]; an unknown id surfaces
    /// as [`PlacesError::Status`] with `NOT_FOUND` or `INVALID_REQUEST`.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let mut params = vec![("place_id", place_id), ("fields", DETAIL_FIELDS)];
        if let Some(lang) = &self.language {
            params.push(("language", lang.as_str()));
        }
        let url = self.build_url(DETAILS_PATH, &params)?;
        let context = format!("place details for {place_id}");
        let body = self.request_json(&url, &context).await?;
        let parsed: PlaceDetailsResponse = decode(body, &context)?;
        Ok(normalize_detail(parsed.result, place_id))
    }

    /// Fetches ranked autocomplete predictions for `input`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::nearby_search_page`].
    pub async fn autocomplete_predictions(
        &self,
        input: &str,
        options: &AutocompleteOptions,
    ) -> Result<Vec<Suggestion>, PlacesError> {
        let components = format!("country:{}", options.country);
        let location = options.location.to_string();
        let radius = options.radius_m.to_string();
        let types = options.types.join("|");
        let mut params = vec![
            ("input", input),
            ("components", components.as_str()),
            ("language", options.language.as_str()),
            ("location", location.as_str()),
            ("radius", radius.as_str()),
        ];
        if !types.is_empty() {
            params.push(("types", types.as_str()));
        }
        let url = self.build_url(AUTOCOMPLETE_PATH, &params)?;
        let body = self.request_json(&url, "autocomplete").await?;
        let parsed: AutocompleteResponse = decode(body, "autocomplete")?;
        Ok(parsed
            .predictions
            .into_iter()
            .map(normalize_prediction)
            .collect())
    }

    /// Resolves a free-text address to coordinate-bearing records, best
    /// match first.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::nearby_search_page`].
    pub async fn geocode_address(&self, address: &str) -> Result<Vec<GeocodeResult>, PlacesError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", address)])?;
        let body = self.request_json(&url, "geocode").await?;
        let parsed: GeocodeResponse = decode(body, "geocode")?;
        Ok(parsed.results.into_iter().map(normalize_geocode).collect())
    }

    /// URL that serves the photo behind `photo_reference`, scaled to at most
    /// `max_width` pixels wide. The URL embeds the API key.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidBaseUrl`] if the photo path cannot be
    /// joined onto the base URL.
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<Url, PlacesError> {
        let max_width = max_width.to_string();
        self.build_url(
            PHOTO_PATH,
            &[
                ("maxwidth", max_width.as_str()),
                ("photo_reference", photo_reference),
            ],
        )
    }
}

impl PlacesProvider for GooglePlacesClient {
    async fn nearby_page(
        &self,
        request: &NearbyRequest,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, PlacesError> {
        self.nearby_search_page(request, page_token).await
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        self.place_details(place_id).await
    }

    async fn autocomplete(
        &self,
        input: &str,
        options: &AutocompleteOptions,
    ) -> Result<Vec<Suggestion>, PlacesError> {
        self.autocomplete_predictions(input, options).await
    }

    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, PlacesError> {
        self.geocode_address(address).await
    }
}
