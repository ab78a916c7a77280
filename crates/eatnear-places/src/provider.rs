//! The seam between the session logic and a concrete places backend.

use std::future::Future;

use eatnear_core::{AutocompleteOptions, GeocodeResult, NearbyRequest, PlaceDetail, Suggestion};

use crate::error::PlacesError;
use crate::pagination::NearbyPage;

/// Operations the finder needs from a places/geocoding service.
///
/// [`crate::GooglePlacesClient`] is the HTTP implementation; tests substitute
/// scripted providers.
pub trait PlacesProvider {
    /// Fetches one nearby-search page. `page_token` is `None` for the first
    /// page and the previous page's continuation token afterwards.
    fn nearby_page(
        &self,
        request: &NearbyRequest,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<NearbyPage, PlacesError>> + Send;

    fn details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceDetail, PlacesError>> + Send;

    fn autocomplete(
        &self,
        input: &str,
        options: &AutocompleteOptions,
    ) -> impl Future<Output = Result<Vec<Suggestion>, PlacesError>> + Send;

    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Vec<GeocodeResult>, PlacesError>> + Send;
}
