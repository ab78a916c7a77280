//! Conversion from raw Google response shapes to `eatnear_core` records.

use eatnear_core::{
    Coordinate, GeocodeResult, OpeningHours, PlaceDetail, PlacePhoto, PlaceReview, SearchResult,
    Suggestion,
};

use crate::types::{RawGeocodeResult, RawGeometry, RawPlace, RawPrediction};

fn coordinate(geometry: Option<&RawGeometry>) -> Option<Coordinate> {
    geometry.map(|g| Coordinate::new(g.location.lat, g.location.lng))
}

/// Converts a nearby-search entry. Entries without a `place_id` cannot be
/// resolved into details and are dropped.
#[must_use]
pub fn normalize_search_result(raw: RawPlace) -> Option<SearchResult> {
    let place_id = raw.place_id.filter(|id| !id.is_empty())?;
    Some(SearchResult {
        location: coordinate(raw.geometry.as_ref()),
        open_now: raw.opening_hours.as_ref().and_then(|h| h.open_now),
        name: raw.name.unwrap_or_default(),
        vicinity: raw.vicinity,
        rating: raw.rating,
        place_id,
    })
}

/// Converts a place-details payload. `requested_id` fills in the identifier
/// when the provider omits it from the result.
#[must_use]
pub fn normalize_detail(raw: RawPlace, requested_id: &str) -> PlaceDetail {
    let location = coordinate(raw.geometry.as_ref());
    PlaceDetail {
        place_id: raw
            .place_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| requested_id.to_owned()),
        name: raw.name.unwrap_or_default(),
        business_status: raw.business_status,
        formatted_address: raw.formatted_address,
        vicinity: raw.vicinity,
        formatted_phone_number: raw.formatted_phone_number,
        rating: raw.rating,
        opening_hours: raw.opening_hours.map(|h| OpeningHours {
            open_now: h.open_now,
            weekday_text: h.weekday_text,
        }),
        reviews: raw
            .reviews
            .into_iter()
            .map(|r| PlaceReview {
                author_name: r.author_name.unwrap_or_default(),
                rating: r.rating,
                relative_time_description: r.relative_time_description,
                text: r.text.unwrap_or_default(),
                time: r.time,
            })
            .collect(),
        photos: raw
            .photos
            .into_iter()
            .map(|p| PlacePhoto {
                photo_reference: p.photo_reference,
                width: p.width,
                height: p.height,
            })
            .collect(),
        location,
    }
}

#[must_use]
pub fn normalize_prediction(raw: RawPrediction) -> Suggestion {
    Suggestion {
        place_id: raw.place_id,
        description: raw.description,
    }
}

#[must_use]
pub fn normalize_geocode(raw: RawGeocodeResult) -> GeocodeResult {
    GeocodeResult {
        place_id: raw.place_id.unwrap_or_default(),
        formatted_address: raw.formatted_address.unwrap_or_default(),
        location: Coordinate::new(raw.geometry.location.lat, raw.geometry.location.lng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NearbySearchResponse, PlaceDetailsResponse};
    use serde_json::json;

    #[test]
    fn search_result_maps_geometry_and_open_now() {
        let raw: NearbySearchResponse = serde_json::from_value(json!({
            "results": [{
                "place_id": "ChIJ1",
                "name": "Tonkatsu Maisen",
                "geometry": { "location": { "lat": 35.66, "lng": 139.71 } },
                "opening_hours": { "open_now": true },
                "vicinity": "4-8-5 Jingumae",
                "rating": 4.3
            }]
        }))
        .unwrap();
        let r = normalize_search_result(raw.results.into_iter().next().unwrap()).unwrap();
        assert_eq!(r.place_id, "ChIJ1");
        assert_eq!(r.name, "Tonkatsu Maisen");
        assert_eq!(r.location, Some(Coordinate::new(35.66, 139.71)));
        assert_eq!(r.open_now, Some(true));
        assert_eq!(r.vicinity.as_deref(), Some("4-8-5 Jingumae"));
        assert_eq!(r.rating, Some(4.3));
    }

    #[test]
    fn search_result_without_place_id_is_dropped() {
        let raw = RawPlace {
            name: Some("Nameless".to_owned()),
            ..RawPlace::default()
        };
        assert!(normalize_search_result(raw).is_none());
    }

    #[test]
    fn search_result_without_geometry_has_no_location() {
        let raw = RawPlace {
            place_id: Some("p".to_owned()),
            ..RawPlace::default()
        };
        let r = normalize_search_result(raw).unwrap();
        assert!(r.location.is_none());
        assert!(r.open_now.is_none());
    }

    #[test]
    fn detail_maps_reviews_photos_and_hours() {
        let raw: PlaceDetailsResponse = serde_json::from_value(json!({
            "result": {
                "place_id": "ChIJ2",
                "name": "Ichiran",
                "business_status": "OPERATIONAL",
                "formatted_address": "Roppongi, Tokyo",
                "formatted_phone_number": "03-0000-0000",
                "rating": 4.1,
                "opening_hours": {
                    "open_now": false,
                    "weekday_text": ["Monday: Open 24 hours", "Tuesday: Open 24 hours"]
                },
                "reviews": [{
                    "author_name": "Ken",
                    "rating": 5,
                    "relative_time_description": "a week ago",
                    "text": "Rich broth",
                    "time": 1_700_000_000
                }],
                "photos": [{ "photo_reference": "ref-1", "width": 800, "height": 600 }],
                "geometry": { "location": { "lat": 35.0, "lng": 139.0 } }
            }
        }))
        .unwrap();
        let d = normalize_detail(raw.result, "ChIJ2");
        assert_eq!(d.name, "Ichiran");
        assert_eq!(d.business_status.as_deref(), Some("OPERATIONAL"));
        let hours = d.opening_hours.unwrap();
        assert_eq!(hours.open_now, Some(false));
        assert_eq!(hours.weekday_text.len(), 2);
        assert_eq!(d.reviews.len(), 1);
        assert_eq!(d.reviews[0].author_name, "Ken");
        assert_eq!(d.reviews[0].rating, Some(5.0));
        assert_eq!(d.photos[0].photo_reference, "ref-1");
        assert_eq!(d.photos[0].width, 800);
        assert_eq!(d.location, Some(Coordinate::new(35.0, 139.0)));
    }

    #[test]
    fn detail_falls_back_to_requested_id() {
        let d = normalize_detail(RawPlace::default(), "requested");
        assert_eq!(d.place_id, "requested");
        assert!(d.reviews.is_empty());
        assert!(d.opening_hours.is_none());
    }

    #[test]
    fn geocode_maps_location() {
        let raw: RawGeocodeResult = serde_json::from_value(json!({
            "place_id": "geo",
            "formatted_address": "Tokyo Tower",
            "geometry": { "location": { "lat": 35.6586, "lng": 139.7454 } }
        }))
        .unwrap();
        let g = normalize_geocode(raw);
        assert_eq!(g.place_id, "geo");
        assert_eq!(g.location, Coordinate::new(35.6586, 139.7454));
    }
}
