//! Scripted in-memory `PlacesProvider` shared by the session integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use eatnear_core::{
    AutocompleteOptions, Coordinate, GeocodeResult, NearbyRequest, PlaceDetail, SearchResult,
    Suggestion,
};
use eatnear_places::{NearbyPage, PlacesError, PlacesProvider};
use eatnear_session::{SessionSettings, Viewport};

pub const OFFICE: Coordinate = Coordinate::new(35.664_678_2, 139.737_819_8);

pub enum PageScript {
    Page(NearbyPage),
    Fail(&'static str),
}

#[derive(Default)]
pub struct ScriptedProvider {
    pages: Mutex<VecDeque<PageScript>>,
    details: HashMap<String, PlaceDetail>,
    suggestions: Option<Vec<Suggestion>>,
    geocoded: Vec<GeocodeResult>,
    /// Page token passed to each `nearby_page` call, in call order.
    pub page_tokens: Mutex<Vec<Option<String>>>,
    pub detail_calls: Mutex<Vec<String>>,
    pub autocomplete_calls: Mutex<Vec<(String, AutocompleteOptions)>>,
    pub geocode_calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page of `size` results; `has_more` controls whether it carries a
    /// continuation token.
    pub fn page(self, size: usize, has_more: bool) -> Self {
        let n = self.pages.lock().unwrap().len();
        let results = (0..size).map(|i| result(&format!("p{n}-{i}"))).collect();
        let next_page_token = has_more.then(|| format!("token-{}", n + 1));
        self.pages
            .lock()
            .unwrap()
            .push_back(PageScript::Page(NearbyPage {
                results,
                next_page_token,
            }));
        self
    }

    pub fn failing_page(self, status: &'static str) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(PageScript::Fail(status));
        self
    }

    pub fn detail(mut self, detail: PlaceDetail) -> Self {
        self.details.insert(detail.place_id.clone(), detail);
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn geocoded(mut self, result: GeocodeResult) -> Self {
        self.geocoded.push(result);
        self
    }

    pub fn page_calls(&self) -> usize {
        self.page_tokens.lock().unwrap().len()
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_calls.lock().unwrap().len()
    }
}

fn status(status: &str) -> PlacesError {
    PlacesError::Status {
        status: status.to_owned(),
        message: None,
    }
}

impl PlacesProvider for ScriptedProvider {
    async fn nearby_page(
        &self,
        _request: &NearbyRequest,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, PlacesError> {
        self.page_tokens
            .lock()
            .unwrap()
            .push(page_token.map(str::to_owned));
        match self.pages.lock().unwrap().pop_front() {
            Some(PageScript::Page(page)) => Ok(page),
            Some(PageScript::Fail(s)) => Err(status(s)),
            None => panic!("nearby_page called past the end of the script"),
        }
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        self.detail_calls.lock().unwrap().push(place_id.to_owned());
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| status("NOT_FOUND"))
    }

    async fn autocomplete(
        &self,
        input: &str,
        options: &AutocompleteOptions,
    ) -> Result<Vec<Suggestion>, PlacesError> {
        self.autocomplete_calls
            .lock()
            .unwrap()
            .push((input.to_owned(), options.clone()));
        self.suggestions
            .clone()
            .ok_or_else(|| status("REQUEST_DENIED"))
    }

    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, PlacesError> {
        self.geocode_calls.lock().unwrap().push(address.to_owned());
        Ok(self.geocoded.clone())
    }
}

pub fn result(id: &str) -> SearchResult {
    result_at(id, Some(Coordinate::new(35.66, 139.73)))
}

pub fn result_at(id: &str, location: Option<Coordinate>) -> SearchResult {
    SearchResult {
        place_id: id.to_owned(),
        name: format!("Place {id}"),
        location,
        open_now: Some(true),
        vicinity: Some("Minato City".to_owned()),
        rating: Some(4.0),
    }
}

pub fn detail(id: &str) -> PlaceDetail {
    PlaceDetail {
        place_id: id.to_owned(),
        name: format!("Place {id}"),
        formatted_address: Some(format!("{id} street")),
        ..PlaceDetail::default()
    }
}

pub fn settings() -> SessionSettings {
    SessionSettings {
        nearby: NearbyRequest::restaurants_around(OFFICE, 1000, true),
        autocomplete: AutocompleteOptions {
            country: "jp".to_owned(),
            language: "ja".to_owned(),
            location: OFFICE,
            radius_m: 1000,
            types: vec!["restaurant".to_owned(), "food".to_owned()],
        },
        page_delay: Duration::ZERO,
        detail_policy: eatnear_core::DetailPolicy::default(),
    }
}

pub fn viewport() -> Viewport {
    Viewport::new(OFFICE, 15)
}
