//! The finder's state container.
//!
//! [`MapState`] is mutated only through [`Action`]s applied by [`reduce`].
//! Each reduction is total and synchronous; nothing validates payloads.

use eatnear_core::{Coordinate, PlaceDetail, SearchResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    search_results: Vec<SearchResult>,
    selected: Option<SearchResult>,
    detail: Option<PlaceDetail>,
    loading: bool,
    origin: Coordinate,
}

impl MapState {
    #[must_use]
    pub fn new(origin: Coordinate) -> Self {
        Self {
            search_results: Vec::new(),
            selected: None,
            detail: None,
            loading: false,
            origin,
        }
    }

    /// All results received so far, in arrival order across pages.
    #[must_use]
    pub fn search_results(&self) -> &[SearchResult] {
        &self.search_results
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SearchResult> {
        self.selected.as_ref()
    }

    /// The most recently applied detail record. May describe a previous
    /// selection until the current selection's lookup resolves.
    #[must_use]
    pub fn detail(&self) -> Option<&PlaceDetail> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fixed for the lifetime of the state; no action changes it.
    #[must_use]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AppendSearchResults(Vec<SearchResult>),
    SetLoading(bool),
    SetSelected(Option<SearchResult>),
    SetDetail(PlaceDetail),
}

/// Applies one action to `state` and returns the new state.
#[must_use]
pub fn reduce(mut state: MapState, action: Action) -> MapState {
    match action {
        Action::AppendSearchResults(results) => state.search_results.extend(results),
        Action::SetLoading(flag) => state.loading = flag,
        Action::SetSelected(entity) => state.selected = entity,
        Action::SetDetail(detail) => state.detail = Some(detail),
    }
    state
}

/// Owns a [`MapState`] and applies actions to it in call order.
#[derive(Debug, Clone)]
pub struct Store {
    state: MapState,
}

impl Store {
    #[must_use]
    pub fn new(origin: Coordinate) -> Self {
        Self {
            state: MapState::new(origin),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let placeholder = MapState::new(self.state.origin);
        let state = std::mem::replace(&mut self.state, placeholder);
        self.state = reduce(state, action);
    }

    #[must_use]
    pub fn state(&self) -> &MapState {
        &self.state
    }

    pub fn append_search_results(&mut self, results: Vec<SearchResult>) {
        self.dispatch(Action::AppendSearchResults(results));
    }

    pub fn set_loading(&mut self, flag: bool) {
        self.dispatch(Action::SetLoading(flag));
    }

    pub fn set_selected(&mut self, entity: Option<SearchResult>) {
        self.dispatch(Action::SetSelected(entity));
    }

    pub fn set_detail(&mut self, detail: PlaceDetail) {
        self.dispatch(Action::SetDetail(detail));
    }
}
