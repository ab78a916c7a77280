//! The finder facade: one store, one provider, one map surface.

use std::time::Duration;

use eatnear_core::{
    AppConfig, AutocompleteOptions, DetailPolicy, NearbyRequest, PlaceDetail, SearchResult,
    Suggestion,
};
use eatnear_places::{PlacesError, PlacesProvider};
use rand::Rng;

use crate::error::SessionError;
use crate::nearby::{run_nearby_search, NearbySummary};
use crate::selection::{DetailOutcome, DetailTicket, Resolver};
use crate::store::{MapState, Store};
use crate::suggest::pick_random;
use crate::surface::MapSurface;

/// Search and selection parameters a [`Session`] runs with.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub nearby: NearbyRequest,
    pub autocomplete: AutocompleteOptions,
    pub page_delay: Duration,
    pub detail_policy: DetailPolicy,
}

impl SessionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            nearby: config.nearby_request(),
            autocomplete: config.autocomplete_options(),
            page_delay: Duration::from_millis(config.page_delay_ms),
            detail_policy: config.detail_policy,
        }
    }
}

pub struct Session<P, S> {
    provider: P,
    surface: S,
    store: Store,
    resolver: Resolver,
    settings: SessionSettings,
    searched: bool,
}

impl<P, S> Session<P, S>
where
    P: PlacesProvider,
    S: MapSurface,
{
    /// Creates a session whose store origin is the nearby request's location.
    pub fn new(provider: P, surface: S, settings: SessionSettings) -> Self {
        Self {
            store: Store::new(settings.nearby.location),
            resolver: Resolver::new(settings.detail_policy),
            provider,
            surface,
            settings,
            searched: false,
        }
    }

    pub fn from_config(provider: P, surface: S, config: &AppConfig) -> Self {
        Self::new(provider, surface, SessionSettings::from_config(config))
    }

    #[must_use]
    pub fn state(&self) -> &MapState {
        self.store.state()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Runs the nearby search the first time the map reports ready.
    /// Returns `None` on every later call.
    pub async fn on_map_ready(&mut self) -> Option<NearbySummary> {
        if self.searched {
            tracing::debug!("map ready again, nearby search already ran");
            return None;
        }
        self.searched = true;
        Some(self.search_nearby().await)
    }

    /// Runs a nearby search unconditionally, appending to existing results.
    pub async fn search_nearby(&mut self) -> NearbySummary {
        run_nearby_search(
            &mut self.store,
            &self.provider,
            &self.settings.nearby,
            self.settings.page_delay,
        )
        .await
    }

    /// Replaces the selection without resolving its detail. The returned
    /// ticket must be passed to [`Session::resolve_detail`] to load it.
    pub fn select(&mut self, entity: SearchResult) -> Option<DetailTicket> {
        self.resolver.select(&mut self.store, Some(entity))
    }

    pub fn dismiss(&mut self) {
        self.resolver.select(&mut self.store, None);
    }

    /// Looks up the detail for `ticket` and applies it.
    pub async fn resolve_detail(&mut self, ticket: &DetailTicket) -> DetailOutcome {
        let result = self.provider.details(&ticket.place_id).await;
        self.apply_detail(ticket, result)
    }

    /// Applies an already fetched detail response for `ticket`.
    pub fn apply_detail(
        &mut self,
        ticket: &DetailTicket,
        result: Result<PlaceDetail, PlacesError>,
    ) -> DetailOutcome {
        self.resolver
            .apply(&mut self.store, &mut self.surface, ticket, result)
    }

    /// Selects `entity` and resolves its detail. Returns `None` when the
    /// entity has no coordinate and no lookup was issued.
    pub async fn select_and_resolve(&mut self, entity: SearchResult) -> Option<DetailOutcome> {
        let ticket = self.select(entity)?;
        Some(self.resolve_detail(&ticket).await)
    }

    /// Selects a uniformly random result and resolves its detail.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoCandidates`] when there are no search
    /// results; the state is left untouched.
    pub async fn suggest_random<R>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<DetailOutcome>, SessionError>
    where
        R: Rng + ?Sized,
    {
        let picked = pick_random(self.store.state().search_results(), rng)?.clone();
        tracing::info!(place_id = %picked.place_id, name = %picked.name, "random suggestion");
        Ok(self.select_and_resolve(picked).await)
    }

    /// Autocomplete suggestions for `input`. Blank input and provider failures
    /// both yield an empty list.
    pub async fn autocomplete(&self, input: &str) -> Vec<Suggestion> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        match self
            .provider
            .autocomplete(input, &self.settings.autocomplete)
            .await
        {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(input, error = %e, "autocomplete failed");
                Vec::new()
            }
        }
    }

    /// Geocodes a chosen suggestion and selects the first match.
    ///
    /// Returns `None` when geocoding fails or finds nothing; the selection is
    /// left as it was in that case.
    pub async fn select_suggestion(&mut self, description: &str) -> Option<DetailOutcome> {
        let first = match self.provider.geocode(description).await {
            Ok(results) => results.into_iter().next(),
            Err(e) => {
                tracing::warn!(description, error = %e, "geocode failed");
                return None;
            }
        };
        let Some(found) = first else {
            tracing::info!(description, "geocode returned no results");
            return None;
        };
        self.select_and_resolve(SearchResult::from(found)).await
    }
}
