//! Selection and detail resolution.
//!
//! Every selection change (including dismissal) takes a new request id.
//! A detail lookup is issued for a [`DetailTicket`] carrying the id that was
//! current when the lookup started; the response is applied according to the
//! configured [`DetailPolicy`].

use eatnear_core::{Coordinate, DetailPolicy, PlaceDetail, SearchResult};
use eatnear_places::PlacesError;

use crate::store::Store;
use crate::surface::MapSurface;

/// A pending detail lookup for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTicket {
    pub request_id: u64,
    pub place_id: String,
    pub location: Coordinate,
}

#[derive(Debug)]
pub enum DetailOutcome {
    /// The detail replaced the store's record and the map was recentred.
    Applied,
    /// The selection changed after the lookup started; the response was dropped.
    Stale,
    /// The provider call failed; the previous record is untouched.
    Failed(PlacesError),
}

impl DetailOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, DetailOutcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct Resolver {
    latest: u64,
    policy: DetailPolicy,
}

impl Resolver {
    #[must_use]
    pub fn new(policy: DetailPolicy) -> Self {
        Self { latest: 0, policy }
    }

    #[must_use]
    pub fn policy(&self) -> DetailPolicy {
        self.policy
    }

    /// Replaces the selection. Returns a ticket when the new entity has a
    /// coordinate and therefore needs a detail lookup.
    pub fn select(
        &mut self,
        store: &mut Store,
        entity: Option<SearchResult>,
    ) -> Option<DetailTicket> {
        self.latest += 1;
        let ticket = entity.as_ref().and_then(|e| {
            e.location.map(|location| DetailTicket {
                request_id: self.latest,
                place_id: e.place_id.clone(),
                location,
            })
        });
        tracing::debug!(
            request_id = self.latest,
            place_id = entity.as_ref().map(|e| e.place_id.as_str()),
            lookup = ticket.is_some(),
            "selection changed"
        );
        store.set_selected(entity);
        ticket
    }

    #[must_use]
    pub fn is_current(&self, ticket: &DetailTicket) -> bool {
        ticket.request_id == self.latest
    }

    /// Applies the result of the lookup issued for `ticket`.
    pub fn apply<S: MapSurface>(
        &self,
        store: &mut Store,
        surface: &mut S,
        ticket: &DetailTicket,
        result: Result<PlaceDetail, PlacesError>,
    ) -> DetailOutcome {
        let detail = match result {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(
                    place_id = %ticket.place_id,
                    error = %e,
                    "detail lookup failed"
                );
                return DetailOutcome::Failed(e);
            }
        };

        if self.policy == DetailPolicy::LatestSelectionOnly && !self.is_current(ticket) {
            tracing::debug!(
                place_id = %ticket.place_id,
                request_id = ticket.request_id,
                latest = self.latest,
                "discarding detail for superseded selection"
            );
            return DetailOutcome::Stale;
        }

        store.set_detail(detail);
        surface.pan_to(ticket.location);
        DetailOutcome::Applied
    }
}
