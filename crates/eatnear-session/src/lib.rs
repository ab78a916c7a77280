//! Restaurant-finder session logic.
//!
//! A [`Session`] owns the [`Store`], drives nearby-search paging through a
//! [`PlacesProvider`](eatnear_places::PlacesProvider), resolves details for
//! the selected place and recenters a [`MapSurface`].

pub mod error;
pub mod nearby;
pub mod overlay;
pub mod selection;
pub mod session;
pub mod store;
pub mod suggest;
pub mod surface;

pub use error::SessionError;
pub use nearby::{nearby_pages, run_nearby_search, NearbySummary, PagingEnd};
pub use overlay::{markers, radius_circle, Marker, MarkerKind, RadiusCircle};
pub use selection::{DetailOutcome, DetailTicket, Resolver};
pub use session::{Session, SessionSettings};
pub use store::{reduce, Action, MapState, Store};
pub use suggest::pick_random;
pub use surface::{MapSurface, Viewport};
