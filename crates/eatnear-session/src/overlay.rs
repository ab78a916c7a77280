//! What a renderer draws on the map for a given state.

use eatnear_core::Coordinate;

use crate::store::MapState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// The fixed origin, labelled [`ORIGIN_LABEL`].
    Origin,
    /// A search result; clicking it selects the result.
    Result,
    /// A selected entity that is not among the search results, such as an
    /// autocompleted address.
    Selection,
}

pub const ORIGIN_LABEL: &str = "C";

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub place_id: Option<String>,
    pub label: Option<&'static str>,
    /// Whether the marker's info window is open.
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub stroke_color: &'static str,
    pub stroke_opacity: f32,
    pub stroke_weight: u8,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
    pub z_index: i32,
    pub clickable: bool,
}

pub const RADIUS_CIRCLE_STYLE: CircleStyle = CircleStyle {
    stroke_color: "#8BC34A",
    stroke_opacity: 0.5,
    stroke_weight: 2,
    fill_color: "#8BC34A",
    fill_opacity: 0.05,
    z_index: 3,
    clickable: false,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusCircle {
    pub center: Coordinate,
    pub radius_m: u32,
    pub style: CircleStyle,
}

/// The search-radius circle around the origin.
#[must_use]
pub fn radius_circle(state: &MapState, radius_m: u32) -> RadiusCircle {
    RadiusCircle {
        center: state.origin(),
        radius_m,
        style: RADIUS_CIRCLE_STYLE,
    }
}

/// Markers in draw order: origin, located results, then the selection if it
/// is not one of the results.
#[must_use]
pub fn markers(state: &MapState) -> Vec<Marker> {
    let selected_id = state.selected().map(|s| s.place_id.as_str());
    let mut out = vec![Marker {
        kind: MarkerKind::Origin,
        position: state.origin(),
        place_id: None,
        label: Some(ORIGIN_LABEL),
        selected: false,
    }];

    out.extend(state.search_results().iter().filter_map(|r| {
        r.location.map(|position| Marker {
            kind: MarkerKind::Result,
            position,
            place_id: Some(r.place_id.clone()),
            label: None,
            selected: selected_id == Some(r.place_id.as_str()),
        })
    }));

    if let Some(sel) = state.selected() {
        let in_results = state
            .search_results()
            .iter()
            .any(|r| r.place_id == sel.place_id);
        if let (false, Some(position)) = (in_results, sel.location) {
            out.push(Marker {
                kind: MarkerKind::Selection,
                position,
                place_id: Some(sel.place_id.clone()),
                label: None,
                selected: true,
            });
        }
    }

    out
}
