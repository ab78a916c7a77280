//! The map the session drives.

use eatnear_core::Coordinate;

/// A rendered map the session can recenter. Rendering is the implementor's
/// business; the session only issues pan commands.
pub trait MapSurface {
    fn pan_to(&mut self, center: Coordinate);
}

/// Headless map state: where the map is centred and at what zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Viewport {
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self { center, zoom }
    }
}

impl MapSurface for Viewport {
    fn pan_to(&mut self, center: Coordinate) {
        self.center = center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_moves_center_and_keeps_zoom() {
        let mut v = Viewport::new(Coordinate::new(35.0, 139.0), 15);
        v.pan_to(Coordinate::new(35.5, 139.5));
        assert_eq!(v.center, Coordinate::new(35.5, 139.5));
        assert_eq!(v.zoom, 15);
    }
}
