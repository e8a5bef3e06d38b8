//! Presentation-layer canvas coordinates.
//!
//! The routing core is coordinate-agnostic: distances come from edge weights,
//! never from positions.  `MapPoint` exists so that map suppliers can ship a
//! block → position table alongside a graph for renderers to consume.

/// A 2-D canvas position in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between two positions — where renderers place edge labels.
    #[inline]
    pub fn midpoint(self, other: MapPoint) -> MapPoint {
        MapPoint {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}
