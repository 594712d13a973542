use crate::units::*;

/// A rectangle in raster coordinates: the origin is the top-left corner of
/// the canvas and y grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x1: Px,
    /// The y-coordinate of the top edge
    pub y1: Px,
    /// The x-coordinate of the right edge
    pub x2: Px,
    /// The y-coordinate of the bottom edge
    pub y2: Px,
}

impl Rect {
    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }
}
