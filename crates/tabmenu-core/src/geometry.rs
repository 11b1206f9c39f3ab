//! Cell-grid geometry: points, rectangles and layout orientation.
//!
//! Coordinates are signed so that a rectangle can sit partially off-screen
//! and so that a zero or negative size can stand for "not laid out yet".

use serde::{Deserialize, Serialize};

/// A cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A cell region.
///
/// Drawing and hit-testing must skip empty rectangles (see [`Rectangle::is_empty`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Strict intersection on both axes; rectangles that only share an edge
    /// do not overlap.
    pub const fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Same size, new origin.
    pub const fn with_top_left(&self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.width, self.height)
    }
}

/// Direction in which a node's children are stacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children cascade to the right of the parent.
    #[default]
    Horizontal,
    /// Children stack downward below the parent.
    Vertical,
}
