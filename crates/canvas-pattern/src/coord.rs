//! Coordinate primitives
//!
//! Provides [`Coordinate`], a single grid cell, and [`Bounds`], an inclusive
//! rectangle of cells used to validate patterns before they are emitted.

use std::fmt::{self, Display, Formatter};

/// A grid cell `(x, y)`
///
/// Serialized as a two-element JSON array `[x,y]`, never as an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a step, returning the neighbouring cell
    ///
    /// Saturates at the `i32` edges.
    #[inline]
    #[must_use]
    pub const fn step(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl serde::Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

/// Inclusive rectangle `[min.x, max.x] x [min.y, max.y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// The 10x10 canvas every challenge is drawn on
    pub const GRID: Self = Self::square(0, 9);

    /// Create bounds from two corners
    #[inline]
    #[must_use]
    pub const fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    /// Square bounds with the same range on both axes
    #[inline]
    #[must_use]
    pub const fn square(lo: i32, hi: i32) -> Self {
        Self::new(Coordinate::new(lo, lo), Coordinate::new(hi, hi))
    }

    /// Check whether a cell lies inside (edges included)
    #[inline]
    #[must_use]
    pub const fn contains(&self, c: Coordinate) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
