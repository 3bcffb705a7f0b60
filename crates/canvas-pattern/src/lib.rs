//! Code Canvas Patterns
//!
//! Integer coordinate patterns and their compact JSON form.
//!
//! # Core Concepts
//!
//! - [`Coordinate`]: A grid cell, serialized as `[x,y]`
//! - [`Pattern`]: An ordered sequence of cells, serialized as `[[x,y],...]`
//! - [`Bounds`]: Inclusive rectangle used to validate patterns
//! - [`shapes`]: Fixed-bound generators (lines, boxes, spirals, ...)
//! - [`catalog`]: The Code Canvas challenge levels and their targets
//! - [`compare`]: Exact matching and percentage scoring against a target
//!
//! # Example
//!
//! ```rust
//! use canvas_pattern::shapes;
//!
//! let line = shapes::horizontal_line(0..=2, 5);
//! assert_eq!(line.to_json().unwrap(), "[[0,5],[1,5],[2,5]]");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod coord;
mod error;
mod pattern;

pub mod catalog;
pub mod compare;
pub mod shapes;

// Re-exports
pub use catalog::{Challenge, Difficulty};
pub use compare::{match_percentage, patterns_match};
pub use coord::{Bounds, Coordinate};
pub use error::{PatternError, Result};
pub use pattern::Pattern;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building and emitting patterns
    pub use crate::{shapes, Bounds, Challenge, Coordinate, Difficulty, Pattern, PatternError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
