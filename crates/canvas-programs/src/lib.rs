//! Code Canvas example programs
//!
//! The three fixed programs (`horizontal_line`, `diagonal_line`,
//! `box_pattern`) each print one hardcoded pattern to stdout and exit. They
//! take no arguments; the only knob is `RUST_LOG`, and logs go to stderr so
//! stdout stays byte-exact.
//!
//! # Example
//!
//! ```rust
//! use canvas_programs::Program;
//!
//! let mut out = Vec::new();
//! Program::DiagonalLine.emit(&mut out).unwrap();
//! assert!(out.starts_with(b"[[0,0],[1,1]"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use std::io::{self, Write};

use canvas_pattern::{shapes, Bounds, Coordinate, Pattern, Result};
use tracing_subscriber::EnvFilter;

/// Log filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// One of the fixed example programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    /// `[x,5]` for x in 0..=9
    HorizontalLine,
    /// `[i,i]` for i in 0..=9
    DiagonalLine,
    /// `{2..=5} x {2..=5}`, y varying fastest
    BoxPattern,
}

impl Program {
    pub const ALL: [Self; 3] = [Self::HorizontalLine, Self::DiagonalLine, Self::BoxPattern];

    /// Binary name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HorizontalLine => "horizontal_line",
            Self::DiagonalLine => "diagonal_line",
            Self::BoxPattern => "box_pattern",
        }
    }

    /// Range every emitted cell must fall in
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        match self {
            Self::HorizontalLine => Bounds::new(Coordinate::new(0, 5), Coordinate::new(9, 5)),
            Self::DiagonalLine => Bounds::square(0, 9),
            Self::BoxPattern => Bounds::square(2, 5),
        }
    }

    #[must_use]
    pub fn pattern(self) -> Pattern {
        match self {
            Self::HorizontalLine => shapes::horizontal_line(0..=9, 5),
            Self::DiagonalLine => shapes::diagonal(0..=9),
            Self::BoxPattern => shapes::filled_box(2..=5, 2..=5),
        }
    }

    /// Write the pattern JSON to `writer`, no trailing newline
    ///
    /// # Errors
    /// Returns error if a cell falls outside [`Program::bounds`] or the
    /// write fails
    pub fn emit<W: Write>(self, writer: W) -> Result<()> {
        let pattern = self.pattern();
        pattern.check_bounds(self.bounds())?;
        tracing::debug!(program = self.name(), cells = pattern.len(), "emitting pattern");
        pattern.write_json(writer)
    }
}

/// Install the stderr `tracing` subscriber
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Entry point shared by the fixed program binaries
///
/// # Errors
/// Returns error if stdout cannot be written or flushed
pub fn run(program: Program) -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    program.emit(&mut out)?;
    out.flush()?;

    tracing::debug!(program = program.name(), "done");
    Ok(())
}
