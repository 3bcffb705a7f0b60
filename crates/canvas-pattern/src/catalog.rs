//! Code Canvas challenge catalog
//!
//! The ten levels of the Code Canvas game. Each challenge carries its
//! metadata plus a generator for the target pattern a player's program must
//! print; targets are produced on demand from [`crate::shapes`] and are never
//! stored as literals.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::coord::{Bounds, Coordinate};
use crate::error::{PatternError, Result};
use crate::pattern::Pattern;
use crate::shapes;

/// Challenge difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Lowercase name, as used on the wire and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(PatternError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A single level
#[derive(Debug, Clone, serde::Serialize)]
pub struct Challenge {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub hint: &'static str,
    /// Time limit in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<u32>,
    pub points: u32,
    #[serde(skip)]
    generator: fn() -> Pattern,
}

impl Challenge {
    /// Build the target pattern
    #[must_use]
    pub fn target(&self) -> Pattern {
        let target = (self.generator)();
        tracing::debug!(id = self.id, cells = target.len(), "generated challenge target");
        target
    }
}

static CHALLENGES: [Challenge; 10] = [
    Challenge {
        id: 1,
        title: "Horizontal Line",
        description: "Draw a horizontal line across row 5",
        difficulty: Difficulty::Easy,
        hint: "Use a for loop from 0 to 9 and keep y constant at 5",
        max_time: Some(120),
        points: 10,
        generator: || shapes::horizontal_line(0..=9, 5),
    },
    Challenge {
        id: 2,
        title: "Vertical Line",
        description: "Draw a vertical line down column 4",
        difficulty: Difficulty::Easy,
        hint: "Keep x constant at 4, loop y from 0 to 9",
        max_time: Some(120),
        points: 10,
        generator: || shapes::vertical_line(4, 0..=9),
    },
    Challenge {
        id: 3,
        title: "Diagonal Line",
        description: "Draw a diagonal line from top-left to bottom-right",
        difficulty: Difficulty::Easy,
        hint: "In a diagonal, x and y are always equal: [i, i]",
        max_time: Some(120),
        points: 15,
        generator: || shapes::diagonal(0..=9),
    },
    Challenge {
        id: 4,
        title: "Square Outline",
        description: "Draw a 6x6 square outline with corners at (2,2) and (7,7)",
        difficulty: Difficulty::Medium,
        hint: "Draw 4 lines: top (y=2), bottom (y=7), left (x=2), right (x=7)",
        max_time: Some(180),
        points: 20,
        generator: || shapes::square_outline(2, 7),
    },
    Challenge {
        id: 5,
        title: "Checkerboard",
        description: "Create a checkerboard pattern (fill cells where x+y is even)",
        difficulty: Difficulty::Medium,
        hint: "Use modulo operator %. If (x + y) % 2 === 0, add the cell",
        max_time: Some(180),
        points: 25,
        generator: || shapes::checkerboard(Bounds::GRID),
    },
    Challenge {
        id: 6,
        title: "Cross/Plus Sign",
        description: "Draw a plus sign (+) at the center of the grid",
        difficulty: Difficulty::Medium,
        hint: "Draw two lines: horizontal at y=4 and vertical at x=4",
        max_time: Some(150),
        points: 20,
        generator: || shapes::cross(Coordinate::new(4, 4), Bounds::GRID),
    },
    Challenge {
        id: 7,
        title: "Border Only",
        description: "Fill only the edges of the entire 10x10 grid",
        difficulty: Difficulty::Medium,
        hint: "Draw cells where x=0, x=9, y=0, or y=9",
        max_time: Some(180),
        points: 25,
        generator: || shapes::border(10),
    },
    Challenge {
        id: 8,
        title: "Right Triangle",
        description: "Draw a right triangle in the bottom-left corner",
        difficulty: Difficulty::Hard,
        hint: "For each row from bottom, fill cells from left equal to row number",
        max_time: Some(240),
        points: 30,
        generator: || shapes::right_triangle(10),
    },
    Challenge {
        id: 9,
        title: "Diamond Shape",
        description: "Create a diamond pattern centered in the grid",
        difficulty: Difficulty::Hard,
        hint: "Use Manhattan distance: |x - 4.5| + |y - 4.5| <= 4",
        max_time: Some(300),
        points: 40,
        generator: || shapes::diamond(10, 4),
    },
    Challenge {
        id: 10,
        title: "Spiral Pattern",
        description: "Draw an outward spiral starting from the center",
        difficulty: Difficulty::Hard,
        hint: "Start at center, move right, then spiral clockwise. Track direction changes.",
        max_time: Some(360),
        points: 50,
        generator: || shapes::spiral(Coordinate::new(4, 4), 14),
    },
];

/// All challenges in id order
#[must_use]
pub fn challenges() -> &'static [Challenge] {
    &CHALLENGES
}

/// Look up a challenge by id
#[must_use]
pub fn challenge_by_id(id: u32) -> Option<&'static Challenge> {
    CHALLENGES.iter().find(|c| c.id == id)
}

/// Look up a challenge by id, failing on unknown ids
///
/// # Errors
/// Returns [`PatternError::UnknownChallenge`] if no challenge has this id
pub fn require_challenge(id: u32) -> Result<&'static Challenge> {
    challenge_by_id(id).ok_or(PatternError::UnknownChallenge(id))
}

/// Challenges of one difficulty, in id order
pub fn challenges_by_difficulty(difficulty: Difficulty) -> impl Iterator<Item = &'static Challenge> {
    CHALLENGES.iter().filter(move |c| c.difficulty == difficulty)
}
