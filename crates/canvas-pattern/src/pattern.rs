//! Ordered coordinate sequences and their JSON form

use std::collections::HashSet;
use std::io::Write;

use crate::coord::{Bounds, Coordinate};
use crate::error::{PatternError, Result};

/// An ordered sequence of cells
///
/// Order is preserved exactly as generated and duplicates are kept; both
/// matter for byte-exact output and for length-sensitive matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Pattern(Vec<Coordinate>);

impl Pattern {
    /// Create an empty pattern
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty pattern with room for `capacity` cells
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a cell
    #[inline]
    pub fn push(&mut self, c: Coordinate) {
        self.0.push(c);
    }

    /// Number of cells, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate cells in order
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }

    /// Distinct cells
    #[must_use]
    pub fn cells(&self) -> HashSet<Coordinate> {
        self.0.iter().copied().collect()
    }

    /// Find the first cell outside `bounds`
    ///
    /// # Errors
    /// Returns [`PatternError::OutOfBounds`] with the offending index
    pub fn check_bounds(&self, bounds: Bounds) -> Result<()> {
        match self.0.iter().position(|c| !bounds.contains(*c)) {
            Some(index) => {
                tracing::warn!(index, coordinate = %self.0[index], %bounds, "cell outside bounds");
                Err(PatternError::out_of_bounds(index, self.0[index], bounds))
            }
            None => Ok(()),
        }
    }

    /// Compact JSON, e.g. `[[0,5],[1,5]]`
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Stream compact JSON into `writer` without a trailing newline
    ///
    /// # Errors
    /// Returns error if serialization or the underlying write fails
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self).map_err(|e| {
            if e.is_io() {
                PatternError::Io(e.into())
            } else {
                PatternError::Serialize(e)
            }
        })
    }
}

impl FromIterator<Coordinate> for Pattern {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Coordinate> for Pattern {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl From<Vec<Coordinate>> for Pattern {
    fn from(cells: Vec<Coordinate>) -> Self {
        Self(cells)
    }
}

impl From<&[(i32, i32)]> for Pattern {
    fn from(pairs: &[(i32, i32)]) -> Self {
        pairs.iter().copied().map(Coordinate::from).collect()
    }
}

impl IntoIterator for Pattern {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample() -> Pattern {
        Pattern::from(&[(0, 5), (1, 5), (2, 5)][..])
    }

    #[test]
    fn json_has_no_whitespace_or_trailing_comma() {
        assert_eq!(sample().to_json().unwrap(), "[[0,5],[1,5],[2,5]]");
    }

    #[test]
    fn empty_pattern_is_empty_array() {
        assert_eq!(Pattern::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn write_json_matches_to_json() {
        let mut buf = Vec::new();
        sample().write_json(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), sample().to_json().unwrap());
    }

    #[test]
    fn check_bounds_reports_first_offender() {
        let p = Pattern::from(&[(1, 1), (10, 1), (11, 1)][..]);
        match p.check_bounds(Bounds::GRID) {
            Err(PatternError::OutOfBounds {
                index, coordinate, ..
            }) => {
                assert_eq!(index, 1);
                assert_eq!(coordinate, Coordinate::new(10, 1));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_kept() {
        let p = Pattern::from(&[(0, 0), (0, 0)][..]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.cells().len(), 1);
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let err = sample().write_json(FailingWriter).unwrap_err();
        match err {
            PatternError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
