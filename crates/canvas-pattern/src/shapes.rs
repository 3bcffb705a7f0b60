//! Shape generators
//!
//! Each generator is a fixed-bound loop over inclusive ranges that yields a
//! [`Pattern`] in a well-defined order. The order is part of the contract:
//! emitted text is compared byte for byte.

use std::ops::RangeInclusive;

use crate::coord::{Bounds, Coordinate};
use crate::pattern::Pattern;

/// `[x,y]` for each x in `xs`
#[must_use]
pub fn horizontal_line(xs: RangeInclusive<i32>, y: i32) -> Pattern {
    xs.map(|x| Coordinate::new(x, y)).collect()
}

/// `[x,y]` for each y in `ys`
#[must_use]
pub fn vertical_line(x: i32, ys: RangeInclusive<i32>) -> Pattern {
    ys.map(|y| Coordinate::new(x, y)).collect()
}

/// `[i,i]` for each i in `range`
#[must_use]
pub fn diagonal(range: RangeInclusive<i32>) -> Pattern {
    range.map(|i| Coordinate::new(i, i)).collect()
}

/// Every cell of `xs` x `ys`, x outer and y inner
#[must_use]
pub fn filled_box(xs: RangeInclusive<i32>, ys: RangeInclusive<i32>) -> Pattern {
    xs.flat_map(|x| ys.clone().map(move |y| Coordinate::new(x, y)))
        .collect()
}

/// Outline of the square with corners `min` and `max`
///
/// Top edge, bottom edge, then the left and right edges without their
/// corners, so every cell appears once. A degenerate square (`min == max`)
/// is the single cell.
#[must_use]
pub fn square_outline(min: i32, max: i32) -> Pattern {
    let mut p = horizontal_line(min..=max, min);
    if max != min {
        p.extend(horizontal_line(min..=max, max));
    }
    let inner = min.saturating_add(1)..=max.saturating_sub(1);
    p.extend(vertical_line(min, inner.clone()));
    p.extend(vertical_line(max, inner));
    p
}

/// Cells of `bounds` where `x + y` is even, x outer
#[must_use]
pub fn checkerboard(bounds: Bounds) -> Pattern {
    filled_box(bounds.min.x..=bounds.max.x, bounds.min.y..=bounds.max.y)
        .into_iter()
        .filter(|c| (i64::from(c.x) + i64::from(c.y)).rem_euclid(2) == 0)
        .collect()
}

/// Plus sign through `center`, spanning `bounds`
///
/// The full horizontal arm comes first; the vertical arm skips the centre.
#[must_use]
pub fn cross(center: Coordinate, bounds: Bounds) -> Pattern {
    let mut p = horizontal_line(bounds.min.x..=bounds.max.x, center.y);
    p.extend(
        vertical_line(center.x, bounds.min.y..=bounds.max.y)
            .into_iter()
            .filter(|c| *c != center),
    );
    p
}

/// Edges of a `size` x `size` grid, walked one index at a time
///
/// For each i this pushes the top, bottom, left and right cell, so the
/// corners are emitted twice (`4 * size` cells in total).
#[must_use]
pub fn border(size: i32) -> Pattern {
    let last = size.saturating_sub(1);
    let mut p = Pattern::with_capacity(usize::try_from(size).unwrap_or_default().saturating_mul(4));
    for i in 0..size {
        p.push(Coordinate::new(i, 0));
        p.push(Coordinate::new(i, last));
        p.push(Coordinate::new(0, i));
        p.push(Coordinate::new(last, i));
    }
    p
}

/// Right triangle anchored in the bottom-left corner
///
/// Row 0 is the bottom row (`y = size - 1`) with a single cell; each row
/// above it is one cell wider.
#[must_use]
pub fn right_triangle(size: i32) -> Pattern {
    (0..size)
        .flat_map(|row| (0..=row).map(move |col| Coordinate::new(col, size - 1 - row)))
        .collect()
}

/// Cells within Manhattan distance `radius` of the centre of a `size` grid
///
/// The centre sits at `(size - 1) / 2` on both axes, which is a half-integer
/// for even sizes, so distances are compared doubled (in `i64`).
#[must_use]
pub fn diamond(size: i32, radius: i32) -> Pattern {
    let twice_center = i64::from(size) - 1;
    let limit = 2 * i64::from(radius);
    let last = size.saturating_sub(1);
    filled_box(0..=last, 0..=last)
        .into_iter()
        .filter(|c| {
            (2 * i64::from(c.x) - twice_center).abs() + (2 * i64::from(c.y) - twice_center).abs()
                <= limit
        })
        .collect()
}

/// Clockwise steps on a grid where y grows downwards: right, down, left, up
const SPIRAL_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Outward spiral from `start`
///
/// Leg lengths run 1, 1, 2, 2, 3, 3, ... and the walk stops after `legs`
/// legs. The start cell is included.
#[must_use]
pub fn spiral(start: Coordinate, legs: usize) -> Pattern {
    let mut p = Pattern::new();
    let mut cursor = start;
    p.push(cursor);

    for leg in 0..legs {
        let (dx, dy) = SPIRAL_DIRECTIONS[leg % SPIRAL_DIRECTIONS.len()];
        let length = leg / 2 + 1;
        for _ in 0..length {
            cursor = cursor.step(dx, dy);
            p.push(cursor);
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(p: &Pattern) -> Vec<(i32, i32)> {
        p.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn horizontal_line_keeps_y() {
        let p = horizontal_line(0..=3, 5);
        assert_eq!(pairs(&p), vec![(0, 5), (1, 5), (2, 5), (3, 5)]);
    }

    #[test]
    fn vertical_line_keeps_x() {
        let p = vertical_line(4, 0..=2);
        assert_eq!(pairs(&p), vec![(4, 0), (4, 1), (4, 2)]);
    }

    #[test]
    fn filled_box_varies_y_fastest() {
        let p = filled_box(2..=3, 2..=4);
        assert_eq!(
            pairs(&p),
            vec![(2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4)]
        );
    }

    #[test]
    fn square_outline_has_no_duplicate_corners() {
        let p = square_outline(2, 7);
        assert_eq!(p.len(), 20);
        assert_eq!(p.cells().len(), 20);
    }

    #[test]
    fn degenerate_square_outline_is_one_cell() {
        assert_eq!(pairs(&square_outline(3, 3)), vec![(3, 3)]);
        let p = square_outline(3, 4);
        assert_eq!(p.len(), 4);
        assert_eq!(p.cells().len(), 4);
    }

    #[test]
    fn extreme_arguments_do_not_overflow() {
        assert_eq!(
            pairs(&square_outline(i32::MAX, i32::MAX)),
            vec![(i32::MAX, i32::MAX)]
        );
        assert!(border(i32::MIN).is_empty());
        assert!(diamond(i32::MIN, 4).is_empty());
        let corner = Bounds::new(
            Coordinate::new(i32::MAX - 1, i32::MAX - 1),
            Coordinate::new(i32::MAX, i32::MAX),
        );
        assert_eq!(checkerboard(corner).len(), 2);
    }

    #[test]
    fn checkerboard_has_half_the_cells() {
        let p = checkerboard(Bounds::GRID);
        assert_eq!(p.len(), 50);
        assert!(p.iter().all(|c| (c.x + c.y) % 2 == 0));
        assert_eq!(p.as_slice()[0], Coordinate::new(0, 0));
        assert_eq!(p.as_slice()[1], Coordinate::new(0, 2));
    }

    #[test]
    fn cross_skips_center_once() {
        let p = cross(Coordinate::new(4, 4), Bounds::GRID);
        assert_eq!(p.len(), 19);
        assert_eq!(p.iter().filter(|c| **c == Coordinate::new(4, 4)).count(), 1);
    }

    #[test]
    fn border_repeats_corners() {
        let p = border(10);
        assert_eq!(p.len(), 40);
        assert_eq!(p.cells().len(), 36);
    }

    #[test]
    fn right_triangle_rows_grow() {
        let p = right_triangle(3);
        assert_eq!(
            pairs(&p),
            vec![(0, 2), (0, 1), (1, 1), (0, 0), (1, 0), (2, 0)]
        );
    }

    #[test]
    fn diamond_on_even_grid() {
        let p = diamond(10, 4);
        // rows from the centre outwards: 8, 6, 4, 2 cells on each side
        assert_eq!(p.len(), 2 * (8 + 6 + 4 + 2));
        assert!(p.iter().all(|c| Bounds::square(1, 8).contains(*c)));
    }

    #[test]
    fn diamond_with_huge_radius_covers_grid() {
        assert_eq!(diamond(3, i32::MAX).len(), 9);
        assert!(diamond(3, -1).is_empty());
    }

    #[test]
    fn spiral_first_turns() {
        let p = spiral(Coordinate::new(4, 4), 4);
        assert_eq!(
            pairs(&p),
            vec![(4, 4), (5, 4), (5, 5), (4, 5), (3, 5), (3, 4), (3, 3)]
        );
    }

    #[test]
    fn spiral_without_legs_is_start_only() {
        assert_eq!(pairs(&spiral(Coordinate::new(1, 1), 0)), vec![(1, 1)]);
    }
}
