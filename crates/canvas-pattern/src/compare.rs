//! Scoring a drawn pattern against a challenge target

use crate::pattern::Pattern;

/// Points deducted per cell beyond the target length
const EXTRA_CELL_PENALTY: f64 = 2.0;

/// Cap on the extra-cell penalty
const MAX_PENALTY: f64 = 20.0;

/// Exact match: same length and the same set of cells, in any order
#[must_use]
pub fn patterns_match(user: &Pattern, target: &Pattern) -> bool {
    user.len() == target.len() && user.cells() == target.cells()
}

/// Percentage of the target covered by `user`, in `[0, 100]`
///
/// Distinct user cells found in the target count towards coverage. Each cell
/// beyond the target length costs two points, capped at twenty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn match_percentage(user: &Pattern, target: &Pattern) -> f64 {
    if target.is_empty() {
        return 0.0;
    }

    let target_cells = target.cells();
    let hits = user
        .cells()
        .iter()
        .filter(|c| target_cells.contains(*c))
        .count();

    let coverage = hits as f64 / target.len() as f64 * 100.0;
    let extra = user.len().saturating_sub(target.len());
    let penalty = (extra as f64 * EXTRA_CELL_PENALTY).min(MAX_PENALTY);

    (coverage - penalty).clamp(0.0, 100.0)
}
