use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::geometry::Position;

/// Rejections tolerated before falling back to enumerating the free cells.
pub const MAX_REJECTION_ATTEMPTS: usize = 256;

/// Picks a uniformly random cell that is not a member of `excluded`.
///
/// Returns `None` when `excluded` already covers every cell of the board.
/// Sampling is rejection based; on a crowded board it gives up after
/// [`MAX_REJECTION_ATTEMPTS`] and draws from the list of free cells instead.
#[must_use]
pub fn place_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    excluded: &HashSet<Position>,
) -> Option<Position> {
    let total_cells = bounds.total_cells();
    if total_cells == 0 || occupied_cells(bounds, excluded) >= total_cells {
        return None;
    }

    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !excluded.contains(&candidate) {
            return Some(candidate);
        }
    }

    let candidates = free_cells(bounds, excluded);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Lists every board cell not present in `excluded`, row by row.
#[must_use]
pub fn free_cells(bounds: GridSize, excluded: &HashSet<Position>) -> Vec<Position> {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !excluded.contains(&position) {
                candidates.push(position);
            }
        }
    }

    candidates
}

// Cells outside the board must not count towards saturation.
fn occupied_cells(bounds: GridSize, excluded: &HashSet<Position>) -> usize {
    excluded
        .iter()
        .filter(|position| position.is_within_bounds(bounds))
        .count()
}
