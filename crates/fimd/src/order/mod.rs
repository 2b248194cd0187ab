//! Evaluation orders for boundary and interior pixels.
//!
//! Purpose
//! - Boundary: a farthest-point (max-min Chebyshev) traversal over one
//!   quadrant of the boundary, each anchor expanded to its quarter-turn
//!   images. An early-exiting detector then sees spatially spread samples
//!   first.
//! - Interior: one representative per point-reflection pair, sorted by
//!   `(row, col)`, independent of generation order.
//!
//! Both operate on origin-centered sets as returned by
//! `raster::rasterize_circle(r, Pixel::ORIGIN)`.

mod search;

use crate::error::PlanError;
use crate::pixel::Pixel;

use search::FarthestPointSearch;

/// Reorder a boundary set into evaluation order.
///
/// The result is a permutation of `boundary` starting with its first pixel.
/// Errors if the input is not a complete, origin-centered boundary set.
pub fn plan_evaluation_order(boundary: &[Pixel]) -> Result<Vec<Pixel>, PlanError> {
    Ok(FarthestPointSearch::new(boundary)?.run()?.order)
}

/// As `plan_evaluation_order`, additionally requiring the boundary's largest
/// row to equal `expected_radius`.
pub fn plan_evaluation_order_for(
    boundary: &[Pixel],
    expected_radius: i32,
) -> Result<Vec<Pixel>, PlanError> {
    let search = FarthestPointSearch::new(boundary)?;
    if search.radius() != expected_radius {
        return Err(PlanError::RadiusMismatch {
            expected: expected_radius,
            found: search.radius(),
        });
    }
    Ok(search.run()?.order)
}

/// Quadrant anchors in the order the farthest-point search selects them.
pub fn quadrant_anchors(boundary: &[Pixel]) -> Result<Vec<Pixel>, PlanError> {
    Ok(FarthestPointSearch::new(boundary)?.run()?.anchors)
}

/// Keep pixels with `row > 0`, or `row == 0` and `col >= 0`, sorted by
/// `(row, col)` without repeats.
pub fn canonicalize_interior(interior: &[Pixel]) -> Vec<Pixel> {
    let mut out: Vec<Pixel> = interior
        .iter()
        .copied()
        .filter(|p| p.in_upper_half())
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

#[cfg(test)]
mod tests;
