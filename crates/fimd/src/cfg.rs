//! Fixed limits (internal policy).
//!
//! Policy
//! - Defaults are constants rather than runtime knobs; detectors are
//!   generated for a handful of small radii and never need tuning here.

/// Largest accepted radius. The interior set grows as `~πr²`, and the
/// midpoint decision variable stays far inside `i32` below this bound.
pub const MAX_RADIUS: i32 = 1024;

/// Cell marker for a coordinate claimed twice in a diagnostic rendering.
pub const COLLISION_MARK: char = '?';

/// Widest grid the visualizer draws along either axis: the diameter of the
/// largest accepted circle.
pub const MAX_GRID_SPAN: u64 = 2 * MAX_RADIUS as u64 + 1;
