//! Error types for rasterization and evaluation-order planning.

use std::fmt;

use crate::pixel::Pixel;

/// Which generated set a data-integrity fault was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelSet {
    Boundary,
    Interior,
}

impl fmt::Display for PixelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelSet::Boundary => f.write_str("boundary"),
            PixelSet::Interior => f.write_str("interior"),
        }
    }
}

/// Errors surfaced by `rasterize_circle`.
#[derive(Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Radius below zero; the circle is undefined.
    NegativeRadius { radius: i32 },
    /// Radius above `cfg::MAX_RADIUS`.
    RadiusTooLarge { radius: i32, max: i32 },
    /// `center ± radius` leaves the `i32` coordinate range.
    CenterOutOfRange { center: Pixel, radius: i32 },
    /// Two generation steps produced the same coordinate (internal defect).
    DuplicatePixel { set: PixelSet, pixel: Pixel },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::NegativeRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            RasterError::RadiusTooLarge { radius, max } => {
                write!(f, "radius {radius} exceeds the supported maximum {max}")
            }
            RasterError::CenterOutOfRange { center, radius } => write!(
                f,
                "circle of radius {radius} around {center} leaves the i32 coordinate range"
            ),
            RasterError::DuplicatePixel { set, pixel } => write!(
                f,
                "{set} pixel {pixel} was generated twice (rasterizer invariant violated)"
            ),
        }
    }
}

impl std::error::Error for RasterError {}

/// The ASCII grid spanned by the rendered pixels is too large to draw.
#[derive(Debug, PartialEq, Eq)]
pub enum VizError {
    GridTooLarge { rows: u64, cols: u64, max: u64 },
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::GridTooLarge { rows, cols, max } => write!(
                f,
                "grid of {rows} x {cols} cells exceeds the drawable span {max}"
            ),
        }
    }
}

impl std::error::Error for VizError {}

/// Errors surfaced by the evaluation-order planner when its input is not a
/// complete, origin-centered boundary set.
#[derive(Debug, PartialEq, Eq)]
pub enum PlanError {
    EmptyBoundary,
    /// No boundary pixel with `row >= 0` and `col >= 0`.
    EmptyQuadrant,
    /// Largest row of the boundary differs from the caller's radius.
    RadiusMismatch { expected: i32, found: i32 },
    /// No unvisited anchor remained before every pixel was emitted.
    Stalled { emitted: usize, expected: usize },
    /// Symmetry expansion produced a pixel that is not (or no longer) in
    /// the boundary set.
    UnmatchedImage { pixel: Pixel },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::EmptyBoundary => f.write_str("boundary set is empty"),
            PlanError::EmptyQuadrant => {
                f.write_str("boundary set has no pixel with row >= 0 and col >= 0")
            }
            PlanError::RadiusMismatch { expected, found } => write!(
                f,
                "boundary radius {found} does not match expected radius {expected}"
            ),
            PlanError::Stalled { emitted, expected } => write!(
                f,
                "farthest-point search stalled after {emitted} of {expected} pixels (incomplete boundary set)"
            ),
            PlanError::UnmatchedImage { pixel } => write!(
                f,
                "symmetry image {pixel} is missing from the boundary set or was emitted twice"
            ),
        }
    }
}

impl std::error::Error for PlanError {}

/// Error of the combined `plan` pipeline.
#[derive(Debug, PartialEq, Eq)]
pub enum FimdError {
    Raster(RasterError),
    Plan(PlanError),
}

impl fmt::Display for FimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FimdError::Raster(e) => write!(f, "rasterization failed: {e}"),
            FimdError::Plan(e) => write!(f, "evaluation-order planning failed: {e}"),
        }
    }
}

impl std::error::Error for FimdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FimdError::Raster(e) => Some(e),
            FimdError::Plan(e) => Some(e),
        }
    }
}

impl From<RasterError> for FimdError {
    fn from(e: RasterError) -> Self {
        FimdError::Raster(e)
    }
}

impl From<PlanError> for FimdError {
    fn from(e: PlanError) -> Self {
        FimdError::Plan(e)
    }
}
