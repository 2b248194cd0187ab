//! Pixel sets and evaluation orders for fixed-radius circle detectors.
//!
//! A detector for radius `r` compares a center pixel against the pixels of
//! the digital circle around it and clears the enclosed pixels on a hit.
//! This crate computes those pixel sets and the orders they are visited in:
//!
//! - `raster`: integer midpoint rasterization of boundary and interior.
//! - `order`: farthest-point evaluation order for the boundary and the
//!   canonical (one-per-pair, sorted) interior list.
//! - `viz`: ASCII grids for diagnostics.
//!
//! Everything here is a pure, deterministic function of the radius. Code
//! emission lives in the `cli` crate.

pub mod cfg;
mod error;
pub mod order;
pub mod pixel;
pub mod raster;
pub mod symmetry;
pub mod viz;

pub use error::{FimdError, PixelSet, PlanError, RasterError, VizError};
pub use order::{
    canonicalize_interior, plan_evaluation_order, plan_evaluation_order_for, quadrant_anchors,
};
pub use pixel::Pixel;
pub use raster::{rasterize_circle, Raster};

use serde::{Deserialize, Serialize};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The three values handed to code emission, consistent by construction:
/// the boundary in evaluation order and the canonical interior for `radius`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub radius: i32,
    pub boundary: Vec<Pixel>,
    pub interior: Vec<Pixel>,
}

impl Plan {
    /// Derive both orders from an origin-centered raster.
    pub fn from_raster(raster: &Raster) -> Result<Self, PlanError> {
        let boundary = plan_evaluation_order_for(&raster.boundary, raster.radius)?;
        let interior = canonicalize_interior(&raster.interior);
        Ok(Self {
            radius: raster.radius,
            boundary,
            interior,
        })
    }
}

/// Rasterize around the origin and derive both evaluation orders.
pub fn plan(radius: i32) -> Result<Plan, FimdError> {
    let raster = rasterize_circle(radius, Pixel::ORIGIN)?;
    Ok(Plan::from_raster(&raster)?)
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::order::{canonicalize_interior, plan_evaluation_order, quadrant_anchors};
    pub use crate::raster::{rasterize_circle, Raster};
    pub use crate::viz::{render_ascii, Rendering};
    pub use crate::{plan, FimdError, Pixel, Plan, PlanError, RasterError, VizError};
}
