//! Midpoint (Bresenham) circle rasterization with octant symmetry.
//!
//! One octant pixel `(y, x)` with `0 <= x <= y` is computed per step and
//! expanded to its full-circle images. The same step sweeps the interior
//! band `x <= y_i < y` of that column and expands each band pixel through
//! `band_images`, so boundary and interior come out of a single integer-only
//! loop.
//!
//! Generation order is deterministic but not spatially meaningful; callers
//! reorder it with `order::plan_evaluation_order` and
//! `order::canonicalize_interior`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cfg::MAX_RADIUS;
use crate::error::{PixelSet, RasterError};
use crate::pixel::Pixel;
use crate::symmetry::{band_images, octant_images};

/// Boundary and interior pixels of a digital circle, in generation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raster {
    pub radius: i32,
    pub center: Pixel,
    pub boundary: Vec<Pixel>,
    pub interior: Vec<Pixel>,
}

/// Rasterize the circle of `radius` around `center`.
///
/// `r = 0` yields the single boundary pixel `center` and no interior.
/// Errors on a negative or oversized radius, on a center too close to the
/// `i32` limits to hold the whole circle, and if a coordinate is ever
/// generated twice (which would be a defect of the stepping rule).
pub fn rasterize_circle(radius: i32, center: Pixel) -> Result<Raster, RasterError> {
    if radius < 0 {
        return Err(RasterError::NegativeRadius { radius });
    }
    if radius > MAX_RADIUS {
        return Err(RasterError::RadiusTooLarge {
            radius,
            max: MAX_RADIUS,
        });
    }
    if !fits_around(center.row, radius) || !fits_around(center.col, radius) {
        return Err(RasterError::CenterOutOfRange { center, radius });
    }

    let r = radius as usize;
    let mut boundary = Vec::with_capacity(8 * (r + 1));
    let mut interior = Vec::with_capacity(4 * r * r);

    let (mut x, mut y) = (0i32, radius);
    let mut decision = 3 - 2 * radius;
    while x <= y {
        boundary.extend(octant_images(y, x).iter().map(|&p| p + center));
        for y_i in x..y {
            interior.extend(band_images(y_i, x).iter().map(|&p| p + center));
        }
        x += 1;
        if decision < 0 {
            decision += 4 * x + 6;
        } else {
            y -= 1;
            decision += 4 * (x - y) + 10;
        }
    }

    ensure_unique(&boundary, PixelSet::Boundary)?;
    ensure_unique(&interior, PixelSet::Interior)?;
    Ok(Raster {
        radius,
        center,
        boundary,
        interior,
    })
}

#[inline]
fn fits_around(c: i32, radius: i32) -> bool {
    c.checked_sub(radius).is_some() && c.checked_add(radius).is_some()
}

/// Report the first coordinate that appears twice in `pixels`.
pub fn ensure_unique(pixels: &[Pixel], set: PixelSet) -> Result<(), RasterError> {
    let mut seen = HashSet::with_capacity(pixels.len());
    for &pixel in pixels {
        if !seen.insert(pixel) {
            return Err(RasterError::DuplicatePixel { set, pixel });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::pixels;
    use std::collections::BTreeSet;

    fn as_set(v: &[Pixel]) -> BTreeSet<Pixel> {
        v.iter().copied().collect()
    }

    #[test]
    fn radius_zero_is_the_center() {
        let r = rasterize_circle(0, Pixel::ORIGIN).unwrap();
        assert_eq!(r.boundary, vec![Pixel::ORIGIN]);
        assert!(r.interior.is_empty());
    }

    #[test]
    fn radius_one_exact_generation_order() {
        let r = rasterize_circle(1, Pixel::ORIGIN).unwrap();
        assert_eq!(r.boundary, pixels(&[(1, 0), (-1, 0), (0, -1), (0, 1)]));
        assert_eq!(r.interior, vec![Pixel::ORIGIN]);
    }

    #[test]
    fn radius_two_boundary_and_interior_order() {
        let r = rasterize_circle(2, Pixel::ORIGIN).unwrap();
        assert_eq!(
            r.boundary,
            pixels(&[
                (2, 0),
                (-2, 0),
                (0, -2),
                (0, 2),
                (2, -1),
                (-2, 1),
                (1, -2),
                (-1, 2),
                (2, 1),
                (-2, -1),
                (1, 2),
                (-1, -2),
            ])
        );
        assert_eq!(
            r.interior,
            pixels(&[
                (0, 0),
                (1, 0),
                (0, 1),
                (0, -1),
                (-1, 0),
                (1, 1),
                (-1, 1),
                (1, -1),
                (-1, -1),
            ])
        );
    }

    #[test]
    fn radius_three_interior_order() {
        let r = rasterize_circle(3, Pixel::ORIGIN).unwrap();
        assert_eq!(
            r.interior,
            pixels(&[
                (0, 0),
                (1, 0),
                (0, 1),
                (0, -1),
                (-1, 0),
                (2, 0),
                (0, 2),
                (0, -2),
                (-2, 0),
                (1, 1),
                (-1, 1),
                (1, -1),
                (-1, -1),
                (2, 1),
                (1, 2),
                (1, -2),
                (-2, 1),
                (2, -1),
                (-2, -1),
                (-1, 2),
                (-1, -2),
            ])
        );
    }

    #[test]
    fn known_counts() {
        for (radius, n_boundary, n_interior) in [
            (3, 16, 21),
            (4, 20, 37),
            (5, 24, 57),
            (10, 52, 269),
            (50, 276, 7581),
            (100, 560, 30873),
        ] {
            let r = rasterize_circle(radius, Pixel::ORIGIN).unwrap();
            assert_eq!(r.boundary.len(), n_boundary, "boundary r={radius}");
            assert_eq!(r.interior.len(), n_interior, "interior r={radius}");
        }
    }

    #[test]
    fn boundary_and_interior_are_disjoint() {
        for radius in 0..40 {
            let r = rasterize_circle(radius, Pixel::ORIGIN).unwrap();
            let b = as_set(&r.boundary);
            assert!(r.interior.iter().all(|p| !b.contains(p)), "r={radius}");
        }
    }

    #[test]
    fn interior_lies_strictly_inside_the_radius() {
        for radius in 1..40 {
            let r = rasterize_circle(radius, Pixel::ORIGIN).unwrap();
            for p in &r.interior {
                assert!(p.row * p.row + p.col * p.col < radius * radius, "{p} r={radius}");
            }
        }
    }

    #[test]
    fn center_offset_shifts_every_pixel() {
        let c = Pixel::new(3, 5);
        let base = rasterize_circle(4, Pixel::ORIGIN).unwrap();
        let moved = rasterize_circle(4, c).unwrap();
        assert_eq!(moved.center, c);
        let shifted: Vec<Pixel> = base.boundary.iter().map(|&p| p + c).collect();
        assert_eq!(moved.boundary, shifted);
        let shifted: Vec<Pixel> = base.interior.iter().map(|&p| p + c).collect();
        assert_eq!(moved.interior, shifted);
    }

    #[test]
    fn rejects_out_of_range_radius() {
        assert_eq!(
            rasterize_circle(-1, Pixel::ORIGIN),
            Err(RasterError::NegativeRadius { radius: -1 })
        );
        assert!(matches!(
            rasterize_circle(MAX_RADIUS + 1, Pixel::ORIGIN),
            Err(RasterError::RadiusTooLarge { .. })
        ));
    }

    #[test]
    fn center_near_the_integer_limits_is_rejected() {
        for center in [
            Pixel::new(i32::MAX - 1, 0),
            Pixel::new(0, i32::MIN + 1),
            Pixel::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(
                rasterize_circle(3, center),
                Err(RasterError::CenterOutOfRange { center, radius: 3 })
            );
        }
        // The last representable ring still fits.
        let c = Pixel::new(i32::MAX - 3, i32::MIN + 3);
        let r = rasterize_circle(3, c).unwrap();
        assert!(r.boundary.contains(&Pixel::new(i32::MAX, i32::MIN + 3)));
        assert!(rasterize_circle(0, Pixel::new(i32::MAX, i32::MIN)).is_ok());
    }

    #[test]
    fn duplicate_is_reported_with_its_set() {
        let v = pixels(&[(1, 0), (0, 1), (1, 0)]);
        assert_eq!(
            ensure_unique(&v, PixelSet::Interior),
            Err(RasterError::DuplicatePixel {
                set: PixelSet::Interior,
                pixel: Pixel::new(1, 0)
            })
        );
        assert!(ensure_unique(&v[..2], PixelSet::Boundary).is_ok());
    }
}
