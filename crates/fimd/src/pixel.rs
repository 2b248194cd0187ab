//! Integer pixel offsets.
//!
//! A `Pixel` is a `(row, col)` offset from an implicit center. Ordering is
//! lexicographic by `(row, col)`, which is the order the canonical interior
//! list is sorted in.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Integer `(row, col)` offset. Immutable value type.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pixel {
    pub row: i32,
    pub col: i32,
}

impl Pixel {
    pub const ORIGIN: Pixel = Pixel { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance `max(|Δrow|, |Δcol|)`.
    #[inline]
    pub fn chebyshev(self, other: Pixel) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// True for pixels with `row >= 0` and `col >= 0`.
    #[inline]
    pub fn in_first_quadrant(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    /// Representative half-plane used to canonicalize point-symmetric sets:
    /// `row > 0`, or `row == 0` and `col >= 0`.
    #[inline]
    pub fn in_upper_half(self) -> bool {
        self.row > 0 || (self.row == 0 && self.col >= 0)
    }
}

impl Neg for Pixel {
    type Output = Pixel;
    #[inline]
    fn neg(self) -> Pixel {
        Pixel::new(-self.row, -self.col)
    }
}

impl Add for Pixel {
    type Output = Pixel;
    #[inline]
    fn add(self, rhs: Pixel) -> Pixel {
        Pixel::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pixel {
    type Output = Pixel;
    #[inline]
    fn sub(self, rhs: Pixel) -> Pixel {
        Pixel::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Pixel {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Pixel::new(row, col)
    }
}

impl From<Pixel> for (i32, i32) {
    #[inline]
    fn from(p: Pixel) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Convert a slice of `(row, col)` tuples; handy in tests and callers that
/// keep plain tuples around.
pub fn pixels(coords: &[(i32, i32)]) -> Vec<Pixel> {
    coords.iter().copied().map(Pixel::from).collect()
}
