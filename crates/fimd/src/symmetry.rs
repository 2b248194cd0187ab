//! Symmetry images of a pixel under the circle's reflections and rotations.
//!
//! Both the rasterizer and the planner expand one representative pixel into
//! its full-circle images. The patterns form a small closed set:
//!
//! - `point_pair`: `p` and its point reflection `-p` (one pixel at the origin).
//! - `octant_images`: the up-to-8 images of an octant pixel `0 <= col <= row`,
//!   emitted as point pairs in boundary rasterization order.
//! - `band_images`: the same 8 images in interior rasterization order, which
//!   walks the quadrants instead of pairing reflections.
//! - `quarter_turn_images`: the up-to-4 images of a quadrant pixel under the
//!   quarter-turn group, emitted in evaluation order.
//!
//! Images on an axis or on a diagonal are emitted once; no pattern ever
//! yields the same coordinate twice.

use std::ops::Deref;

use crate::pixel::Pixel;

/// Upper bound of distinct images (dihedral group of the square).
pub const MAX_IMAGES: usize = 8;

/// Small owned list of symmetry images, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Images {
    buf: [Pixel; MAX_IMAGES],
    len: usize,
}

impl Images {
    #[inline]
    fn new() -> Self {
        Self {
            buf: [Pixel::ORIGIN; MAX_IMAGES],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, p: Pixel) {
        debug_assert!(self.len < MAX_IMAGES);
        self.buf[self.len] = p;
        self.len += 1;
    }

    #[inline]
    fn extend(&mut self, other: Images) {
        for &p in other.iter() {
            self.push(p);
        }
    }
}

impl Deref for Images {
    type Target = [Pixel];
    #[inline]
    fn deref(&self) -> &[Pixel] {
        &self.buf[..self.len]
    }
}

impl<'a> IntoIterator for &'a Images {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `[p, -p]`, or `[p]` when `p` is the origin.
#[inline]
pub fn point_pair(p: Pixel) -> Images {
    let mut out = Images::new();
    out.push(p);
    if p != Pixel::ORIGIN {
        out.push(-p);
    }
    out
}

/// Images of the octant pixel `(row, col)` with `0 <= col <= row`.
///
/// Order: `(row, -col)` pair, then `(col, -row)` pair unless on the
/// diagonal, then `(row, col)` pair unless on the vertical axis, then
/// `(col, row)` pair unless on the axis or the diagonal. Yields 1 pixel for
/// the origin, 4 on an axis or diagonal, 8 otherwise.
pub fn octant_images(row: i32, col: i32) -> Images {
    debug_assert!(0 <= col && col <= row);
    let off_diagonal = col < row;
    let off_axis = col > 0;
    let mut out = point_pair(Pixel::new(row, -col));
    if off_diagonal {
        out.extend(point_pair(Pixel::new(col, -row)));
    }
    if off_axis {
        out.extend(point_pair(Pixel::new(row, col)));
        if off_diagonal {
            out.extend(point_pair(Pixel::new(col, row)));
        }
    }
    out
}

/// Images of the interior band pixel `(row, col)` with `0 <= col <= row`.
///
/// Order: `(row, col)`, then `(col, row), (col, -row)` unless on the
/// diagonal, then `(-row, col)` unless at the origin, then for `col > 0` the
/// left half `(row, -col), (-row, -col)` followed by `(-col, row), (-col, -row)`
/// unless on the diagonal.
pub fn band_images(row: i32, col: i32) -> Images {
    debug_assert!(0 <= col && col <= row);
    let off_diagonal = col < row;
    let mut out = Images::new();
    out.push(Pixel::new(row, col));
    if off_diagonal {
        out.push(Pixel::new(col, row));
        out.push(Pixel::new(col, -row));
    }
    if row > 0 {
        out.push(Pixel::new(-row, col));
    }
    if col > 0 {
        out.push(Pixel::new(row, -col));
        out.push(Pixel::new(-row, -col));
        if off_diagonal {
            out.push(Pixel::new(-col, row));
            out.push(Pixel::new(-col, -row));
        }
    }
    out
}

/// Images of the quadrant pixel `q` (`row >= 0`, `col >= 0`) under the
/// quarter-turn group: `q`, `-q`, then the quarter-turned pair led by its
/// upper-half member. For `q = (y, x)` that is `(x, -y), (-x, y)` when
/// `x > 0`, and `(0, y), (0, -y)` on the vertical axis.
pub fn quarter_turn_images(q: Pixel) -> Images {
    let mut out = point_pair(q);
    if q == Pixel::ORIGIN {
        return out;
    }
    let turned = Pixel::new(q.col, -q.row);
    let lead = if turned.in_upper_half() { turned } else { -turned };
    out.extend(point_pair(lead));
    out
}
