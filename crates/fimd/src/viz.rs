//! ASCII rendering of pixel sequences for terminal inspection.
//!
//! Each occupied cell shows the 1-based position of its pixel in the
//! sequence (`B<n>` boundary, `I<n>` interior), zero-padded to a common
//! width. A coordinate claimed twice is drawn as `?` and counted, so a
//! duplicate surfaced from the rasterizer stays visible instead of being
//! overwritten.
//!
//! Input may be any pixel sequence; grids wider or taller than
//! `cfg::MAX_GRID_SPAN` cells are refused with `VizError::GridTooLarge`.

use nalgebra::DMatrix;

use crate::cfg::{COLLISION_MARK, MAX_GRID_SPAN};
use crate::error::VizError;
use crate::pixel::Pixel;

#[derive(Clone, Debug, PartialEq)]
enum Cell {
    Empty,
    Boundary(usize),
    Interior(usize),
    Collision,
}

/// Rendered grid plus the number of colliding placements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendering {
    pub text: String,
    pub collisions: usize,
}

/// Render `boundary` and `interior` on one grid spanning both sets.
pub fn render_ascii(boundary: &[Pixel], interior: &[Pixel]) -> Result<Rendering, VizError> {
    let Some((lo, hi)) = extents(boundary.iter().chain(interior)) else {
        return Ok(Rendering {
            text: String::new(),
            collisions: 0,
        });
    };
    let rows = span(lo.row, hi.row);
    let cols = span(lo.col, hi.col);
    if rows > MAX_GRID_SPAN || cols > MAX_GRID_SPAN {
        return Err(VizError::GridTooLarge {
            rows,
            cols,
            max: MAX_GRID_SPAN,
        });
    }
    let (nrows, ncols) = (rows as usize, cols as usize);
    let mut grid = DMatrix::from_element(nrows, ncols, Cell::Empty);
    let mut collisions = 0;

    let labelled = boundary
        .iter()
        .enumerate()
        .map(|(i, &p)| (p, Cell::Boundary(i + 1)))
        .chain(
            interior
                .iter()
                .enumerate()
                .map(|(i, &p)| (p, Cell::Interior(i + 1))),
        );
    for (p, cell) in labelled {
        let at = (offset(lo.row, p.row), offset(lo.col, p.col));
        if grid[at] == Cell::Empty {
            grid[at] = cell;
        } else {
            grid[at] = Cell::Collision;
            collisions += 1;
        }
    }

    let digits = digit_count(boundary.len().max(interior.len()));
    let mut text = String::new();
    for r in 0..grid.nrows() {
        let line: Vec<String> = (0..grid.ncols())
            .map(|c| format_cell(&grid[(r, c)], digits))
            .collect();
        text.push_str(line.join(" ").trim_end());
        text.push('\n');
    }
    Ok(Rendering { text, collisions })
}

/// Cells covered by `lo..=hi`; never overflows.
#[inline]
fn span(lo: i32, hi: i32) -> u64 {
    (i64::from(hi) - i64::from(lo) + 1) as u64
}

#[inline]
fn offset(lo: i32, v: i32) -> usize {
    (i64::from(v) - i64::from(lo)) as usize
}

fn extents<'a>(mut pixels: impl Iterator<Item = &'a Pixel>) -> Option<(Pixel, Pixel)> {
    let first = *pixels.next()?;
    Some(pixels.fold((first, first), |(lo, hi), p| {
        (
            Pixel::new(lo.row.min(p.row), lo.col.min(p.col)),
            Pixel::new(hi.row.max(p.row), hi.col.max(p.col)),
        )
    }))
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 0;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn format_cell(cell: &Cell, digits: usize) -> String {
    match cell {
        Cell::Empty => " ".repeat(digits + 1),
        Cell::Boundary(n) => format!("B{n:0digits$}"),
        Cell::Interior(n) => format!("I{n:0digits$}"),
        Cell::Collision => COLLISION_MARK.to_string().repeat(digits + 1),
    }
}
