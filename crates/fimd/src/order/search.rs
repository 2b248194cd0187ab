//! Greedy farthest-point search over the boundary's first quadrant.

use std::collections::HashSet;

use crate::error::PlanError;
use crate::pixel::Pixel;
use crate::symmetry::quarter_turn_images;

/// Result of one search: the selected anchors and their expanded images.
#[derive(Clone, Debug)]
pub(super) struct Traversal {
    pub anchors: Vec<Pixel>,
    pub order: Vec<Pixel>,
}

/// Search state: quadrant pixels with a running score each.
///
/// `score[i]` starts at `max(row, radius - col)` and is tightened to the
/// Chebyshev distance of the nearest anchor chosen so far. Chosen anchors
/// are flagged in `exhausted` and their score is pinned to 0.
pub(super) struct FarthestPointSearch<'a> {
    boundary: &'a [Pixel],
    quadrant: Vec<Pixel>,
    radius: i32,
    score: Vec<i32>,
    exhausted: Vec<bool>,
}

impl<'a> FarthestPointSearch<'a> {
    pub(super) fn new(boundary: &'a [Pixel]) -> Result<Self, PlanError> {
        let radius = boundary
            .iter()
            .map(|p| p.row)
            .max()
            .ok_or(PlanError::EmptyBoundary)?;
        let quadrant: Vec<Pixel> = boundary
            .iter()
            .copied()
            .filter(|p| p.in_first_quadrant())
            .collect();
        if quadrant.is_empty() {
            return Err(PlanError::EmptyQuadrant);
        }
        let score = quadrant
            .iter()
            .map(|p| p.row.max(radius - p.col))
            .collect();
        let exhausted = vec![false; quadrant.len()];
        Ok(Self {
            boundary,
            quadrant,
            radius,
            score,
            exhausted,
        })
    }

    #[inline]
    pub(super) fn radius(&self) -> i32 {
        self.radius
    }

    pub(super) fn run(mut self) -> Result<Traversal, PlanError> {
        let expected = self.boundary.len();
        let mut remaining: HashSet<Pixel> = self.boundary.iter().copied().collect();
        let mut anchors = Vec::new();
        let mut order = Vec::with_capacity(expected);
        let mut current = 0;
        loop {
            let anchor = self.quadrant[current];
            for &p in quarter_turn_images(anchor).iter() {
                if !remaining.remove(&p) {
                    return Err(PlanError::UnmatchedImage { pixel: p });
                }
                order.push(p);
            }
            anchors.push(anchor);
            self.exhaust(current);
            if order.len() == expected {
                break;
            }
            current = self.select_next().ok_or(PlanError::Stalled {
                emitted: order.len(),
                expected,
            })?;
        }
        Ok(Traversal { anchors, order })
    }

    /// Retire index `k` and tighten every score against its pixel.
    fn exhaust(&mut self, k: usize) {
        self.exhausted[k] = true;
        self.score[k] = 0;
        let anchor = self.quadrant[k];
        for (s, &p) in self.score.iter_mut().zip(&self.quadrant) {
            *s = (*s).min(p.chebyshev(anchor));
        }
    }

    /// Largest positive score among live indices; ties go to the larger row,
    /// then to the earlier index.
    fn select_next(&self) -> Option<usize> {
        let mut best: Option<(i32, i32, usize)> = None;
        for (i, &p) in self.quadrant.iter().enumerate() {
            let s = self.score[i];
            if self.exhausted[i] || s <= 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((bs, brow, _)) => s > bs || (s == bs && p.row > brow),
            };
            if better {
                best = Some((s, p.row, i));
            }
        }
        best.map(|(_, _, i)| i)
    }
}
