use super::*;
use crate::pixel::pixels;
use crate::raster::rasterize_circle;

fn boundary(radius: i32) -> Vec<Pixel> {
    rasterize_circle(radius, Pixel::ORIGIN).unwrap().boundary
}

fn interior(radius: i32) -> Vec<Pixel> {
    rasterize_circle(radius, Pixel::ORIGIN).unwrap().interior
}

#[test]
fn radius_zero_emits_center_once() {
    assert_eq!(plan_evaluation_order(&boundary(0)).unwrap(), vec![Pixel::ORIGIN]);
    assert!(canonicalize_interior(&interior(0)).is_empty());
}

#[test]
fn radius_one_end_to_end() {
    let b = boundary(1);
    assert_eq!(
        plan_evaluation_order(&b).unwrap(),
        pixels(&[(1, 0), (-1, 0), (0, 1), (0, -1)])
    );
    assert_eq!(canonicalize_interior(&interior(1)), vec![Pixel::ORIGIN]);
}

#[test]
fn small_radii_exact_orders() {
    assert_eq!(
        plan_evaluation_order(&boundary(2)).unwrap(),
        pixels(&[
            (2, 0), (-2, 0), (0, 2), (0, -2),
            (2, 1), (-2, -1), (1, -2), (-1, 2),
            (1, 2), (-1, -2), (2, -1), (-2, 1),
        ])
    );
    assert_eq!(
        plan_evaluation_order(&boundary(3)).unwrap(),
        pixels(&[
            (3, 0), (-3, 0), (0, 3), (0, -3),
            (2, 2), (-2, -2), (2, -2), (-2, 2),
            (3, 1), (-3, -1), (1, -3), (-1, 3),
            (1, 3), (-1, -3), (3, -1), (-3, 1),
        ])
    );
    assert_eq!(
        plan_evaluation_order(&boundary(4)).unwrap(),
        pixels(&[
            (4, 0), (-4, 0), (0, 4), (0, -4),
            (3, 2), (-3, -2), (2, -3), (-2, 3),
            (4, 1), (-4, -1), (1, -4), (-1, 4),
            (2, 3), (-2, -3), (3, -2), (-3, 2),
            (1, 4), (-1, -4), (4, -1), (-4, 1),
        ])
    );
}

#[test]
fn larger_radii_order_prefixes() {
    let cases: [(i32, [(i32, i32); 8]); 3] = [
        (5, [(5, 0), (-5, 0), (0, 5), (0, -5), (3, 3), (-3, -3), (3, -3), (-3, 3)]),
        (10, [(10, 0), (-10, 0), (0, 10), (0, -10), (7, 6), (-7, -6), (6, -7), (-6, 7)]),
        (50, [(50, 0), (-50, 0), (0, 50), (0, -50), (35, 34), (-35, -34), (34, -35), (-34, 35)]),
    ];
    for (radius, prefix) in cases {
        let order = plan_evaluation_order(&boundary(radius)).unwrap();
        assert_eq!(&order[..8], &pixels(&prefix)[..], "r={radius}");
    }
    let order = plan_evaluation_order(&boundary(100)).unwrap();
    assert_eq!(
        &order[8..12],
        &pixels(&[(93, 35), (-93, -35), (35, -93), (-35, 93)])[..]
    );
}

#[test]
fn anchors_for_radius_three() {
    assert_eq!(
        quadrant_anchors(&boundary(3)).unwrap(),
        pixels(&[(3, 0), (2, 2), (3, 1), (1, 3)])
    );
}

#[test]
fn order_starts_at_first_generated_pixel() {
    for radius in 0..30 {
        let b = boundary(radius);
        assert_eq!(plan_evaluation_order(&b).unwrap()[0], b[0], "r={radius}");
    }
}

#[test]
fn canonical_interior_small_radii() {
    assert_eq!(
        canonicalize_interior(&interior(2)),
        pixels(&[(0, 0), (0, 1), (1, -1), (1, 0), (1, 1)])
    );
    assert_eq!(
        canonicalize_interior(&interior(3)),
        pixels(&[
            (0, 0), (0, 1), (0, 2),
            (1, -2), (1, -1), (1, 0), (1, 1), (1, 2),
            (2, -1), (2, 0), (2, 1),
        ])
    );
    for (radius, n) in [(5, 29), (10, 135), (50, 3791), (100, 15437)] {
        assert_eq!(canonicalize_interior(&interior(radius)).len(), n, "r={radius}");
    }
}

#[test]
fn canonical_interior_ignores_generation_order() {
    let mut shuffled = interior(6);
    shuffled.reverse();
    assert_eq!(canonicalize_interior(&shuffled), canonicalize_interior(&interior(6)));
}

#[test]
fn expected_radius_is_checked() {
    let b = boundary(4);
    assert!(plan_evaluation_order_for(&b, 4).is_ok());
    assert_eq!(
        plan_evaluation_order_for(&b, 5),
        Err(PlanError::RadiusMismatch {
            expected: 5,
            found: 4
        })
    );
}

#[test]
fn malformed_inputs_are_rejected() {
    assert_eq!(plan_evaluation_order(&[]), Err(PlanError::EmptyBoundary));
    assert_eq!(
        plan_evaluation_order(&pixels(&[(-1, 0), (-2, 3)])),
        Err(PlanError::EmptyQuadrant)
    );

    // Drop one image: the expansion of its anchor no longer matches.
    let mut b = boundary(5);
    let dropped = b.remove(5);
    assert_eq!(
        plan_evaluation_order(&b),
        Err(PlanError::UnmatchedImage { pixel: dropped })
    );

    // A stray pixel outside every quadrant orbit: anchors run out first.
    let mut b = boundary(3);
    b.push(Pixel::new(-7, -7));
    assert!(matches!(
        plan_evaluation_order(&b),
        Err(PlanError::Stalled { emitted: 16, expected: 17 })
    ));
}
