//! Behavioral properties of polygon clipping across a set of fixtures.

use approx::assert_relative_eq;
use weiler_clip::io::parse_svg_polygon;
use weiler_clip::{clip_polygons, try_clip_polygons, ClipOptions, Point2, Polygon};

fn poly(coords: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

fn svg(d: &str) -> Polygon<f64> {
    parse_svg_polygon(d).unwrap()
}

fn square(min: f64, max: f64) -> Polygon<f64> {
    poly(&[(min, min), (max, min), (max, max), (min, max)])
}

fn u_shape() -> Polygon<f64> {
    svg("M 0 0 H 6 V 6 H 4 V 2 H 2 V 6 H 0 Z")
}

fn bar() -> Polygon<f64> {
    svg("M -1 3 H 7 V 5 H -1 Z")
}

fn diamond() -> Polygon<f64> {
    poly(&[(2.0, -1.0), (5.0, 2.0), (2.0, 5.0), (-1.0, 2.0)])
}

fn comb() -> Polygon<f64> {
    svg("M 0 0 H 6 V 5 H 5 V 1 H 4 V 5 H 3 V 1 H 2 V 5 H 1 V 1 H 0 Z")
}

fn wedge() -> Polygon<f64> {
    poly(&[(-0.5, 2.0), (6.5, 2.0), (3.0, 6.0)])
}

fn slanted_triangle() -> Polygon<f64> {
    poly(&[(-1.0, 0.3), (5.0, 1.7), (1.2, 5.9)])
}

/// Pairs whose boundaries properly cross.
fn crossing_pairs() -> Vec<(&'static str, Polygon<f64>, Polygon<f64>)> {
    vec![
        ("squares", square(0.0, 4.0), square(2.0, 6.0)),
        ("u_and_bar", u_shape(), bar()),
        ("diamond_and_square", diamond(), square(0.0, 4.0)),
        ("comb_and_wedge", comb(), wedge()),
        ("slanted_triangle_and_square", slanted_triangle(), square(0.0, 4.0)),
    ]
}

fn total_area(polygons: &[Polygon<f64>]) -> f64 {
    polygons.iter().map(|p| p.area()).sum()
}

/// True if `ring` equals `expected` up to the choice of starting vertex.
fn same_ring(ring: &Polygon<f64>, expected: &[(f64, f64)], eps: f64) -> bool {
    let n = expected.len();
    if ring.len() != n {
        return false;
    }
    (0..n).any(|shift| {
        ring.vertices.iter().enumerate().all(|(i, p)| {
            let (x, y) = expected[(i + shift) % n];
            p.approx_eq(Point2::new(x, y), eps)
        })
    })
}

#[test]
fn triangle_inside_square_is_unchanged() {
    let triangle = poly(&[(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)]);
    let result = clip_polygons(&triangle, &square(0.0, 4.0));
    assert_eq!(result, vec![triangle]);
}

#[test]
fn disjoint_polygons_give_nothing() {
    assert!(clip_polygons(&square(0.0, 4.0), &square(10.0, 14.0)).is_empty());
    assert!(clip_polygons(&square(10.0, 14.0), &square(0.0, 4.0)).is_empty());
    assert!(clip_polygons(&diamond(), &square(20.0, 21.0)).is_empty());
}

#[test]
fn overlapping_squares_give_the_shared_square() {
    let result = clip_polygons(&square(0.0, 4.0), &square(2.0, 6.0));
    assert_eq!(result.len(), 1);
    assert!(same_ring(
        &result[0],
        &[(4.0, 2.0), (4.0, 4.0), (2.0, 4.0), (2.0, 2.0)],
        1e-9
    ));
    assert_relative_eq!(result[0].area(), 4.0, epsilon = 1e-9);
}

#[test]
fn bar_across_u_gives_both_arms() {
    let result = clip_polygons(&u_shape(), &bar());
    assert_eq!(result.len(), 2);
    assert!(result.iter().any(|p| same_ring(
        p,
        &[(0.0, 3.0), (2.0, 3.0), (2.0, 5.0), (0.0, 5.0)],
        1e-9
    )));
    assert!(result.iter().any(|p| same_ring(
        p,
        &[(4.0, 3.0), (6.0, 3.0), (6.0, 5.0), (4.0, 5.0)],
        1e-9
    )));
}

#[test]
fn wedge_across_comb_gives_one_piece_per_tooth() {
    let result = clip_polygons(&comb(), &wedge());
    assert_eq!(result.len(), 3);
    assert_relative_eq!(total_area(&result), 719.0 / 112.0, epsilon = 1e-9);
}

#[test]
fn off_grid_crossings_keep_computed_coordinates() {
    let result = clip_polygons(&slanted_triangle(), &square(0.0, 4.0));
    assert_eq!(result.len(), 1);
    // Left-edge crossing of the triangle's base: y = 0.3 + 1.4 / 6.
    let expected = Point2::new(0.0, 0.3 + 1.4 / 6.0);
    assert!(result[0]
        .vertices
        .iter()
        .any(|v| v.approx_eq(expected, 1e-12)));
}

#[test]
fn overlap_area_is_symmetric() {
    for (name, a, b) in crossing_pairs() {
        let ab = total_area(&clip_polygons(&a, &b));
        let ba = total_area(&clip_polygons(&b, &a));
        assert!(ab > 0.0, "{name}: empty overlap");
        assert_relative_eq!(ab, ba, epsilon = 1e-9);
    }
}

#[test]
fn region_count_is_symmetric() {
    for (name, a, b) in crossing_pairs() {
        assert_eq!(
            clip_polygons(&a, &b).len(),
            clip_polygons(&b, &a).len(),
            "{name}"
        );
    }
}

#[test]
fn reclipping_is_idempotent() {
    for (name, subject, clip) in crossing_pairs() {
        let first = clip_polygons(&subject, &clip);
        for piece in &first {
            let again = clip_polygons(piece, &clip);
            assert_eq!(again, vec![piece.clone()], "{name}");
        }
    }
}

#[test]
fn results_lie_inside_both_inputs() {
    for (name, subject, clip) in crossing_pairs() {
        for piece in clip_polygons(&subject, &clip) {
            let c = piece.centroid().unwrap();
            assert!(subject.contains(c), "{name}: centroid outside subject");
            assert!(clip.contains(c), "{name}: centroid outside clip");
        }
    }
}

#[test]
fn results_are_counter_clockwise() {
    for (name, subject, clip) in crossing_pairs() {
        for piece in clip_polygons(&subject.reversed(), &clip.reversed()) {
            assert!(piece.is_ccw(), "{name}");
            assert!(piece.len() >= 3, "{name}");
        }
    }
}

#[test]
fn winding_does_not_change_the_area() {
    for (name, subject, clip) in crossing_pairs() {
        let expected = total_area(&clip_polygons(&subject, &clip));
        let variants = [
            (subject.reversed(), clip.clone()),
            (subject.clone(), clip.reversed()),
            (subject.reversed(), clip.reversed()),
        ];
        for (s, c) in &variants {
            let area = total_area(&clip_polygons(s, c));
            assert!((area - expected).abs() < 1e-9, "{name}: {area} != {expected}");
        }
    }
}

#[test]
fn touching_boundaries_have_no_overlap() {
    let left = square(0.0, 4.0);
    let right = poly(&[(4.0, 0.0), (8.0, 0.0), (8.0, 4.0), (4.0, 4.0)]);
    let corner = square(4.0, 8.0);
    assert!(clip_polygons(&left, &right).is_empty());
    assert!(clip_polygons(&left, &corner).is_empty());
}

#[test]
fn f32_coordinates() {
    let a: Polygon<f32> = Polygon::new(vec![
        Point2::new(2.0, -1.0),
        Point2::new(5.0, 2.0),
        Point2::new(2.0, 5.0),
        Point2::new(-1.0, 2.0),
    ]);
    let b: Polygon<f32> = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 4.0),
        Point2::new(0.0, 4.0),
    ]);
    let result = try_clip_polygons(&a, &b, &ClipOptions::default()).unwrap();
    assert_eq!(result.len(), 1);
    assert_relative_eq!(result[0].area(), 14.0, epsilon = 1e-3);
}
