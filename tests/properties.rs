#![allow(clippy::unwrap_used)]

use euclidean::{
    Bounded, Circle, CircleOptions, Edge, EdgeIntersection, EuclideanError, Inset, Number,
    Point, Rectangle, Shape,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn sample_points() -> Vec<Point> {
    vec![
        Point::new([1, 2]),
        Point::new([-3, 7]),
        Point::new([0.5, -2.25]),
        Point::new([1, 2, 3]),
        Point::new([1_i64 << 40, 0]),
    ]
}

#[test]
fn add_then_subtract_is_identity() {
    init_tracing();
    for p in sample_points() {
        let dim = p.dim().unwrap();
        let q = Point::new((1..=dim).map(|i| i64::try_from(i).unwrap() * 3));
        assert_eq!(p.add(&q).unwrap().sub(&q).unwrap(), p, "{p} + {q} - {q}");
    }
}

#[test]
fn zero_point_is_the_additive_identity() {
    for p in sample_points() {
        assert_eq!(p.add(Point::zero(None)).unwrap(), p);
        assert_eq!(p.sub(Point::zero(None)).unwrap(), p);
    }
}

#[test]
fn mismatched_sizes_fail() {
    let err = Point::new([1, 2]).add([1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, EuclideanError::Geometry(_)));
}

#[test]
fn ints_equal_floats_but_are_not_identical() {
    let ints = Point::new([1, 2]);
    let floats = Point::new([1.0, 2.0]);
    assert_eq!(ints, floats);
    assert!(!ints.identity_equals(&floats));
}

#[test]
fn diameter_circle_bounds() {
    init_tracing();
    let circle = Circle::from_options(CircleOptions::new().center([1, 2]).diameter(4)).unwrap();
    assert_eq!(circle.radius(), Number::Int(2));
    assert_eq!(circle.bounds(), Rectangle::new([-1, 0], [3, 4]).unwrap());
    assert_eq!(circle.min(), [-1, 0]);
    assert_eq!(circle.max(), [3, 4]);
}

#[test]
fn circle_intersections() {
    let c1 = Circle::new([1, 2], 3).unwrap();
    let c2 = Circle::new([3, 0], 3).unwrap();
    let c3 = Circle::new([9, 0], 3).unwrap();
    assert!(c1.intersects_circle(&c2));
    assert!(c2.intersects_circle(&c3));
    assert!(!c1.intersects_circle(&c3));
    assert!(c1.intersects(&Shape::from(c2)).unwrap());
}

#[test]
fn edge_intersections() {
    init_tracing();
    let e = |a: [f64; 2], b: [f64; 2]| Edge::new(a, b).unwrap();
    assert_eq!(
        e([0.0, 0.0], [1.0, 1.0]).intersection(&e([0.0, 1.0], [1.0, 1.0])),
        Some(EdgeIntersection::Point(Point::new([1, 1])))
    );
    assert_eq!(
        e([0.0, 0.0], [2.0, 0.0]).intersection(&e([1.0, 0.0], [3.0, 0.0])),
        Some(EdgeIntersection::Overlap)
    );
    assert_eq!(
        e([0.0, 0.0], [2.0, 0.0]).intersection(&e([3.0, 0.0], [4.0, 0.0])),
        Some(EdgeIntersection::Disjoint)
    );
    assert_eq!(
        e([0.0, 0.0], [1.0, 0.0]).intersection(&e([0.0, 1.0], [1.0, 1.0])),
        None
    );
    assert_eq!(
        e([0.0, 0.0], [2.0, 2.0]).intersection(&e([2.0, 0.0], [0.0, 2.0])),
        Some(EdgeIntersection::Point(Point::new([1, 1])))
    );
}

#[test]
fn intersection_is_symmetric_for_crossings() {
    let a = Edge::new([0, 0], [4, 2]).unwrap();
    let b = Edge::new([0, 2], [4, 0]).unwrap();
    assert_eq!(a.intersection(&b), b.intersection(&a));
    assert_eq!(
        a.intersection(&b),
        Some(EdgeIntersection::Point(Point::new([2, 1])))
    );
}

#[test]
fn rectangle_from_corners() {
    let r = Rectangle::new([1, 2], [3, 4]).unwrap();
    assert_eq!(r.width(), Number::Int(2));
    assert_eq!(r.height(), Number::Int(2));
    assert_eq!(r.center(), [2, 3]);
    assert_eq!(r.edges().len(), 4);
    assert_eq!(r.points().len(), 4);
}

#[test]
fn rectangle_inset() {
    let square = Rectangle::new([0, 0], [10, 10]).unwrap();
    let inset = square.inset(Inset::uniform(1));
    assert_eq!(inset.origin(), [1, 1]);
    assert_eq!(inset.max(), [9, 9]);
}

#[test]
fn bounds_are_idempotent() {
    let rectangles = [
        Rectangle::new([1, 2], [3, 4]).unwrap(),
        Rectangle::new([5, -1], [-2.0, 0.5]).unwrap(),
    ];
    for r in rectangles {
        assert_eq!(r.bounds(), r);
    }
    let circles = [
        Circle::new([1, 2], 3).unwrap(),
        Circle::with_diameter([0.5, 0.5], 3).unwrap(),
    ];
    for c in circles {
        assert_eq!(c.bounds().bounds(), c.bounds());
    }
}

#[test]
fn values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Point>();
    assert_send_sync::<Edge>();
    assert_send_sync::<Circle>();
    assert_send_sync::<Rectangle>();
}
