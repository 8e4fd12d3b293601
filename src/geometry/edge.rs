use std::cmp::Ordering;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{Number, Vector};

use super::Point;

/// Outcome of [`Edge::intersection`] when the segments meet or share a line.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeIntersection {
    /// The segments meet in exactly one point.
    Point(Point),
    /// The segments are collinear and share more than one point.
    Overlap,
    /// The segments are collinear but their spans don't touch.
    Disjoint,
}

/// A directed line segment from `first` to `last`.
///
/// Both endpoints have the same dimension. Queries that reason about the
/// plane (`width`, `height`, [`Edge::cmp_point`], [`Edge::intersection`])
/// use the x and y components.
#[derive(Debug, Clone)]
pub struct Edge {
    first: Vector,
    last: Vector,
}

/// 2D cross product `a.x * b.y - a.y * b.x` over the first two components.
fn perp_dot(a: &Vector, b: &Vector) -> Number {
    a.get_or_zero(0) * b.get_or_zero(1) - a.get_or_zero(1) * b.get_or_zero(0)
}

/// Dot product over the first two components.
fn dot_xy(a: &Vector, b: &Vector) -> Number {
    a.get_or_zero(0) * b.get_or_zero(0) + a.get_or_zero(1) * b.get_or_zero(1)
}

impl Edge {
    /// Creates an edge between two points.
    ///
    /// A zero point endpoint takes the dimension of the other endpoint; two
    /// zero points make a degenerate 2D edge at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the endpoints have
    /// different dimensions.
    pub fn new(first: impl Into<Point>, last: impl Into<Point>) -> Result<Self> {
        let (first, last) = (first.into(), last.into());
        let dim = first.dim().or(last.dim()).unwrap_or(2);
        let (first, last) = (first.coords_or_zero(dim), last.coords_or_zero(dim));
        if first.len() != last.len() {
            return Err(GeometryError::DimensionMismatch {
                expected: first.len(),
                found: last.len(),
            }
            .into());
        }
        Ok(Self { first, last })
    }

    /// Builds an edge from endpoints already known to share a dimension.
    pub(crate) fn from_vectors(first: Vector, last: Vector) -> Self {
        debug_assert_eq!(first.len(), last.len());
        Self { first, last }
    }

    #[must_use]
    pub fn first(&self) -> Point {
        Point::from(self.first.clone())
    }

    #[must_use]
    pub fn last(&self) -> Point {
        Point::from(self.last.clone())
    }

    /// The endpoints in order.
    #[must_use]
    pub fn to_array(&self) -> [Point; 2] {
        [self.first(), self.last()]
    }

    /// The displacement `last - first`.
    #[must_use]
    pub fn vector(&self) -> Vector {
        self.last.zip_with(&self.first, |a, b| a - b)
    }

    /// The unit vector along the edge.
    ///
    /// A zero-length edge has no direction; its components are NaN.
    #[must_use]
    pub fn direction(&self) -> Vector {
        self.vector().normalize()
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> Number {
        (self.last.get_or_zero(0) - self.first.get_or_zero(0)).abs()
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> Number {
        (self.last.get_or_zero(1) - self.first.get_or_zero(1)).abs()
    }

    /// Whether the two edges point along the same line direction, compared
    /// exactly through the cross product of their directions.
    #[must_use]
    pub fn is_parallel(&self, other: &Edge) -> bool {
        self.direction()
            .cross(&other.direction())
            .is_ok_and(|c| c.is_zero())
    }

    /// A copy with the endpoints swapped.
    #[must_use]
    pub fn reverse(&self) -> Edge {
        Self {
            first: self.last.clone(),
            last: self.first.clone(),
        }
    }

    /// Swaps the endpoints in place.
    pub fn reverse_in_place(&mut self) {
        std::mem::swap(&mut self.first, &mut self.last);
    }

    /// Orders a point against the edge.
    ///
    /// Returns `None` when the point falls outside the closed bounding box
    /// of the edge. Otherwise returns the side of the directed line the
    /// point lies on: `Less` to the right, `Greater` to the left, `Equal` on
    /// the line. Reversing the edge flips the sign.
    #[must_use]
    pub fn cmp_point(&self, point: &Point) -> Option<Ordering> {
        let p = point.coords_or_zero(self.first.len());
        if p.len() != self.first.len() {
            return None;
        }
        let within = |axis: usize| {
            let (a, b) = (self.first.get_or_zero(axis), self.last.get_or_zero(axis));
            let c = p.get_or_zero(axis);
            a.min(b) <= c && c <= a.max(b)
        };
        if !(within(0) && within(1)) {
            return None;
        }
        let offset = p.zip_with(&self.first, |a, b| a - b);
        perp_dot(&self.vector(), &offset).partial_cmp(&Number::ZERO)
    }

    /// Whether `point` lies on the closed segment.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.cmp_point(point) == Some(Ordering::Equal)
    }

    /// Intersects two segments in the x/y plane.
    ///
    /// - `Some(Point)` when they cross or touch at a single point, including
    ///   collinear segments that share only an endpoint.
    /// - `Some(Overlap)` when they are collinear and share a stretch.
    /// - `Some(Disjoint)` when they are collinear with a gap between them.
    /// - `None` when they are parallel on different lines, or not parallel
    ///   and not crossing within both segments.
    ///
    /// A zero-length edge behaves as its single point. Intersection is
    /// planar: unless both edges are 2D the result is `None`.
    #[must_use]
    pub fn intersection(&self, other: &Edge) -> Option<EdgeIntersection> {
        let outcome = self.classify(other);
        trace!(?outcome, "classified edge pair");
        outcome
    }

    fn classify(&self, other: &Edge) -> Option<EdgeIntersection> {
        if self.first.len() != 2 || other.first.len() != 2 {
            return None;
        }
        let v1 = self.vector();
        let v2 = other.vector();
        let is_point = |v: &Vector| v.get_or_zero(0).is_zero() && v.get_or_zero(1).is_zero();

        if is_point(&v1) {
            let p = self.first();
            return other.contains_point(&p).then_some(EdgeIntersection::Point(p));
        }
        if is_point(&v2) {
            let p = other.first();
            return self.contains_point(&p).then_some(EdgeIntersection::Point(p));
        }

        let offset = |q: &Vector| q.zip_with(&self.first, |a, b| a - b);
        let to_other = offset(&other.first);
        let denominator = perp_dot(&v1, &v2);

        if denominator.is_zero() {
            if !perp_dot(&v1, &to_other).is_zero() {
                return None;
            }
            // Collinear: compare the spans as intervals along v1, scaled by |v1|^2.
            let length = dot_xy(&v1, &v1);
            let a = dot_xy(&to_other, &v1);
            let b = dot_xy(&offset(&other.last), &v1);
            let lo = Number::ZERO.max(a.min(b));
            let hi = length.min(a.max(b));
            return match lo.partial_cmp(&hi) {
                Some(Ordering::Less) => Some(EdgeIntersection::Overlap),
                Some(Ordering::Equal) if lo.is_zero() => Some(EdgeIntersection::Point(self.first())),
                Some(Ordering::Equal) => Some(EdgeIntersection::Point(self.last())),
                _ => Some(EdgeIntersection::Disjoint),
            };
        }

        // Solve first + t * v1 = other.first + s * v2 with t = t_num / d and
        // s = s_num / d, keeping d positive so the range test stays exact.
        let (mut t_num, mut s_num, mut d) =
            (perp_dot(&to_other, &v2), perp_dot(&to_other, &v1), denominator);
        if d < Number::ZERO {
            (t_num, s_num, d) = (-t_num, -s_num, -d);
        }
        let in_range = |n: Number| Number::ZERO <= n && n <= d;
        if !(in_range(t_num) && in_range(s_num)) {
            return None;
        }
        let crossing = self.first.zip_with(&v1, |p, v| p + v * t_num / d);
        Some(EdgeIntersection::Point(Point::from(crossing)))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.last == other.last
    }
}
