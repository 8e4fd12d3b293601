use tracing::debug;

use crate::error::{ArgumentError, CoercionError, GeometryError, Result};
use crate::math::{Number, Vector};

use super::{Bounded, Point, Rectangle, Shape};

/// A circle in the plane.
///
/// A circle is defined either by its radius or by its diameter; the other
/// measure is derived on demand. Equality compares the center and the
/// measure the receiver was defined by.
///
/// ```
/// # use euclidean::{Circle, CircleOptions, Number};
/// let a = Circle::new([1, 2], 3).unwrap();
/// let b = Circle::from_options(CircleOptions::new().center([1, 2]).diameter(6)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b.radius(), Number::Int(3));
/// ```
#[derive(Debug, Clone)]
pub enum Circle {
    /// Defined by center and radius.
    Radius { center: Point, radius: Number },
    /// Defined by center and diameter.
    Diameter { center: Point, diameter: Number },
}

/// Named construction parameters for a [`Circle`].
#[derive(Debug, Clone, Default)]
pub struct CircleOptions {
    pub center: Option<Point>,
    pub radius: Option<Number>,
    pub diameter: Option<Number>,
}

impl CircleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn center(mut self, center: impl Into<Point>) -> Self {
        self.center = Some(center.into());
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: impl Into<Number>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn diameter(mut self, diameter: impl Into<Number>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }
}

/// Circles live in the plane: the center must be 2D or the zero point.
fn planar_center(center: Point) -> Result<Point> {
    match center.dim() {
        None | Some(2) => Ok(center),
        Some(found) => Err(GeometryError::DimensionMismatch { expected: 2, found }.into()),
    }
}

impl Circle {
    /// Creates a circle from a center and a radius.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the center is not 2D.
    pub fn new(center: impl Into<Point>, radius: impl Into<Number>) -> Result<Self> {
        Ok(Circle::Radius {
            center: planar_center(center.into())?,
            radius: radius.into(),
        })
    }

    /// Creates a circle from a center and a diameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the center is not 2D.
    pub fn with_diameter(center: impl Into<Point>, diameter: impl Into<Number>) -> Result<Self> {
        Ok(Circle::Diameter {
            center: planar_center(center.into())?,
            diameter: diameter.into(),
        })
    }

    /// Creates a circle from named parameters.
    ///
    /// A radius takes precedence over a diameter. The center defaults to the
    /// zero point.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::MissingRadius`] when neither a radius nor a
    /// diameter is given, or a dimension error for a non-planar center.
    pub fn from_options(options: CircleOptions) -> Result<Self> {
        let center = options.center.unwrap_or(Point::Zero);
        match (options.radius, options.diameter) {
            (Some(radius), _) => {
                debug!(%radius, "resolved circle from radius");
                Circle::new(center, radius)
            }
            (None, Some(diameter)) => {
                debug!(%diameter, "resolved circle from diameter");
                Circle::with_diameter(center, diameter)
            }
            (None, None) => Err(ArgumentError::MissingRadius.into()),
        }
    }

    #[must_use]
    pub fn center(&self) -> &Point {
        match self {
            Circle::Radius { center, .. } | Circle::Diameter { center, .. } => center,
        }
    }

    /// The radius, stored or derived as `diameter / 2`.
    #[must_use]
    pub fn radius(&self) -> Number {
        match self {
            Circle::Radius { radius, .. } => *radius,
            Circle::Diameter { diameter, .. } => *diameter / Number::Int(2),
        }
    }

    /// The diameter, stored or derived as `radius * 2`.
    #[must_use]
    pub fn diameter(&self) -> Number {
        match self {
            Circle::Radius { radius, .. } => *radius * Number::Int(2),
            Circle::Diameter { diameter, .. } => *diameter,
        }
    }

    fn center_coords(&self) -> Vector {
        self.center().coords_or_zero(2)
    }

    /// Whether two circles meet, tangency included.
    ///
    /// Circles `(x0, y0, r0)` and `(x1, y1, r1)` intersect iff
    /// `(r0 - r1)^2 <= (x0 - x1)^2 + (y0 - y1)^2 <= (r0 + r1)^2`.
    #[must_use]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let (a, b) = (self.center_coords(), other.center_coords());
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        let distance_sq = dx * dx + dy * dy;
        let (r0, r1) = (self.radius(), other.radius());
        let (diff, sum) = (r0 - r1, r0 + r1);
        diff * diff <= distance_sq && distance_sq <= sum * sum
    }

    /// [`Circle::intersects_circle`] for a shape of unknown kind.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError::NotACircle`] if `other` is not a circle.
    pub fn intersects(&self, other: &Shape) -> Result<bool> {
        match other {
            Shape::Circle(circle) => Ok(self.intersects_circle(circle)),
            _ => Err(CoercionError::NotACircle(other.kind()).into()),
        }
    }
}

impl Bounded for Circle {
    fn min(&self) -> Point {
        let r = self.radius();
        Point::from(self.center_coords().map(|c| c - r))
    }

    fn max(&self) -> Point {
        let r = self.radius();
        Point::from(self.center_coords().map(|c| c + r))
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::from_corners(self.min().coords_or_zero(2), self.max().coords_or_zero(2))
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        let same_measure = match self {
            Circle::Radius { radius, .. } => *radius == other.radius(),
            Circle::Diameter { diameter, .. } => *diameter == other.diameter(),
        };
        same_measure && self.center() == other.center()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EuclideanError;

    #[test]
    fn center_and_radius() {
        let circle = Circle::new([1, 2], 3).unwrap();
        assert!(matches!(circle, Circle::Radius { .. }));
        assert_eq!(*circle.center(), [1, 2]);
        assert_eq!(circle.radius(), Number::Int(3));
        assert_eq!(circle.diameter(), Number::Int(6));
        assert_eq!(circle, Circle::new([1, 2], 3).unwrap());
    }

    #[test]
    fn named_center_and_radius() {
        let circle = Circle::from_options(CircleOptions::new().center([1, 2]).radius(3)).unwrap();
        assert!(matches!(circle, Circle::Radius { .. }));
        assert_eq!(*circle.center(), [1, 2]);
        assert_eq!(circle.radius(), Number::Int(3));
        assert_eq!(
            circle,
            Circle::from_options(CircleOptions::new().center([1, 2]).radius(3)).unwrap()
        );
    }

    #[test]
    fn named_center_and_diameter() {
        let circle =
            Circle::from_options(CircleOptions::new().center([1, 2]).diameter(4)).unwrap();
        assert!(matches!(circle, Circle::Diameter { .. }));
        assert_eq!(*circle.center(), [1, 2]);
        assert_eq!(circle.diameter(), Number::Int(4));
        assert!(circle.radius().identical(Number::Int(2)));
        assert_eq!(circle, Circle::with_diameter([1, 2], 4).unwrap());
    }

    #[test]
    fn diameter_without_center() {
        let circle = Circle::from_options(CircleOptions::new().diameter(4)).unwrap();
        assert!(matches!(circle, Circle::Diameter { .. }));
        assert!(circle.center().is_zero_point());
        assert_eq!(circle.radius(), Number::Int(2));
    }

    #[test]
    fn odd_diameter_gives_fractional_radius() {
        let circle = Circle::with_diameter([0, 0], 3).unwrap();
        assert!(circle.radius().identical(Number::Float(1.5)));
    }

    #[test]
    fn radius_wins_over_diameter() {
        let circle =
            Circle::from_options(CircleOptions::new().radius(1).diameter(10)).unwrap();
        assert_eq!(circle.radius(), Number::Int(1));
    }

    #[test]
    fn requires_radius_or_diameter() {
        let err = Circle::from_options(CircleOptions::new().center([1, 2])).unwrap_err();
        assert_eq!(err, EuclideanError::Argument(ArgumentError::MissingRadius));
    }

    #[test]
    fn rejects_non_planar_center() {
        assert!(Circle::new([1, 2, 3], 1).is_err());
    }

    #[test]
    fn equality_across_variants_uses_derived_measure() {
        let by_radius = Circle::new([1, 2], 2).unwrap();
        let by_diameter = Circle::with_diameter([1, 2], 4).unwrap();
        assert_eq!(by_radius, by_diameter);
        assert_eq!(by_diameter, by_radius);
        assert_ne!(by_radius, Circle::new([1, 2], 3).unwrap());
        assert_ne!(by_radius, Circle::new([0, 2], 2).unwrap());
    }

    #[test]
    fn bounding_box() {
        let circle = Circle::with_diameter([1, 2], 4).unwrap();
        assert_eq!(circle.bounds(), Rectangle::new([-1, 0], [3, 4]).unwrap());
        assert_eq!(circle.minmax(), (Point::new([-1, 0]), Point::new([3, 4])));
        assert_eq!(circle.max(), [3, 4]);
        assert_eq!(circle.min(), [-1, 0]);
    }

    #[test]
    fn bounding_box_around_zero_center() {
        let circle = Circle::from_options(CircleOptions::new().radius(2)).unwrap();
        assert_eq!(circle.min(), [-2, -2]);
        assert_eq!(circle.max(), [2, 2]);
    }

    #[test]
    fn intersecting_circles() {
        let c1 = Circle::new([1, 2], 3).unwrap();
        let c2 = Circle::new([3, 0], 3).unwrap();
        assert!(c1.intersects_circle(&c2));
    }

    #[test]
    fn tangent_circles_intersect() {
        let c2 = Circle::new([3, 0], 3).unwrap();
        let c3 = Circle::new([9, 0], 3).unwrap();
        assert!(c2.intersects_circle(&c3));
    }

    #[test]
    fn distant_circles_do_not_intersect() {
        let c1 = Circle::new([1, 2], 3).unwrap();
        let c3 = Circle::new([9, 0], 3).unwrap();
        assert!(!c1.intersects_circle(&c3));
    }

    #[test]
    fn nested_circles_do_not_intersect() {
        let outer = Circle::new([0, 0], 10).unwrap();
        let inner = Circle::new([1, 0], 2).unwrap();
        assert!(!outer.intersects_circle(&inner));
    }

    #[test]
    fn intersects_rejects_other_shapes() {
        let c1 = Circle::new([1, 2], 3).unwrap();
        let c4 = Circle::from_options(CircleOptions::new().diameter(4)).unwrap();
        let rectangle = Shape::from(Rectangle::new([-1, 0], [3, 4]).unwrap());
        for circle in [c1, c4] {
            assert_eq!(
                circle.intersects(&rectangle).unwrap_err(),
                EuclideanError::Coercion(CoercionError::NotACircle("Rectangle"))
            );
        }
        let c2 = Shape::from(Circle::new([3, 0], 3).unwrap());
        assert!(Circle::new([1, 2], 3).unwrap().intersects(&c2).unwrap());
    }
}
