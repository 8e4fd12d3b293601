use std::fmt;
use std::ops::Neg;

use nalgebra::{SVector, Scalar};

use crate::error::{GeometryError, Result};
use crate::math::{Number, Operand, Vector};

use super::coerce::to_point;

/// A point in N-dimensional space.
///
/// `Coords` holds concrete components, addressed by index or by the `x`,
/// `y`, `z` accessors. `Zero` is the dimensionless origin: it is the additive
/// identity for points of any size and equals any point whose components are
/// all the integer 0.
#[derive(Debug, Clone)]
pub enum Point {
    /// The origin of any dimensionality.
    Zero,
    /// A point with concrete components.
    Coords(Vector),
}

impl Point {
    /// Creates a point from its components.
    ///
    /// An empty component list has no dimension and yields [`Point::Zero`].
    pub fn new<I, T>(components: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        let v = Vector::new(components);
        if v.is_empty() {
            Point::Zero
        } else {
            Point::Coords(v)
        }
    }

    /// Returns [`Point::Zero`] with no size, or a zero-filled point of `size`
    /// components.
    #[must_use]
    pub fn zero(size: Option<usize>) -> Self {
        match size {
            Some(n) if n > 0 => Point::Coords(Vector::filled(n, Number::ZERO)),
            _ => Point::Zero,
        }
    }

    /// Number of components; `None` for [`Point::Zero`].
    #[must_use]
    pub fn dim(&self) -> Option<usize> {
        match self {
            Point::Zero => None,
            Point::Coords(v) => Some(v.len()),
        }
    }

    #[must_use]
    pub fn is_zero_point(&self) -> bool {
        matches!(self, Point::Zero)
    }

    /// Component `i`. The zero point reports `0` at every index; a concrete
    /// point reports `None` past its last component.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Number> {
        match self {
            Point::Zero => Some(Number::ZERO),
            Point::Coords(v) => v.get(i),
        }
    }

    #[must_use]
    pub fn x(&self) -> Option<Number> {
        self.get(0)
    }

    #[must_use]
    pub fn y(&self) -> Option<Number> {
        self.get(1)
    }

    #[must_use]
    pub fn z(&self) -> Option<Number> {
        self.get(2)
    }

    /// Components as a list; empty for the zero point.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Number> {
        match self {
            Point::Zero => Vec::new(),
            Point::Coords(v) => v.to_vec(),
        }
    }

    /// Concrete components, expanding the zero point to `dim` zeros.
    #[must_use]
    pub fn coords_or_zero(&self, dim: usize) -> Vector {
        match self {
            Point::Zero => Vector::filled(dim, Number::ZERO),
            Point::Coords(v) => v.clone(),
        }
    }

    /// Unary plus: the point itself.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.clone()
    }

    /// Adds `other` to the point.
    ///
    /// A number is added to every component, a sequence is added
    /// elementwise, and the zero point or an absent operand leaves the point
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::DimensionMismatch`] if a sequence has a different
    ///   length.
    /// - [`GeometryError::OperationNotDefined`] if the operand has no
    ///   components.
    /// - [`GeometryError::UnknownDimension`] when adding a number to the
    ///   zero point.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: impl Into<Operand>) -> Result<Point> {
        self.combine(other.into(), |a, b| a + b)
    }

    /// Subtracts `other` from the point. Same rules as [`Point::add`].
    ///
    /// # Errors
    ///
    /// See [`Point::add`].
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: impl Into<Operand>) -> Result<Point> {
        self.combine(other.into(), |a, b| a - b)
    }

    /// Computes `lhs + self`, coercing `lhs` into a point of this size first.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if `lhs` can't become a point, then the
    /// errors of [`Point::add`].
    pub fn radd(&self, lhs: impl Into<Operand>) -> Result<Point> {
        to_point(lhs, self.dim())?.add(self)
    }

    /// Computes `lhs - self`, coercing `lhs` into a point of this size first.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if `lhs` can't become a point, then the
    /// errors of [`Point::sub`].
    pub fn rsub(&self, lhs: impl Into<Operand>) -> Result<Point> {
        to_point(lhs, self.dim())?.sub(self)
    }

    fn combine(&self, operand: Operand, op: impl Fn(Number, Number) -> Number) -> Result<Point> {
        match (self, operand) {
            (_, Operand::Zero | Operand::Absent) => Ok(self.clone()),
            (Point::Coords(v), Operand::Number(n)) => Ok(Point::Coords(v.map(|c| op(c, n)))),
            (Point::Zero, Operand::Number(_)) => Err(GeometryError::UnknownDimension.into()),
            (Point::Coords(v), Operand::Sequence(s)) => {
                if v.len() != s.len() {
                    return Err(GeometryError::DimensionMismatch {
                        expected: v.len(),
                        found: s.len(),
                    }
                    .into());
                }
                Ok(Point::new(v.iter().zip(s).map(|(a, b)| op(a, b))))
            }
            (Point::Zero, Operand::Sequence(s)) => {
                Ok(Point::new(s.into_iter().map(|b| op(Number::ZERO, b))))
            }
            (_, Operand::Unsupported(name)) => {
                Err(GeometryError::OperationNotDefined(name.to_owned()).into())
            }
        }
    }

    /// Loose equality: integers and floats of the same value are equal, and
    /// sequences and vectors compare by component. The zero point only
    /// equals points whose components are all the integer 0.
    #[must_use]
    pub fn value_equals(&self, other: impl Into<Operand>) -> bool {
        let exact_zero = |c: &Number| c.identical(Number::ZERO);
        match (self, other.into()) {
            (Point::Zero, Operand::Zero) => true,
            (Point::Zero, Operand::Sequence(s)) => s.iter().all(exact_zero),
            (Point::Coords(v), Operand::Zero) => v.iter().all(|c| exact_zero(&c)),
            (Point::Coords(v), Operand::Sequence(s)) => v.value_equals(&s),
            _ => false,
        }
    }

    /// Strict equality: same variant and identical components, so
    /// `Point[1, 2]` is not identical to `Point[1.0, 2.0]`.
    ///
    /// The zero point is identical to any point whose components are all the
    /// integer `0`.
    #[must_use]
    pub fn identity_equals(&self, other: &Point) -> bool {
        let exact_zero = |v: &Vector| v.iter().all(|c| c.identical(Number::ZERO));
        match (self, other) {
            (Point::Zero, Point::Zero) => true,
            (Point::Zero, Point::Coords(v)) | (Point::Coords(v), Point::Zero) => exact_zero(v),
            (Point::Coords(a), Point::Coords(b)) => a.identity_equals(b.as_slice()),
        }
    }

    /// Strict equality against a raw component list.
    #[must_use]
    pub fn identity_equals_components<T: Into<Number> + Copy>(&self, other: &[T]) -> bool {
        let other: Vec<Number> = other.iter().map(|&c| c.into()).collect();
        match self {
            Point::Zero => other.iter().all(|c| c.identical(Number::ZERO)),
            Point::Coords(v) => v.identity_equals(&other),
        }
    }

    /// Pairwise three-way comparison.
    ///
    /// Components are compared position by position up to the shorter
    /// length; the result holds `-1`, `0` or `1` per position. Positions that
    /// don't compare (NaN) are dropped. The zero point compares as `0` at
    /// every position.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OperationNotDefined`] if `other` has no
    /// components.
    pub fn axis_cmp(&self, other: impl Into<Operand>) -> Result<Point> {
        let other = match other.into() {
            Operand::Sequence(s) => s,
            Operand::Zero => vec![Number::ZERO; self.dim().unwrap_or(0)],
            operand => {
                return Err(GeometryError::OperationNotDefined(operand.describe()).into());
            }
        };
        let ours = self.coords_or_zero(other.len());
        Ok(Point::new(
            ours.iter()
                .zip(other)
                .filter_map(|(a, b)| a.signum_cmp(b)),
        ))
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        match self {
            Point::Zero => Point::Zero,
            Point::Coords(v) => Point::Coords(-v),
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.value_equals(other)
    }
}

impl<T: Into<Number> + Copy, const N: usize> PartialEq<[T; N]> for Point {
    fn eq(&self, other: &[T; N]) -> bool {
        self.value_equals(*other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Zero => write!(f, "PointZero"),
            Point::Coords(v) => v.fmt_named("Point", f),
        }
    }
}

impl From<&Point> for Operand {
    fn from(p: &Point) -> Self {
        match p {
            Point::Zero => Operand::Zero,
            Point::Coords(v) => Operand::from(v),
        }
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self {
        Operand::from(&p)
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        if v.is_empty() {
            Point::Zero
        } else {
            Point::Coords(v)
        }
    }
}

impl<T: Into<Number> + Copy, const N: usize> From<[T; N]> for Point {
    fn from(components: [T; N]) -> Self {
        Point::new(components)
    }
}

impl<T: Into<Number>> From<Vec<T>> for Point {
    fn from(components: Vec<T>) -> Self {
        Point::new(components)
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<SVector<T, D>> for Point {
    fn from(v: SVector<T, D>) -> Self {
        Point::new(v.iter().copied())
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<nalgebra::Point<T, D>> for Point {
    fn from(p: nalgebra::Point<T, D>) -> Self {
        Point::from(p.coords)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EuclideanError;
    use crate::geometry::{Circle, Shape};

    fn left() -> Point {
        Point::new([1, 2])
    }

    fn right() -> Point {
        Point::new([3, 4])
    }

    #[test]
    fn zero_without_size_is_the_zero_point() {
        assert!(Point::zero(None).is_zero_point());
    }

    #[test]
    fn zero_with_size_is_zero_filled() {
        let p = Point::zero(Some(3));
        assert_eq!(p, [0, 0, 0]);
        assert_eq!(p.dim(), Some(3));
    }

    #[test]
    fn construct_from_point_vector_and_array() {
        let original = Point::new([3, 4]);
        let copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.dim(), Some(2));
        assert_eq!(Point::from(Vector::new([3, 4])), [3, 4]);
        assert_eq!(Point::from(vec![3, 4]), [3, 4]);
        assert_eq!(Point::from(nalgebra::Vector2::new(3.0, 4.0)), [3, 4]);
        assert_eq!(Point::from(nalgebra::Point3::new(1, 2, 3)), [1, 2, 3]);
    }

    #[test]
    fn named_and_indexed_access() {
        let p = Point::new([5, 6, 7]);
        assert_eq!(p.x(), Some(Number::Int(5)));
        assert_eq!(p.y(), Some(Number::Int(6)));
        assert_eq!(p.z(), Some(Number::Int(7)));
        assert_eq!(Point::new([1, 2]).get(2), None);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new([8, 9]).to_string(), "Point[8, 9]");
    }

    #[test]
    fn unary_operators() {
        assert_eq!(left().pos(), [1, 2]);
        assert_eq!(-left(), [-1, -2]);
    }

    #[test]
    fn add_points_arrays_and_vectors() {
        assert_eq!(left().add(&right()).unwrap(), [4, 6]);
        assert_eq!(left().add([5, 6]).unwrap(), [6, 8]);
        assert_eq!(left().add(Vector::new([5, 6])).unwrap(), [6, 8]);
    }

    #[test]
    fn add_number_to_every_component() {
        assert_eq!(left().add(2).unwrap(), [3, 4]);
        assert_eq!(left().radd(2).unwrap(), [3, 4]);
    }

    #[test]
    fn add_mismatched_sizes() {
        let err = left().add([1, 2, 3, 4]).unwrap_err();
        assert_eq!(
            err,
            EuclideanError::Geometry(GeometryError::DimensionMismatch {
                expected: 2,
                found: 4
            })
        );
    }

    #[test]
    fn add_zero_or_nothing_is_identity() {
        assert_eq!(left().add(Point::zero(None)).unwrap(), left());
        assert_eq!(left().add(None::<i32>).unwrap(), left());
    }

    #[test]
    fn subtract() {
        assert_eq!(left().sub([5, 6]).unwrap(), [-4, -4]);
        assert_eq!(left().sub(2).unwrap(), [-1, 0]);
        assert_eq!(left().rsub(2).unwrap(), [1, 0]);
        assert_eq!(left().sub(Point::zero(None)).unwrap(), left());
        assert_eq!(left().sub(None::<i32>).unwrap(), left());
        assert!(left().sub([1, 2, 3, 4]).is_err());
    }

    #[test]
    fn operand_without_components() {
        let err = left().add(Operand::unsupported::<str>()).unwrap_err();
        assert!(matches!(
            err,
            EuclideanError::Geometry(GeometryError::OperationNotDefined(_))
        ));
        let circle = Shape::from(Circle::new([0, 0], 1).unwrap());
        assert_eq!(
            left().sub(&circle).unwrap_err(),
            EuclideanError::Geometry(GeometryError::OperationNotDefined("Circle".to_owned()))
        );
    }

    #[test]
    fn zero_point_arithmetic() {
        assert_eq!(Point::Zero.add([1, 2]).unwrap(), [1, 2]);
        assert_eq!(Point::Zero.sub([1, 2]).unwrap(), [-1, -2]);
        assert!(Point::Zero.add(Point::Zero).unwrap().is_zero_point());
        assert_eq!(
            Point::Zero.add(1).unwrap_err(),
            EuclideanError::Geometry(GeometryError::UnknownDimension)
        );
    }

    #[test]
    fn compares_with_arrays() {
        assert_eq!(left(), [1, 2]);
        assert!(left().identity_equals_components(&[1, 2]));
        assert_ne!(left(), [3, 2]);
    }

    #[test]
    fn compares_with_vectors() {
        assert!(left().value_equals(Vector::new([1, 2])));
        assert!(!left().value_equals(Vector::new([3, 2])));
    }

    #[test]
    fn floats_equal_ints_but_are_not_identical() {
        let ints = Point::new([1, 2]);
        let floats = Point::new([1.0, 2.0]);
        assert_eq!(ints, floats);
        assert_eq!(floats, ints);
        assert!(!ints.identity_equals(&floats));
        assert!(!floats.identity_equals(&ints));
        assert!(ints.identity_equals(&Point::new([1, 2])));
    }

    #[test]
    fn zero_point_equality() {
        assert_eq!(Point::new([0, 0]), Point::Zero);
        assert_eq!(Point::Zero, Point::new([0, 0, 0]));
        assert!(Point::new([0, 0]).identity_equals(&Point::Zero));
        assert!(!Point::new([0.0, 0.0]).identity_equals(&Point::Zero));
        assert_ne!(Point::new([0, 1]), Point::Zero);
        assert_ne!(Point::new([0.0, 0.0]), Point::Zero);
        assert_ne!(Point::Zero, Point::new([0.0, 0.0]));
        assert!(!Point::Zero.value_equals([0.0, 0.0]));
    }

    #[test]
    fn points_of_different_lengths_are_never_equal() {
        assert_ne!(Point::new([1, 2]), Point::new([1, 2, 0]));
        assert_ne!(Point::new([1, 2, 0]), Point::new([1, 2]));
        assert!(!Point::new([1, 2]).value_equals([1, 2, 0]));
        assert!(!Point::new([1.0, 2.0]).value_equals([1, 2, 0]));
    }

    #[test]
    fn axis_cmp_same_length() {
        let result = Point::new([1, 2]).axis_cmp(&Point::new([0, 3])).unwrap();
        assert!(result.identity_equals_components(&[1, -1]));
    }

    #[test]
    fn axis_cmp_different_lengths() {
        assert_eq!(Point::new([1, 2]).axis_cmp(&Point::new([0, 3, 4])).unwrap(), [1, -1]);
        assert_eq!(Point::new([1, 2, 4]).axis_cmp(&Point::new([0, 3])).unwrap(), [1, -1]);
    }

    #[test]
    fn axis_cmp_with_array_and_zero() {
        assert_eq!(Point::new([1, 2]).axis_cmp([0, 3]).unwrap(), [1, -1]);
        assert_eq!(Point::new([-1, 0]).axis_cmp(Point::Zero).unwrap(), [-1, 0]);
        assert!(Point::new([1, 2]).axis_cmp(3).is_err());
    }
}
