use std::fmt;
use std::ops::{Index, Neg};

use nalgebra::{DVector, SVector, Scalar};

use crate::error::GeometryError;

use super::Number;

/// Result of a cross product: a scalar for 2D vectors, a vector for 3D ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Cross {
    /// The z-component of the 2D cross product (`a.x * b.y - a.y * b.x`).
    Scalar(Number),
    /// The full 3D cross product.
    Vector(Vector),
}

impl Cross {
    /// Returns `true` when every component of the product is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Cross::Scalar(n) => n.is_zero(),
            Cross::Vector(v) => v.iter().all(|c| c.is_zero()),
        }
    }
}

/// An ordered, fixed-size tuple of [`Number`]s.
///
/// This is the arithmetic base shared by points and sizes. Components are
/// stored in a `nalgebra` column vector; float-only work such as
/// normalization is delegated to `nalgebra` on an `f64` copy.
#[derive(Debug, Clone)]
pub struct Vector {
    components: DVector<Number>,
}

impl Vector {
    /// Creates a vector from its components.
    pub fn new<I, T>(components: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        let components: Vec<Number> = components.into_iter().map(Into::into).collect();
        Self {
            components: DVector::from_vec(components),
        }
    }

    /// Creates a vector of `len` copies of `value`.
    #[must_use]
    pub fn filled(len: usize, value: Number) -> Self {
        Self {
            components: DVector::from_element(len, value),
        }
    }

    /// Unit vector along the X axis.
    #[must_use]
    pub fn x_axis() -> Self {
        Self::new([1, 0, 0])
    }

    /// Unit vector along the Y axis.
    #[must_use]
    pub fn y_axis() -> Self {
        Self::new([0, 1, 0])
    }

    /// Unit vector along the Z axis.
    #[must_use]
    pub fn z_axis() -> Self {
        Self::new([0, 0, 1])
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component `i`, or `None` past the end.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Number> {
        self.components.get(i).copied()
    }

    /// Component `i`, or integer zero past the end.
    #[must_use]
    pub(crate) fn get_or_zero(&self, i: usize) -> Number {
        self.get(i).unwrap_or(Number::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.components.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Number] {
        self.components.as_slice()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Number> {
        self.as_slice().to_vec()
    }

    /// Converts every component to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> DVector<f64> {
        self.components.map(Number::to_f64)
    }

    fn ensure_len(&self, found: usize) -> Result<(), GeometryError> {
        if self.len() == found {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                expected: self.len(),
                found,
            })
        }
    }

    /// Applies `f` to every component.
    #[must_use]
    pub fn map(&self, f: impl FnMut(Number) -> Number) -> Self {
        Self {
            components: self.components.map(f),
        }
    }

    /// Combines two vectors of the same length component by component.
    ///
    /// Callers must guarantee equal lengths.
    pub(crate) fn zip_with(&self, other: &Vector, mut f: impl FnMut(Number, Number) -> Number) -> Self {
        debug_assert_eq!(self.len(), other.len());
        Self {
            components: self.components.zip_map(&other.components, |a, b| f(a, b)),
        }
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the lengths differ.
    pub fn try_add(&self, other: &Vector) -> Result<Self, GeometryError> {
        self.ensure_len(other.len())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the lengths differ.
    pub fn try_sub(&self, other: &Vector) -> Result<Self, GeometryError> {
        self.ensure_len(other.len())?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Number) -> Self {
        self.map(|c| c * factor)
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<Number, GeometryError> {
        self.ensure_len(other.len())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(Number::ZERO, |acc, (a, b)| acc + a * b))
    }

    /// Cross product of two 2D or two 3D vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the lengths differ or
    /// are neither 2 nor 3.
    pub fn cross(&self, other: &Vector) -> Result<Cross, GeometryError> {
        self.ensure_len(other.len())?;
        match self.as_slice() {
            &[ax, ay] => Ok(Cross::Scalar(ax * other[1] - ay * other[0])),
            &[ax, ay, az] => {
                let (bx, by, bz) = (other[0], other[1], other[2]);
                Ok(Cross::Vector(Vector::new([
                    ay * bz - az * by,
                    az * bx - ax * bz,
                    ax * by - ay * bx,
                ])))
            }
            _ => Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: self.len(),
            }),
        }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.to_f64().norm()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector divides by zero and yields NaN components.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let unit = self.to_f64().normalize();
        Self::new(unit.iter().copied())
    }

    /// Numeric equality against a component list; integers equal floats of
    /// the same value.
    #[must_use]
    pub fn value_equals(&self, other: &[Number]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }

    /// Strict equality against a component list; the variant of every
    /// component must match too.
    #[must_use]
    pub fn identity_equals(&self, other: &[Number]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.identical(*b))
    }

    /// Writes `Name[a, b, ...]`.
    pub(crate) fn fmt_named(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name}[")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

impl Index<usize> for Vector {
    type Output = Number;

    fn index(&self, i: usize) -> &Number {
        &self.components[i]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|c| -c)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.value_equals(other.as_slice())
    }
}

impl<T: Into<Number> + Copy, const N: usize> PartialEq<[T; N]> for Vector {
    fn eq(&self, other: &[T; N]) -> bool {
        let other: Vec<Number> = other.iter().map(|&c| c.into()).collect();
        self.value_equals(&other)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_named("Vector", f)
    }
}

impl<T: Into<Number> + Copy, const N: usize> From<[T; N]> for Vector {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Into<Number>> From<Vec<T>> for Vector {
    fn from(components: Vec<T>) -> Self {
        Self::new(components)
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<SVector<T, D>> for Vector {
    fn from(v: SVector<T, D>) -> Self {
        Self::new(v.iter().copied())
    }
}
