use std::fmt;

use nalgebra::{SVector, Scalar};

use crate::math::{Number, Operand, Vector};

/// Extents along each axis: width, height and depth.
///
/// Structurally a [`Vector`], but only equality and indexing are defined.
#[derive(Debug, Clone)]
pub struct Size(Vector);

impl Size {
    pub fn new<I, T>(components: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        Self(Vector::new(components))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<Number> {
        self.0.get(i)
    }

    #[must_use]
    pub fn width(&self) -> Option<Number> {
        self.get(0)
    }

    #[must_use]
    pub fn height(&self) -> Option<Number> {
        self.get(1)
    }

    #[must_use]
    pub fn depth(&self) -> Option<Number> {
        self.get(2)
    }

    #[must_use]
    pub fn x(&self) -> Option<Number> {
        self.width()
    }

    #[must_use]
    pub fn y(&self) -> Option<Number> {
        self.height()
    }

    #[must_use]
    pub fn z(&self) -> Option<Number> {
        self.depth()
    }

    #[must_use]
    pub fn as_vector(&self) -> &Vector {
        &self.0
    }

    /// Numeric equality against anything with components.
    #[must_use]
    pub fn value_equals(&self, other: impl Into<Operand>) -> bool {
        match other.into() {
            Operand::Sequence(s) => self.0.value_equals(&s),
            _ => false,
        }
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Into<Number> + Copy, const N: usize> PartialEq<[T; N]> for Size {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_named("Size", f)
    }
}

impl From<Vector> for Size {
    fn from(v: Vector) -> Self {
        Self(v)
    }
}

impl<T: Into<Number> + Copy, const N: usize> From<[T; N]> for Size {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Into<Number>> From<Vec<T>> for Size {
    fn from(components: Vec<T>) -> Self {
        Self::new(components)
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<SVector<T, D>> for Size {
    fn from(v: SVector<T, D>) -> Self {
        Self(Vector::from(v))
    }
}

impl From<&Size> for Operand {
    fn from(size: &Size) -> Self {
        Operand::from(&size.0)
    }
}

impl From<Size> for Operand {
    fn from(size: Size) -> Self {
        Operand::from(size.0)
    }
}
