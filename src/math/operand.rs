use nalgebra::{SVector, Scalar};

use super::{Number, Vector};

/// The right-hand side of a point operation, classified once at the call
/// boundary.
///
/// Everything a point can be combined with converts into one of these
/// variants through `From`, so the arithmetic itself is a plain `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A scalar applied to every component.
    Number(Number),
    /// The dimensionless zero point.
    Zero,
    /// No operand at all; acts as the identity.
    Absent,
    /// Anything with a length and indexed numeric components.
    Sequence(Vec<Number>),
    /// A value with no components, named by its type.
    Unsupported(&'static str),
}

impl Operand {
    /// Classifies a value of type `T` that has no numeric components.
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Self {
        Operand::Unsupported(std::any::type_name::<T>())
    }

    /// A short description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Operand::Number(n) => format!("the number {n}"),
            Operand::Zero => "the zero point".to_owned(),
            Operand::Absent => "nothing".to_owned(),
            Operand::Sequence(s) => format!("a sequence of {} components", s.len()),
            Operand::Unsupported(name) => (*name).to_owned(),
        }
    }
}

macro_rules! operand_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Operand {
            fn from(value: $t) -> Self {
                Operand::Number(value.into())
            }
        })*
    };
}

operand_from_number!(Number, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Number> + Copy, const N: usize> From<[T; N]> for Operand {
    fn from(components: [T; N]) -> Self {
        Operand::Sequence(components.iter().map(|&c| c.into()).collect())
    }
}

impl<T: Into<Number> + Copy> From<&[T]> for Operand {
    fn from(components: &[T]) -> Self {
        Operand::Sequence(components.iter().map(|&c| c.into()).collect())
    }
}

impl<T: Into<Number>> From<Vec<T>> for Operand {
    fn from(components: Vec<T>) -> Self {
        Operand::Sequence(components.into_iter().map(Into::into).collect())
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Operand::Sequence(v.to_vec())
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::from(&v)
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<SVector<T, D>> for Operand {
    fn from(v: SVector<T, D>) -> Self {
        Operand::Sequence(v.iter().map(|&c| c.into()).collect())
    }
}

impl<T: Scalar + Copy + Into<Number>, const D: usize> From<nalgebra::Point<T, D>> for Operand {
    fn from(p: nalgebra::Point<T, D>) -> Self {
        Operand::from(p.coords)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Absent, Into::into)
    }
}
