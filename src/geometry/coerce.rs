use crate::error::CoercionError;
use crate::math::{Operand, Vector};

use super::Point;

/// Converts the left operand of a mixed operation into a [`Point`].
///
/// Sequences and vectors become a point of their components, the zero point
/// stays the zero point, and a scalar becomes a point of `expected_size`
/// copies of itself. Sizes are not checked here; the arithmetic that follows
/// does that.
///
/// # Errors
///
/// Returns [`CoercionError::CannotCoerce`] for operands without components,
/// and for a scalar when there is no size to fill.
pub fn to_point(value: impl Into<Operand>, expected_size: Option<usize>) -> Result<Point, CoercionError> {
    match value.into() {
        Operand::Sequence(s) => Ok(Point::new(s)),
        Operand::Zero => Ok(Point::Zero),
        Operand::Number(n) => match expected_size {
            Some(len) if len > 0 => Ok(Point::Coords(Vector::filled(len, n))),
            _ => Err(CoercionError::CannotCoerce(format!(
                "the number {n} (no size to fill)"
            ))),
        },
        operand => Err(CoercionError::CannotCoerce(operand.describe())),
    }
}
