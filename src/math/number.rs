use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar component: either an exact integer or a float.
///
/// Arithmetic between two integers stays exact and widens to a float only on
/// overflow or when the quotient is not whole. Any float operand widens the
/// result to a float.
///
/// `PartialEq` is numeric equality (`Int(1) == Float(1.0)`); use
/// [`Number::identical`] for strict comparison that also checks the variant.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact integer.
    Int(i64),
    /// An IEEE double.
    Float(f64),
}

impl Number {
    /// Integer zero.
    pub const ZERO: Number = Number::Int(0);

    /// Integer one.
    pub const ONE: Number = Number::Int(1);

    /// Converts to a float, losing precision for very large integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns `true` for the integer variant.
    #[must_use]
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Returns `true` when the value is numerically zero, regardless of variant.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Number::ZERO
    }

    /// Strict equality: same variant and same value.
    ///
    /// `Int(1)` is not identical to `Float(1.0)`.
    #[must_use]
    pub fn identical(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Number {
        match self {
            Number::Int(i) => i.checked_abs().map_or(Number::Float(self.to_f64().abs()), Number::Int),
            Number::Float(f) => Number::Float(f.abs()),
        }
    }

    /// Three-way comparison as an integer `-1`, `0` or `1`.
    ///
    /// Returns `None` when either side is NaN.
    #[must_use]
    pub fn signum_cmp(self, other: Number) -> Option<Number> {
        self.partial_cmp(&other).map(|ordering| match ordering {
            Ordering::Less => Number::Int(-1),
            Ordering::Equal => Number::Int(0),
            Ordering::Greater => Number::Int(1),
        })
    }

    /// The smaller of two numbers, preferring `self` on ties.
    #[must_use]
    pub fn min(self, other: Number) -> Number {
        if other < self {
            other
        } else {
            self
        }
    }

    /// The larger of two numbers, preferring `self` on ties.
    #[must_use]
    pub fn max(self, other: Number) -> Number {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Applies an integer operation, falling back to the float operation on
    /// overflow or when either side is a float.
    fn widen(
        self,
        other: Number,
        int_op: impl FnOnce(i64, i64) -> Option<i64>,
        float_op: impl FnOnce(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, other) {
            if let Some(value) = int_op(a, b) {
                return Number::Int(value);
            }
        }
        Number::Float(float_op(self.to_f64(), other.to_f64()))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

/// Compares an integer with a float without rounding the integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    Some(int.cmp(&(whole as i64)).then_with(|| {
        if float > whole {
            Ordering::Less
        } else if float < whole {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }))
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (a, b) => a.partial_cmp(&b) == Some(Ordering::Equal),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.widen(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.widen(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.widen(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// Integer division stays exact only when the quotient is whole; otherwise,
/// including division by integer zero, the result is the float quotient.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        self.widen(
            rhs,
            |a, b| match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            },
            |a, b| a / b,
        )
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(i) => i.checked_neg().map_or(Number::Float(-self.to_f64()), Number::Int),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Number::Int(i64::from(value))
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Number::Float(value as f64), Number::Int)
    }
}

impl From<usize> for Number {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Number::Float(value as f64), Number::Int)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
