mod number;
mod operand;
mod vector;

pub use number::Number;
pub use operand::Operand;
pub use vector::{Cross, Vector};
