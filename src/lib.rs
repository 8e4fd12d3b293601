pub mod error;
pub mod geometry;
pub mod math;

pub use error::{EuclideanError, Result};
pub use geometry::{
    to_point, Bounded, Circle, CircleOptions, Edge, EdgeIntersection, Inset, Point, Rectangle,
    RectangleOptions, Shape, Size,
};
pub use math::{Cross, Number, Operand, Vector};
