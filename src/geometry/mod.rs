mod circle;
mod coerce;
mod edge;
mod point;
mod rectangle;
mod size;

pub use circle::{Circle, CircleOptions};
pub use coerce::to_point;
pub use edge::{Edge, EdgeIntersection};
pub use point::Point;
pub use rectangle::{Inset, Rectangle, RectangleOptions};
pub use size::Size;

/// Shapes with an axis-aligned bounding box.
pub trait Bounded {
    /// The lower-left corner of the bounding box.
    fn min(&self) -> Point;

    /// The upper-right corner of the bounding box.
    fn max(&self) -> Point;

    /// Both corners of the bounding box.
    fn minmax(&self) -> (Point, Point) {
        (self.min(), self.max())
    }

    /// The smallest axis-aligned rectangle containing the shape.
    fn bounds(&self) -> Rectangle;
}

/// Any of the shapes, for APIs that accept one kind and reject the others at
/// run time.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Edge(Edge),
}

impl Shape {
    /// The name of the shape's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Edge(_) => "Edge",
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Rectangle(rectangle)
    }
}

impl From<Edge> for Shape {
    fn from(edge: Edge) -> Self {
        Shape::Edge(edge)
    }
}

impl From<&Shape> for crate::math::Operand {
    fn from(shape: &Shape) -> Self {
        crate::math::Operand::Unsupported(shape.kind())
    }
}
