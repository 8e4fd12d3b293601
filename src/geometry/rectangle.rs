use tracing::debug;

use crate::error::{ArgumentError, GeometryError, Result};
use crate::math::{Number, Vector};

use super::{Bounded, Edge, Point, Size};

/// An axis-aligned rectangle in the plane, stored as its lower-left origin
/// and a non-negative size.
///
/// Centers, corners and edges are derived on every call.
#[derive(Debug, Clone)]
pub struct Rectangle {
    origin: Vector,
    size: Vector,
}

/// Named construction parameters for a [`Rectangle`].
///
/// Resolved in this order: `from` + `to`, `center` + `size`,
/// `origin` + `size`, `size` alone, `width` + `height`.
#[derive(Debug, Clone, Default)]
pub struct RectangleOptions {
    pub from: Option<Point>,
    pub to: Option<Point>,
    pub center: Option<Point>,
    pub origin: Option<Point>,
    pub size: Option<Size>,
    pub width: Option<Number>,
    pub height: Option<Number>,
}

impl RectangleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from(mut self, corner: impl Into<Point>) -> Self {
        self.from = Some(corner.into());
        self
    }

    #[must_use]
    pub fn to(mut self, corner: impl Into<Point>) -> Self {
        self.to = Some(corner.into());
        self
    }

    #[must_use]
    pub fn center(mut self, center: impl Into<Point>) -> Self {
        self.center = Some(center.into());
        self
    }

    #[must_use]
    pub fn origin(mut self, origin: impl Into<Point>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Number>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Number>) -> Self {
        self.height = Some(height.into());
        self
    }
}

/// How far to move each side of a rectangle inward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inset {
    /// The same amount on every side.
    Uniform(Number),
    /// `x` on the left and right, `y` on the top and bottom.
    Axes { x: Number, y: Number },
    /// An amount per side.
    Sides {
        top: Number,
        left: Number,
        bottom: Number,
        right: Number,
    },
}

impl Inset {
    #[must_use]
    pub fn uniform(amount: impl Into<Number>) -> Self {
        Inset::Uniform(amount.into())
    }

    #[must_use]
    pub fn axes(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Inset::Axes {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn sides(
        top: impl Into<Number>,
        left: impl Into<Number>,
        bottom: impl Into<Number>,
        right: impl Into<Number>,
    ) -> Self {
        Inset::Sides {
            top: top.into(),
            left: left.into(),
            bottom: bottom.into(),
            right: right.into(),
        }
    }

    /// Reads positional amounts: one for every side, two as `(x, y)`, or
    /// four as `(top, left, bottom, right)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InsetArity`] for any other count.
    pub fn from_values<T: Into<Number> + Copy>(values: &[T]) -> Result<Self> {
        match *values {
            [amount] => Ok(Inset::uniform(amount)),
            [x, y] => Ok(Inset::axes(x, y)),
            [top, left, bottom, right] => Ok(Inset::sides(top, left, bottom, right)),
            _ => Err(ArgumentError::InsetArity(values.len()).into()),
        }
    }

    /// Per-side amounts as `(top, left, bottom, right)`.
    fn per_side(self) -> (Number, Number, Number, Number) {
        match self {
            Inset::Uniform(a) => (a, a, a, a),
            Inset::Axes { x, y } => (y, x, y, x),
            Inset::Sides {
                top,
                left,
                bottom,
                right,
            } => (top, left, bottom, right),
        }
    }
}

fn planar(components: Vector) -> Result<Vector> {
    if components.len() == 2 {
        Ok(components)
    } else {
        Err(GeometryError::DimensionMismatch {
            expected: 2,
            found: components.len(),
        }
        .into())
    }
}

fn planar_point(point: &Point) -> Result<Vector> {
    planar(point.coords_or_zero(2))
}

fn planar_size(size: &Size) -> Result<Vector> {
    planar(size.as_vector().clone())
}

impl Rectangle {
    /// Creates a rectangle spanning two opposite corners, given in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless both corners are
    /// 2D (or the zero point).
    pub fn new(corner: impl Into<Point>, opposite: impl Into<Point>) -> Result<Self> {
        Ok(Self::from_corners(
            planar_point(&corner.into())?,
            planar_point(&opposite.into())?,
        ))
    }

    /// Normalizes two 2D corners into origin and size.
    pub(crate) fn from_corners(a: Vector, b: Vector) -> Self {
        Self {
            origin: a.zip_with(&b, Number::min),
            size: b.zip_with(&a, |p, q| (p - q).abs()),
        }
    }

    /// Creates a rectangle from its lower-left corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless both are 2D.
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Result<Self> {
        Ok(Self {
            origin: planar_point(&origin.into())?,
            size: planar_size(&size.into())?,
        })
    }

    /// Creates a rectangle of `size` centered on `center`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] unless both are 2D.
    pub fn from_center_size(center: impl Into<Point>, size: impl Into<Size>) -> Result<Self> {
        let center = planar_point(&center.into())?;
        let size = planar_size(&size.into())?;
        Ok(Self {
            origin: center.zip_with(&size, |c, s| c - s / Number::Int(2)),
            size,
        })
    }

    /// Creates a rectangle from named parameters.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::IncompleteCorners`] if only one of `from`/`to` is
    ///   given.
    /// - [`ArgumentError::CenterWithoutSize`] or
    ///   [`ArgumentError::OriginWithoutSize`] if a position has no size.
    /// - [`ArgumentError::IncompleteWidthHeight`] if only one of
    ///   `width`/`height` is given.
    /// - [`ArgumentError::MissingRectangleParameters`] if nothing usable is
    ///   given.
    /// - [`GeometryError::DimensionMismatch`] for non-planar input.
    pub fn from_options(options: RectangleOptions) -> Result<Self> {
        let RectangleOptions {
            from,
            to,
            center,
            origin,
            size,
            width,
            height,
        } = options;

        match (from, to) {
            (Some(from), Some(to)) => {
                debug!(%from, %to, "resolved rectangle from corners");
                return Rectangle::new(from, to);
            }
            (None, None) => {}
            _ => return Err(ArgumentError::IncompleteCorners.into()),
        }

        match (center, origin, size) {
            (Some(center), _, Some(size)) => {
                debug!(%center, %size, "resolved rectangle from center and size");
                Rectangle::from_center_size(center, size)
            }
            (Some(_), _, None) => Err(ArgumentError::CenterWithoutSize.into()),
            (None, Some(origin), Some(size)) => {
                debug!(%origin, %size, "resolved rectangle from origin and size");
                Rectangle::from_origin_size(origin, size)
            }
            (None, Some(_), None) => Err(ArgumentError::OriginWithoutSize.into()),
            (None, None, Some(size)) => {
                debug!(%size, "resolved rectangle from size");
                Rectangle::from_origin_size(Point::Zero, size)
            }
            (None, None, None) => match (width, height) {
                (Some(width), Some(height)) => {
                    debug!(%width, %height, "resolved rectangle from width and height");
                    Rectangle::from_origin_size(Point::Zero, Size::new([width, height]))
                }
                (None, None) => Err(ArgumentError::MissingRectangleParameters.into()),
                _ => Err(ArgumentError::IncompleteWidthHeight.into()),
            },
        }
    }

    /// The lower-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::from(self.origin.clone())
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::from(self.size.clone())
    }

    #[must_use]
    pub fn width(&self) -> Number {
        self.size[0]
    }

    #[must_use]
    pub fn height(&self) -> Number {
        self.size[1]
    }

    /// `origin + size / 2`.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::from(
            self.origin
                .zip_with(&self.size, |o, s| o + s / Number::Int(2)),
        )
    }

    fn upper_right(&self) -> Vector {
        self.origin.zip_with(&self.size, |o, s| o + s)
    }

    fn corners(&self) -> [Vector; 4] {
        let (min, max) = (&self.origin, self.upper_right());
        [
            Vector::new([min[0], min[1]]),
            Vector::new([max[0], min[1]]),
            Vector::new([max[0], max[1]]),
            Vector::new([min[0], max[1]]),
        ]
    }

    /// Corners counter-clockwise from the origin: lower-left, lower-right,
    /// upper-right, upper-left.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        self.corners().map(Point::from)
    }

    /// Boundary edges between consecutive [`Rectangle::points`]: bottom,
    /// right, top, left.
    #[must_use]
    pub fn edges(&self) -> [Edge; 4] {
        let corners = self.corners();
        std::array::from_fn(|i| {
            Edge::from_vectors(corners[i].clone(), corners[(i + 1) % 4].clone())
        })
    }

    /// Moves each side inward by the given amounts.
    ///
    /// Amounts larger than the rectangle are not clamped.
    #[must_use]
    pub fn inset(&self, inset: Inset) -> Rectangle {
        let (top, left, bottom, right) = inset.per_side();
        Self {
            origin: Vector::new([self.origin[0] + left, self.origin[1] + bottom]),
            size: Vector::new([
                self.width() - left - right,
                self.height() - top - bottom,
            ]),
        }
    }
}

impl Bounded for Rectangle {
    fn min(&self) -> Point {
        self.origin()
    }

    fn max(&self) -> Point {
        Point::from(self.upper_right())
    }

    fn bounds(&self) -> Rectangle {
        self.clone()
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.size == other.size
    }
}
