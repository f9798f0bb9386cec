//! Points, sizes, rectangles and edge offsets.
//!
//! [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! All values are device-independent `f32` units. Rectangles use a top-left
//! origin with y growing downwards.

use serde::Serialize;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
///
/// Also used for a single corner radius, where `width` is the horizontal
/// semi-axis of the corner ellipse and `height` the vertical one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a size from its extents.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if either extent is zero or negative.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True if both extents are exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Multiply both extents by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// A rectangle positioned in 2D space.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from origin and size components.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }

    /// True if the rectangle covers no area.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grow the rectangle outwards by `outsets`.
    ///
    /// Negative outsets shrink it, which is how an inner border edge is
    /// derived from the border box. When the insets exceed the rectangle the
    /// resulting width or height is floored at zero rather than going
    /// negative.
    ///
    /// ```text
    /// x      = x - left
    /// y      = y - top
    /// width  = max(0, width + left + right)
    /// height = max(0, height + top + bottom)
    /// ```
    #[must_use]
    pub fn expanded(self, outsets: EdgeSizes) -> Self {
        Self {
            x: self.x - outsets.left,
            y: self.y - outsets.top,
            width: (self.width + outsets.left + outsets.right).max(0.0),
            height: (self.height + outsets.top + outsets.bottom).max(0.0),
        }
    }

    /// Snap the rectangle to the integer device grid.
    ///
    /// The origin is rounded to the nearest pixel. The size is snapped
    /// relative to the origin's fractional offset (see
    /// [`snap_size_to_pixel`]) so that both edges land where independently
    /// rounding them would put them.
    #[must_use]
    pub fn pixel_snapped(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: snap_size_to_pixel(self.width, self.x),
            height: snap_size_to_pixel(self.height, self.y),
        }
    }
}

/// Signed per-side offsets.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Holds either border widths (non-negative) or insets applied to a
/// rectangle through [`Rect::expanded`] (negative values shrink).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// All four sides zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Create edge sizes in top, right, bottom, left order.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same size on every side.
    #[must_use]
    pub const fn uniform(size: f32) -> Self {
        Self::new(size, size, size, size)
    }

    /// Every side with its sign flipped.
    #[must_use]
    pub fn negated(self) -> Self {
        Self::new(-self.top, -self.right, -self.bottom, -self.left)
    }
}

/// Snap a length to whole pixels given the position it starts at.
///
/// Rounds the far edge (`location + size`) and the near edge (`location`)
/// independently and returns the distance between them, working only with
/// the fractional part of `location` so large coordinates keep precision:
///
/// ```text
/// fraction = fract(location)
/// snapped  = floor(fraction + size + 0.5) - floor(fraction + 0.5)
/// ```
#[must_use]
pub fn snap_size_to_pixel(size: f32, location: f32) -> f32 {
    let fraction = location.fract();
    (fraction + size + 0.5).floor() - (fraction + 0.5).floor()
}

/// Intersection of the line through `p1`,`p2` with the line through `d1`,`d2`.
///
/// Both are treated as infinite lines, so the point may lie outside either
/// segment. Returns `None` when the lines are parallel or coincident (the
/// determinant of the two direction vectors is exactly zero).
#[must_use]
pub fn find_intersection(p1: Point, p2: Point, d1: Point, d2: Point) -> Option<Point> {
    let px_length = p2.x - p1.x;
    let py_length = p2.y - p1.y;

    let dx_length = d2.x - d1.x;
    let dy_length = d2.y - d1.y;

    let denom = px_length * dy_length - py_length * dx_length;
    if denom == 0.0 {
        return None;
    }

    let param = ((d1.x - p1.x) * dy_length - (d1.y - p1.y) * dx_length) / denom;

    Some(Point::new(
        p1.x + param * px_length,
        p1.y + param * py_length,
    ))
}
