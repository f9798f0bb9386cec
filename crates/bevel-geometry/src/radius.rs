//! Corner radii
//!
//! [§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
//!
//! Radii go through three steps on their way to a rounded rectangle:
//!
//! 1. [`CornerRadii::resolve`] clamps each requested component to the box.
//! 2. [`CornerRadii::shrunk_by`] derives inner-edge radii from border widths.
//! 3. [`CornerRadii::constrained_to`] scales everything down uniformly so
//!    that adjacent corners never overlap.

use serde::Serialize;

use crate::geometry::{EdgeSizes, Size};
use crate::writing_mode::WritingMode;

/// A single corner radius: horizontal and vertical semi-axes.
pub type CornerRadius = Size;

/// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// "The two length or percentage values of the 'border-*-radius' properties
/// define the radii of a quarter ellipse that defines the shape of the corner
/// of the outer border edge."
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CornerRadii {
    /// Top-left corner.
    pub top_left: CornerRadius,
    /// Top-right corner.
    pub top_right: CornerRadius,
    /// Bottom-left corner.
    pub bottom_left: CornerRadius,
    /// Bottom-right corner.
    pub bottom_right: CornerRadius,
}

impl CornerRadii {
    /// Square corners.
    pub const ZERO: Self = Self::uniform(Size::ZERO);

    /// Create radii from the four corners.
    #[must_use]
    pub const fn new(
        top_left: CornerRadius,
        top_right: CornerRadius,
        bottom_left: CornerRadius,
        bottom_right: CornerRadius,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// The same radius on every corner.
    #[must_use]
    pub const fn uniform(radius: CornerRadius) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// A circular radius of `radius` on every corner.
    #[must_use]
    pub const fn circular(radius: f32) -> Self {
        Self::uniform(Size::new(radius, radius))
    }

    /// True if any corner has a non-zero component.
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        !(self.top_left.is_zero()
            && self.top_right.is_zero()
            && self.bottom_left.is_zero()
            && self.bottom_right.is_zero())
    }

    /// [§ 5.2 Corner Shaping](https://www.w3.org/TR/css-backgrounds-3/#corner-shaping)
    ///
    /// Clamp every component into the box: horizontal components to
    /// `[0, size.width]`, vertical components to `[0, size.height]`.
    ///
    /// Negative or NaN components resolve to zero. No overlap resolution
    /// happens here; see [`Self::constrained_to`].
    #[must_use]
    pub fn resolve(self, size: Size) -> Self {
        let clamp = |radius: CornerRadius| {
            Size::new(
                clamp_component(radius.width, size.width),
                clamp_component(radius.height, size.height),
            )
        };
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }

    /// [§ 5.2 Corner Shaping](https://www.w3.org/TR/css-backgrounds-3/#corner-shaping)
    ///
    /// "The padding edge (inner border) radius is the outer border radius
    /// minus the corresponding border thickness. In the case where this
    /// results in a negative value, the inner radius is zero."
    ///
    /// Horizontal components shrink by the left/right width of their side,
    /// vertical components by the top/bottom width.
    #[must_use]
    pub fn shrunk_by(self, widths: EdgeSizes) -> Self {
        let inner = |length: f32, width: f32| (length - width).max(0.0);
        Self {
            top_left: Size::new(
                inner(self.top_left.width, widths.left),
                inner(self.top_left.height, widths.top),
            ),
            top_right: Size::new(
                inner(self.top_right.width, widths.right),
                inner(self.top_right.height, widths.top),
            ),
            bottom_left: Size::new(
                inner(self.bottom_left.width, widths.left),
                inner(self.bottom_left.height, widths.bottom),
            ),
            bottom_right: Size::new(
                inner(self.bottom_right.width, widths.right),
                inner(self.bottom_right.height, widths.bottom),
            ),
        }
    }

    /// Multiply every radius by `factor`.
    ///
    /// A corner left with a zero width or height is square, so both of its
    /// components are reset to zero.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |radius: CornerRadius| {
            let scaled = radius.scaled(factor);
            if scaled.width == 0.0 || scaled.height == 0.0 {
                Size::ZERO
            } else {
                scaled
            }
        };
        Self {
            top_left: scale(self.top_left),
            top_right: scale(self.top_right),
            bottom_left: scale(self.bottom_left),
            bottom_right: scale(self.bottom_right),
        }
    }

    /// [§ 5.5 Overlapping Curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)
    ///
    /// "Corner curves must not overlap: When the sum of any two adjacent
    /// border radii exceeds the size of the border box, UAs must
    /// proportionally reduce the used values of all border radii until none
    /// of them overlap."
    ///
    /// ```text
    /// f = min(width / (top_left.w + top_right.w),
    ///         width / (bottom_left.w + bottom_right.w),
    ///         height / (top_left.h + bottom_left.h),
    ///         height / (top_right.h + bottom_right.h))
    /// ```
    ///
    /// Only sums that exceed their edge contribute. When nothing overlaps the
    /// radii are returned unchanged.
    ///
    /// Constraining is idempotent: scaled radii may sum to a few ulps over
    /// their edge, and such sums count as fitting.
    #[must_use]
    pub fn constrained_to(self, size: Size) -> Self {
        fn scale_factor(radius_a: f32, radius_b: f32, edge_length: f32) -> f32 {
            let required = radius_a + radius_b;
            let slack = edge_length.abs() * 4.0 * f32::EPSILON + 4.0 * f32::from_bits(1);
            if required <= edge_length + slack || required <= 0.0 {
                1.0
            } else {
                edge_length.max(0.0) / required
            }
        }

        let top = scale_factor(self.top_left.width, self.top_right.width, size.width);
        let bottom = scale_factor(
            self.bottom_left.width,
            self.bottom_right.width,
            size.width,
        );
        let left = scale_factor(self.top_left.height, self.bottom_left.height, size.height);
        let right = scale_factor(
            self.top_right.height,
            self.bottom_right.height,
            size.height,
        );

        let factor = top.min(bottom).min(left).min(right);
        if factor < 1.0 {
            tracing::trace!(factor, "scaling overlapping corner radii");
            self.scaled(factor)
        } else {
            self
        }
    }

    /// [§ 5.4 Box fragmentation](https://www.w3.org/TR/css-break-3/#break-decoration)
    ///
    /// Keep only the corners that belong to the included logical edges of a
    /// fragment. The logical left edge owns the top-left corner plus the
    /// bottom-left (horizontal) or top-right (vertical) one; the logical
    /// right edge owns the bottom-right corner plus the top-right
    /// (horizontal) or bottom-left (vertical) one. Every other corner is
    /// square.
    #[must_use]
    pub fn including_logical_edges(
        self,
        mode: WritingMode,
        include_logical_left: bool,
        include_logical_right: bool,
    ) -> Self {
        let horizontal = mode.is_horizontal();
        let mut radii = Self::ZERO;
        if include_logical_left {
            radii.top_left = self.top_left;
            if horizontal {
                radii.bottom_left = self.bottom_left;
            } else {
                radii.top_right = self.top_right;
            }
        }
        if include_logical_right {
            radii.bottom_right = self.bottom_right;
            if horizontal {
                radii.top_right = self.top_right;
            } else {
                radii.bottom_left = self.bottom_left;
            }
        }
        radii
    }
}

/// Clamp one radius component into `[0, max]`.
fn clamp_component(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        tracing::debug!("NaN corner radius resolved to 0");
        return 0.0;
    }
    if value < 0.0 {
        tracing::debug!(value, "negative corner radius resolved to 0");
    }
    value.min(max.max(0.0)).max(0.0)
}
