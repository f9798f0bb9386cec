//! Rounded rectangles for the outer and inner border edges
//!
//! [§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners)
//!
//! ```text
//!   outer border edge ─┐
//!                      ▼
//!   ╭──────────────────────────╮
//!   │  ╭────────────────────╮  │
//!   │  │                    │◄─┼── inner border edge (padding edge)
//!   │  ╰────────────────────╯  │
//!   ╰──────────────────────────╯
//! ```
//!
//! The border is the area between the two. Both are pixel-snapped and both
//! have their radii constrained independently.

use serde::Serialize;

use crate::geometry::{EdgeSizes, Rect};
use crate::radius::CornerRadii;
use crate::writing_mode::{PhysicalSide, WritingMode};

/// A rectangle with four independent elliptical corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoundedRect {
    /// Bounding rectangle.
    pub rect: Rect,
    /// Corner radii.
    pub radii: CornerRadii,
}

impl RoundedRect {
    /// Attach `radii` to `rect` as given.
    #[must_use]
    pub const fn new(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// A rectangle with square corners.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self::new(rect, CornerRadii::ZERO)
    }

    /// True if any corner is rounded.
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        self.radii.is_rounded()
    }

    /// Scale the radii down so adjacent corners fit along every edge.
    ///
    /// See [`CornerRadii::constrained_to`].
    #[must_use]
    pub fn constrain_radii(self) -> Self {
        Self::new(self.rect, self.radii.constrained_to(self.rect.size()))
    }

    /// [§ 5.1 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
    ///
    /// The outer border edge: `border_box` snapped to the device grid, with
    /// `radii` attached and constrained.
    ///
    /// `radii` are expected to be resolved against the border box already
    /// (see [`CornerRadii::resolve`]).
    #[must_use]
    pub fn build_outer(border_box: Rect, radii: CornerRadii) -> Self {
        let rect = border_box.pixel_snapped();
        if !radii.is_rounded() {
            return Self::from_rect(rect);
        }
        Self::new(rect, radii).constrain_radii()
    }

    /// The outer border edge of a box fragment.
    ///
    /// Like [`Self::build_outer`], but corners that belong to an excluded
    /// logical edge are square (see [`CornerRadii::including_logical_edges`]).
    #[must_use]
    pub fn build_outer_for_fragment(
        border_box: Rect,
        radii: CornerRadii,
        mode: WritingMode,
        include_logical_left: bool,
        include_logical_right: bool,
    ) -> Self {
        Self::build_outer(
            border_box,
            radii.including_logical_edges(mode, include_logical_left, include_logical_right),
        )
    }

    /// [§ 5.2 Corner Shaping](https://www.w3.org/TR/css-backgrounds-3/#corner-shaping)
    ///
    /// The inner border edge of `border_box`.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Every side included by the fragment's logical edges is inset
    /// by its border width. Excluded sides get no inset, so the inner edge is
    /// flush with the outer one there.
    ///
    /// STEP 2: Continue with [`Self::build_inner_with_insets`].
    #[must_use]
    pub fn build_inner(
        border_box: Rect,
        edge_widths: EdgeSizes,
        radii: CornerRadii,
        mode: WritingMode,
        include_logical_left: bool,
        include_logical_right: bool,
    ) -> Self {
        let inset = |side: PhysicalSide, width: f32| {
            if mode.includes_side(side, include_logical_left, include_logical_right) {
                -width.max(0.0)
            } else {
                0.0
            }
        };
        let insets = EdgeSizes::new(
            inset(PhysicalSide::Top, edge_widths.top),
            inset(PhysicalSide::Right, edge_widths.right),
            inset(PhysicalSide::Bottom, edge_widths.bottom),
            inset(PhysicalSide::Left, edge_widths.left),
        );
        Self::build_inner_with_insets(
            border_box,
            insets,
            radii,
            mode,
            include_logical_left,
            include_logical_right,
        )
    }

    /// The inner edge of `border_box` for explicit signed `insets`.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Shrink the border box by the insets (negative values shrink)
    /// and snap it to the device grid. An inset larger than the box gives a
    /// zero-size rectangle.
    ///
    /// STEP 2: Build the fragment's outer edge. If it has square corners, so
    /// does the inner edge. With no insets the inner edge keeps the outer
    /// radii as they are.
    ///
    /// STEP 3: Otherwise shrink each outer radius by its adjacent insets,
    /// flooring at zero, and constrain the result against the inner
    /// rectangle.
    #[must_use]
    pub fn build_inner_with_insets(
        border_box: Rect,
        insets: EdgeSizes,
        radii: CornerRadii,
        mode: WritingMode,
        include_logical_left: bool,
        include_logical_right: bool,
    ) -> Self {
        // STEP 1
        let rect = border_box.expanded(insets).pixel_snapped();

        // STEP 2
        let outer = Self::build_outer_for_fragment(
            border_box,
            radii,
            mode,
            include_logical_left,
            include_logical_right,
        );
        if !outer.is_rounded() {
            return Self::from_rect(rect);
        }
        if insets == EdgeSizes::ZERO {
            return Self::new(rect, outer.radii);
        }

        // STEP 3: insets are negative, radii shrink by their magnitude.
        Self::new(rect, outer.radii.shrunk_by(insets.negated())).constrain_radii()
    }
}
