//! Border painter - turns a box's border properties into a paint plan
//!
//! [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! The painter runs the whole geometry pipeline for one box, in order:
//!
//! ```text
//! radii ──► resolve ──┐
//!                     ├──► outer RoundedRect ──┐
//! spec ──► edges ─────┴──► inner RoundedRect ──┴──► BorderPaintPlan ──► rasterizer
//! ```
//!
//! The plan is renderer-agnostic: it says where the border is and which
//! sides paint with which style and color. Stroking dashed, double, groove
//! and similar styles is the rasterizer's job.

use serde::Serialize;

use crate::border::{BorderSpec, ResolvedEdge, ResolvedEdges, resolve_edges};
use crate::geometry::Rect;
use crate::radius::CornerRadii;
use crate::rounded_rect::RoundedRect;
use crate::writing_mode::{PhysicalSide, WritingMode};

/// Everything a rasterizer needs to draw one border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderPaintPlan {
    /// Outer border edge.
    pub outer: RoundedRect,
    /// Inner border edge.
    pub inner: RoundedRect,
    /// Per-side paint attributes.
    pub edges: ResolvedEdges,
}

impl BorderPaintPlan {
    /// True if no side is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_sides().next().is_none()
    }

    /// Visible sides in top, right, bottom, left order.
    pub fn visible_sides(&self) -> impl Iterator<Item = PhysicalSide> + '_ {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.visible)
            .map(|(side, _)| side)
    }

    /// The resolved edge for `side`.
    #[must_use]
    pub fn edge(&self, side: PhysicalSide) -> &ResolvedEdge {
        &self.edges[side]
    }

    /// True if at least one side is visible and all visible sides share
    /// width, style and color.
    ///
    /// Invisible sides have a used width of zero, so the area between
    /// [`Self::outer`] and [`Self::inner`] is then exactly the border and a
    /// rasterizer can fill it in one pass.
    #[must_use]
    pub fn has_uniform_edges(&self) -> bool {
        let mut visible = self.edges.iter().map(|(_, edge)| edge).filter(|edge| edge.visible);
        let Some(first) = visible.next() else {
            return false;
        };
        visible.all(|edge| edge.same_appearance(first))
    }
}

/// Computes the [`BorderPaintPlan`] of one box.
///
/// Both logical edges are included by default; a box fragment that does not
/// start or end the box turns them off with
/// [`Self::include_logical_left_edge`] / [`Self::include_logical_right_edge`].
#[derive(Debug, Clone, Copy)]
pub struct BorderPainter<'a> {
    /// The border box.
    border_box: Rect,
    /// Border properties of the box.
    spec: &'a BorderSpec,
    /// Requested corner radii, before resolution.
    radii: CornerRadii,
    /// Writing mode of the box.
    mode: WritingMode,
    /// Whether this fragment carries the inline-start edge.
    include_logical_left: bool,
    /// Whether this fragment carries the inline-end edge.
    include_logical_right: bool,
}

impl<'a> BorderPainter<'a> {
    /// Create a painter for `border_box` with both logical edges included.
    #[must_use]
    pub const fn new(
        border_box: Rect,
        spec: &'a BorderSpec,
        radii: CornerRadii,
        mode: WritingMode,
    ) -> Self {
        Self {
            border_box,
            spec,
            radii,
            mode,
            include_logical_left: true,
            include_logical_right: true,
        }
    }

    /// Set whether the fragment carries its logical left (inline-start) edge.
    #[must_use]
    pub const fn include_logical_left_edge(mut self, include: bool) -> Self {
        self.include_logical_left = include;
        self
    }

    /// Set whether the fragment carries its logical right (inline-end) edge.
    #[must_use]
    pub const fn include_logical_right_edge(mut self, include: bool) -> Self {
        self.include_logical_right = include;
        self
    }

    /// Run the pipeline.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Resolve the requested radii against the border box size.
    ///
    /// STEP 2: Resolve the four edges.
    ///
    /// STEP 3: Build the outer rounded rect.
    ///
    /// STEP 4: Build the inner rounded rect from the used border widths.
    /// [§ 4.3](https://www.w3.org/TR/css-backgrounds-3/#border-width): the
    /// used width of a `none` or `hidden` side is zero.
    #[must_use]
    pub fn plan(&self) -> BorderPaintPlan {
        // STEP 1
        let radii = self.radii.resolve(self.border_box.size());

        // STEP 2
        let edges = resolve_edges(
            self.spec,
            self.mode,
            self.include_logical_left,
            self.include_logical_right,
        );

        // STEP 3
        let outer = RoundedRect::build_outer_for_fragment(
            self.border_box,
            radii,
            self.mode,
            self.include_logical_left,
            self.include_logical_right,
        );

        // STEP 4: sides that do not paint have a used width of zero.
        let inner = RoundedRect::build_inner(
            self.border_box,
            edges.visible_widths(),
            radii,
            self.mode,
            self.include_logical_left,
            self.include_logical_right,
        );

        tracing::trace!(?outer, ?inner, "planned border");

        BorderPaintPlan {
            outer,
            inner,
            edges,
        }
    }
}
