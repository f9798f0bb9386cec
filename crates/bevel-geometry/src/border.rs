//! Border edges
//!
//! [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
//!
//! A [`BorderSpec`] holds the computed width, style and color of each
//! physical side. [`resolve_edges`] turns it into four [`ResolvedEdge`]s
//! that say which sides a rasterizer should actually draw.

use std::ops::Index;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::color::Rgba;
use crate::geometry::EdgeSizes;
use crate::writing_mode::{PhysicalSide, WritingMode};

/// [§ 4.2 Line Patterns: the 'border-style' properties](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// The style tag is handed to the rasterizer unchanged; this crate only
/// uses it to decide visibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BorderStyle {
    /// "No border. Color and width are ignored (i.e., the border has width 0)."
    #[default]
    None,
    /// "Same as 'none', but has different behavior in the border conflict
    /// resolution rules for border-collapsed tables."
    Hidden,
    /// "A single line segment."
    Solid,
    /// "Two parallel solid lines with some space between them."
    Double,
    /// "A series of square-ended dashes."
    Dashed,
    /// "A series of round dots."
    Dotted,
    /// "Looks as if the content on the inside of the border is sunken into
    /// the canvas."
    Inset,
    /// "Looks as if the content on the inside of the border is coming out of
    /// the canvas."
    Outset,
    /// "Looks as if it were carved in the canvas."
    Groove,
    /// "Looks as if it were coming out of the canvas."
    Ridge,
}

impl BorderStyle {
    /// False for `none` and `hidden`, which never paint anything.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// Width, style and color of one physical side.
///
/// The default is the initial value of every border property except width:
/// zero width, `none`, opaque black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSpec {
    /// [§ 4.3 'border-width'](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    pub width: f32,
    /// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
    pub style: BorderStyle,
    /// [§ 4.1 'border-color'](https://www.w3.org/TR/css-backgrounds-3/#border-color)
    pub color: Rgba,
}

impl EdgeSpec {
    /// Create an edge from its three properties.
    #[must_use]
    pub const fn new(width: f32, style: BorderStyle, color: Rgba) -> Self {
        Self {
            width,
            style,
            color,
        }
    }
}

/// Border properties for the four physical sides of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BorderSpec {
    /// Top side.
    pub top: EdgeSpec,
    /// Right side.
    pub right: EdgeSpec,
    /// Bottom side.
    pub bottom: EdgeSpec,
    /// Left side.
    pub left: EdgeSpec,
}

impl BorderSpec {
    /// Create a border from its sides in top, right, bottom, left order.
    #[must_use]
    pub const fn new(top: EdgeSpec, right: EdgeSpec, bottom: EdgeSpec, left: EdgeSpec) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// [§ 4.4 'border' shorthand](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    ///
    /// The same edge on all four sides.
    #[must_use]
    pub const fn uniform(edge: EdgeSpec) -> Self {
        Self::new(edge, edge, edge, edge)
    }

    /// The edge on `side`.
    #[must_use]
    pub const fn edge(&self, side: PhysicalSide) -> &EdgeSpec {
        match side {
            PhysicalSide::Top => &self.top,
            PhysicalSide::Right => &self.right,
            PhysicalSide::Bottom => &self.bottom,
            PhysicalSide::Left => &self.left,
        }
    }

    /// Border widths as per-side sizes.
    #[must_use]
    pub const fn widths(&self) -> EdgeSizes {
        EdgeSizes::new(
            self.top.width,
            self.right.width,
            self.bottom.width,
            self.left.width,
        )
    }
}

/// One side of a border as the rasterizer should see it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedEdge {
    /// Used width, never negative.
    pub width: f32,
    /// Style tag passed through from the [`EdgeSpec`].
    pub style: BorderStyle,
    /// Color passed through from the [`EdgeSpec`].
    pub color: Rgba,
    /// Whether the side paints at all.
    pub visible: bool,
}

impl ResolvedEdge {
    /// Resolve one side.
    ///
    /// The side is visible only if it is `included` by the fragment's logical
    /// edges, its width is positive and its style is neither `none` nor
    /// `hidden`.
    #[must_use]
    pub fn new(edge: &EdgeSpec, included: bool) -> Self {
        let width = if edge.width.is_nan() || edge.width < 0.0 {
            tracing::debug!(width = edge.width, "invalid border width resolved to 0");
            0.0
        } else {
            edge.width
        };
        Self {
            width,
            style: edge.style,
            color: edge.color,
            visible: included && width > 0.0 && edge.style.is_visible(),
        }
    }

    /// True if this side shares width, style and color with `other`.
    #[must_use]
    pub fn same_appearance(&self, other: &Self) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.style == other.style
            && self.color == other.color
    }
}

/// The four resolved sides of a border, indexable by [`PhysicalSide`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedEdges {
    /// Top side.
    pub top: ResolvedEdge,
    /// Right side.
    pub right: ResolvedEdge,
    /// Bottom side.
    pub bottom: ResolvedEdge,
    /// Left side.
    pub left: ResolvedEdge,
}

impl ResolvedEdges {
    /// Iterate `(side, edge)` pairs in top, right, bottom, left order.
    pub fn iter(&self) -> impl Iterator<Item = (PhysicalSide, &ResolvedEdge)> {
        PhysicalSide::ALL.into_iter().map(move |side| (side, &self[side]))
    }

    /// Used widths, with invisible sides contributing zero.
    #[must_use]
    pub fn visible_widths(&self) -> EdgeSizes {
        let width = |edge: &ResolvedEdge| if edge.visible { edge.width } else { 0.0 };
        EdgeSizes::new(
            width(&self.top),
            width(&self.right),
            width(&self.bottom),
            width(&self.left),
        )
    }
}

impl Index<PhysicalSide> for ResolvedEdges {
    type Output = ResolvedEdge;

    fn index(&self, side: PhysicalSide) -> &ResolvedEdge {
        match side {
            PhysicalSide::Top => &self.top,
            PhysicalSide::Right => &self.right,
            PhysicalSide::Bottom => &self.bottom,
            PhysicalSide::Left => &self.left,
        }
    }
}

/// Resolve the four physical sides of `spec`.
///
/// [§ 5.4 Box fragmentation](https://www.w3.org/TR/css-break-3/#break-decoration)
///
/// `include_logical_left` and `include_logical_right` say whether this box
/// fragment carries its inline-start and inline-end edges (a box split over
/// several lines or columns only draws them on the first and last fragment).
/// See [`WritingMode::includes_side`] for the mapping to physical sides.
#[must_use]
pub fn resolve_edges(
    spec: &BorderSpec,
    mode: WritingMode,
    include_logical_left: bool,
    include_logical_right: bool,
) -> ResolvedEdges {
    let resolve = |side: PhysicalSide| {
        ResolvedEdge::new(
            spec.edge(side),
            mode.includes_side(side, include_logical_left, include_logical_right),
        )
    };
    ResolvedEdges {
        top: resolve(PhysicalSide::Top),
        right: resolve(PhysicalSide::Right),
        bottom: resolve(PhysicalSide::Bottom),
        left: resolve(PhysicalSide::Left),
    }
}
