//! Border geometry for the Bevel border engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Edge resolution** ([§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders))
//!   - Logical-to-physical edge mapping per writing mode
//!   - Visibility of zero-width, `none` and `hidden` sides
//!
//! - **Corner radii** ([§ 5 Rounded Corners](https://www.w3.org/TR/css-backgrounds-3/#corners))
//!   - Clamping requested radii to the box
//!   - Inner radii derived from border widths
//!   - Uniform scaling of overlapping curves
//!
//! - **Rounded rectangles** for the outer and inner border edges, snapped to
//!   the device grid
//!
//! - **Paint plans** handed to an external rasterizer
//!
//! - Small utilities: color darkening and line intersection
//!
//! Everything here is a pure function over `Copy` value types. Nothing is
//! cached or shared between calls, so plans for different boxes can be
//! computed from any number of threads.
//!
//! # Not Implemented
//!
//! - Rasterization, anti-aliasing and clipping
//! - Per-style stroking (dashes, dots, double lines, 3D styles)
//! - Percentage radii (radii arrive as absolute lengths)

/// Border styles, per-side specs and edge resolution.
pub mod border;
/// sRGB colors and the darkening heuristic.
pub mod color;
/// Points, sizes, rectangles, pixel snapping and line intersection.
pub mod geometry;
/// The border painting pipeline and its output plan.
pub mod paint;
/// Corner radius resolution, shrinking and overlap constraint.
pub mod radius;
/// Outer and inner rounded rectangles.
pub mod rounded_rect;
/// Writing modes and physical sides.
pub mod writing_mode;

pub use border::{BorderSpec, BorderStyle, EdgeSpec, ResolvedEdge, ResolvedEdges, resolve_edges};
pub use color::{DARKENED_WHITE, Rgba};
pub use geometry::{EdgeSizes, Point, Rect, Size, find_intersection, snap_size_to_pixel};
pub use paint::{BorderPaintPlan, BorderPainter};
pub use radius::{CornerRadii, CornerRadius};
pub use rounded_rect::RoundedRect;
pub use writing_mode::{PhysicalSide, WritingMode};
