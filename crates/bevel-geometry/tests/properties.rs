//! Property tests for the border geometry invariants.

use bevel_geometry::{
    BorderPainter, BorderSpec, BorderStyle, CornerRadii, EdgeSizes, EdgeSpec, PhysicalSide, Rect,
    Rgba, RoundedRect, Size, WritingMode, resolve_edges,
};
use quickcheck_macros::quickcheck;

const MODES: [WritingMode; 3] = [
    WritingMode::HorizontalTb,
    WritingMode::VerticalRl,
    WritingMode::VerticalLr,
];

/// Map an arbitrary float into `[0, 10000)`.
fn sane(value: f32) -> f32 {
    if value.is_finite() {
        value.abs() % 10_000.0
    } else {
        0.0
    }
}

fn mode(index: u8) -> WritingMode {
    MODES[usize::from(index) % MODES.len()]
}

fn radii(values: [f32; 8]) -> CornerRadii {
    CornerRadii::new(
        Size::new(sane(values[0]), sane(values[1])),
        Size::new(sane(values[2]), sane(values[3])),
        Size::new(sane(values[4]), sane(values[5])),
        Size::new(sane(values[6]), sane(values[7])),
    )
}

fn fits(sum: f32, length: f32) -> bool {
    sum <= length * (1.0 + 1e-5) + 1e-3
}

#[quickcheck]
fn prop_resolved_radii_stay_inside_box(
    requested: (f32, f32, f32, f32, f32, f32, f32, f32),
    width: f32,
    height: f32,
) -> bool {
    let (a, b, c, d, e, f, g, h) = requested;
    // Raw values on purpose, NaN and negatives included.
    let requested = CornerRadii::new(
        Size::new(a, b),
        Size::new(c, d),
        Size::new(e, f),
        Size::new(g, h),
    );
    let size = Size::new(sane(width), sane(height));
    let resolved = requested.resolve(size);
    [
        resolved.top_left,
        resolved.top_right,
        resolved.bottom_left,
        resolved.bottom_right,
    ]
    .iter()
    .all(|corner| {
        (0.0..=size.width).contains(&corner.width) && (0.0..=size.height).contains(&corner.height)
    })
}

#[quickcheck]
fn prop_constrained_radii_fit_every_edge(
    requested: (f32, f32, f32, f32, f32, f32, f32, f32),
    width: f32,
    height: f32,
) -> bool {
    let (a, b, c, d, e, f, g, h) = requested;
    let size = Size::new(sane(width), sane(height));
    let r = radii([a, b, c, d, e, f, g, h]).constrained_to(size);
    fits(r.top_left.width + r.top_right.width, size.width)
        && fits(r.bottom_left.width + r.bottom_right.width, size.width)
        && fits(r.top_left.height + r.bottom_left.height, size.height)
        && fits(r.top_right.height + r.bottom_right.height, size.height)
}

#[quickcheck]
fn prop_excluded_logical_edges_never_paint(index: u8, width: f32) -> bool {
    let mode = mode(index);
    let spec = BorderSpec::uniform(EdgeSpec::new(
        sane(width) + 1.0,
        BorderStyle::Solid,
        Rgba::BLACK,
    ));
    let edges = resolve_edges(&spec, mode, false, false);
    let (inline_start, inline_end) = if mode.is_horizontal() {
        (PhysicalSide::Left, PhysicalSide::Right)
    } else {
        (PhysicalSide::Top, PhysicalSide::Bottom)
    };
    edges
        .iter()
        .all(|(side, edge)| edge.visible != (side == inline_start || side == inline_end))
}

#[quickcheck]
fn prop_zero_width_edge_is_never_visible(index: u8, left: bool, right: bool) -> bool {
    let spec = BorderSpec::uniform(EdgeSpec::new(0.0, BorderStyle::Solid, Rgba::BLACK));
    let edges = resolve_edges(&spec, mode(index), left, right);
    edges.iter().all(|(_, edge)| !edge.visible)
}

#[quickcheck]
fn prop_zero_widths_inner_matches_outer(
    origin: (f32, f32),
    size: (f32, f32),
    requested: (f32, f32, f32, f32, f32, f32, f32, f32),
    index: u8,
    left: bool,
    right: bool,
) -> bool {
    let (a, b, c, d, e, f, g, h) = requested;
    let border_box = Rect::new(sane(origin.0), sane(origin.1), sane(size.0), sane(size.1));
    let requested = radii([a, b, c, d, e, f, g, h]).resolve(border_box.size());
    let mode = mode(index);
    let outer = RoundedRect::build_outer_for_fragment(border_box, requested, mode, left, right);
    let inner =
        RoundedRect::build_inner(border_box, EdgeSizes::ZERO, requested, mode, left, right);
    inner == outer
}

#[quickcheck]
fn prop_constrain_is_idempotent(
    requested: (f32, f32, f32, f32, f32, f32, f32, f32),
    width: f32,
    height: f32,
) -> bool {
    let (a, b, c, d, e, f, g, h) = requested;
    let size = Size::new(sane(width), sane(height));
    let once = radii([a, b, c, d, e, f, g, h]).constrained_to(size);
    once.constrained_to(size) == once
}

#[quickcheck]
fn prop_planning_is_deterministic(
    bounds: (f32, f32, f32, f32),
    widths: (f32, f32, f32, f32),
    radius: f32,
    index: u8,
    left: bool,
    right: bool,
) -> bool {
    let edge = |width: f32| EdgeSpec::new(sane(width), BorderStyle::Dashed, Rgba::rgb(10, 20, 30));
    let spec = BorderSpec::new(edge(widths.0), edge(widths.1), edge(widths.2), edge(widths.3));
    let painter = BorderPainter::new(
        Rect::new(sane(bounds.0), sane(bounds.1), sane(bounds.2), sane(bounds.3)),
        &spec,
        CornerRadii::circular(sane(radius)),
        mode(index),
    )
    .include_logical_left_edge(left)
    .include_logical_right_edge(right);

    let first = painter.plan();
    let second = painter.plan();
    format!("{first:?}") == format!("{second:?}")
}
