//! Centering movement with an end-of-list clamp for variable-width columns.

use crate::center::settle;
use crate::options::Geometry;
use crate::{
    CarouselOptions, Column, FixedSpans, Position, ScrollMovement, SpanSource, TailClamp,
    ViewportMetrics,
};

/// Centering movement for any [`SpanSource`], clamped so the end of the strip never leaves
/// blank space behind it.
///
/// The trailing space is whatever lies between the center point and the viewport end. The
/// columns that fit in it form the static region (see [`TailClamp`]); focusing any of them
/// leaves the view fully scrolled with [`Position::Leading`].
///
/// Returns [`ScrollMovement::NEUTRAL`] if any of `orientation`, `unit_extent`, `margin` or
/// `inset` is unset, or if `spans` is empty.
pub fn boundary_scroll_spans<S>(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &S,
    focus: usize,
) -> ScrollMovement
where
    S: SpanSource + ?Sized,
{
    let Some(g) = options.resolve_spans("boundary::boundary_scroll") else {
        return ScrollMovement::NEUTRAL;
    };
    if spans.is_empty() {
        return ScrollMovement::NEUTRAL;
    }

    let active = f64::from(spans.span_or_zero(focus)) * g.unit_extent;
    let center = metrics.axis_center(g.orientation, active, g.inset);
    let extent = metrics.axis_extent(g.orientation, g.inset);
    clamped_scroll(spans, &g, focus, center, extent - center, extent)
}

/// Boundary movement for one [`Column`] descriptor per item.
pub fn boundary_scroll_columns(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    columns: &[Column],
    focus: usize,
) -> ScrollMovement {
    boundary_scroll_spans(metrics, options, columns, focus)
}

/// Boundary movement for `count` columns that all span `span` units.
pub fn boundary_scroll_fixed(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    count: usize,
    span: u32,
    focus: usize,
) -> ScrollMovement {
    boundary_scroll_spans(metrics, options, &FixedSpans::new(count, span), focus)
}

/// Boundary movement for a parallel array of spans.
pub fn boundary_scroll_variable(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &[u32],
    focus: usize,
) -> ScrollMovement {
    boundary_scroll_spans(metrics, options, spans, focus)
}

/// The clamp algorithm shared by the boundary and page calculators.
///
/// `anchor` is where scrolling begins (`center` or `margin`), `trailing` the space the static
/// region has to fill and `extent` the visible axis extent.
pub(crate) fn clamped_scroll<S>(
    spans: &S,
    g: &Geometry,
    focus: usize,
    anchor: f64,
    trailing: f64,
    extent: f64,
) -> ScrollMovement
where
    S: SpanSource + ?Sized,
{
    let tail = TailClamp::scan(spans, g.unit_extent, g.margin, trailing);
    let scroll_focus = focus.min(tail.last_static_index);
    let offset = g.action_offset + spans.offset_of(scroll_focus, g.unit_extent, g.margin);

    let mut movement = settle(offset, anchor);
    if tail.clamps(focus) {
        movement.distance += tail.overflow;
        movement.position = Position::Leading;
    }
    // Drops the leading margin once the strip has moved off its start.
    if focus > 0 {
        movement.distance -= g.margin;
    }

    if spans.total_extent(g.unit_extent, g.margin) <= extent {
        movement.distance = 0.0;
    }
    ctrace!(
        focus,
        last_static_index = tail.last_static_index,
        overflow = tail.overflow,
        distance = movement.distance,
        "clamped_scroll"
    );
    movement
}
