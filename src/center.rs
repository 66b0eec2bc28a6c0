//! Centering movement for strips of variable-width columns.
//!
//! Nothing scrolls until the focused column has travelled to the viewport center; from then on
//! the view is pinned so the focused column stays centered.

use crate::{
    CarouselOptions, Column, FixedSpans, Position, ScrollMovement, SpanSource, ViewportMetrics,
};

/// Centering movement for any [`SpanSource`].
///
/// The focused column's own width decides where "centered" is. `distance` is
/// `min(0, center - offset)` where `offset` is `action_offset` plus the footprint of every
/// column before `focus`; the position is [`Position::Trailing`] until `offset` reaches the
/// center and [`Position::Centered`] afterwards.
///
/// Returns [`ScrollMovement::NEUTRAL`] if any of `orientation`, `unit_extent`, `margin` or
/// `inset` is unset.
pub fn center_scroll_spans<S>(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &S,
    focus: usize,
) -> ScrollMovement
where
    S: SpanSource + ?Sized,
{
    let Some(g) = options.resolve_spans("center::center_scroll") else {
        return ScrollMovement::NEUTRAL;
    };
    if focus >= spans.len() {
        cwarn!(focus, len = spans.len(), "center_scroll: focus out of range");
    }

    let active = f64::from(spans.span_or_zero(focus)) * g.unit_extent;
    let center = metrics.axis_center(g.orientation, active, g.inset);
    let offset = g.action_offset + spans.offset_of(focus, g.unit_extent, g.margin);
    settle(offset, center)
}

/// Centering movement for one [`Column`] descriptor per item.
pub fn center_scroll_columns(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    columns: &[Column],
    focus: usize,
) -> ScrollMovement {
    center_scroll_spans(metrics, options, columns, focus)
}

/// Centering movement for `count` columns that all span `span` units.
pub fn center_scroll_fixed(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    count: usize,
    span: u32,
    focus: usize,
) -> ScrollMovement {
    center_scroll_spans(metrics, options, &FixedSpans::new(count, span), focus)
}

/// Centering movement for a parallel array of spans.
pub fn center_scroll_variable(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &[u32],
    focus: usize,
) -> ScrollMovement {
    center_scroll_spans(metrics, options, spans, focus)
}

/// Pulls `offset` back to `anchor` once it has moved past it.
pub(crate) fn settle(offset: f64, anchor: f64) -> ScrollMovement {
    let distance = if offset > anchor { anchor - offset } else { 0.0 };
    let position = if offset < anchor {
        Position::Trailing
    } else {
        Position::Centered
    };
    ScrollMovement { distance, position }
}
