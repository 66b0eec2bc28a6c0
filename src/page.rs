//! One-screen-at-a-time movement.
//!
//! Paging uses the boundary clamp against the whole visible extent rather than the space behind
//! the center point, and starts scrolling as soon as the offset passes the first margin.

use crate::boundary::clamped_scroll;
use crate::{CarouselOptions, Column, FixedSpans, ScrollMovement, SpanSource, ViewportMetrics};

/// Page movement for any [`SpanSource`].
///
/// Returns [`ScrollMovement::NEUTRAL`] if any of `orientation`, `unit_extent`, `margin` or
/// `inset` is unset, or if `spans` is empty.
pub fn page_scroll_spans<S>(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &S,
    focus: usize,
) -> ScrollMovement
where
    S: SpanSource + ?Sized,
{
    let Some(g) = options.resolve_spans("page::page_scroll") else {
        return ScrollMovement::NEUTRAL;
    };
    if spans.is_empty() {
        return ScrollMovement::NEUTRAL;
    }

    let extent = metrics.axis_extent(g.orientation, g.inset);
    clamped_scroll(spans, &g, focus, g.margin, extent, extent)
}

/// Page movement for one [`Column`] descriptor per item.
pub fn page_scroll(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    columns: &[Column],
    focus: usize,
) -> ScrollMovement {
    page_scroll_spans(metrics, options, columns, focus)
}

/// Page movement for `count` columns that all span `span` units.
pub fn page_scroll_fixed(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    count: usize,
    span: u32,
    focus: usize,
) -> ScrollMovement {
    page_scroll_spans(metrics, options, &FixedSpans::new(count, span), focus)
}

/// Page movement for a parallel array of spans.
pub fn page_scroll_variable(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    spans: &[u32],
    focus: usize,
) -> ScrollMovement {
    page_scroll_spans(metrics, options, spans, focus)
}
