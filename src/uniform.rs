//! Movement for carousels whose items all share one extent.

use crate::num;
use crate::{CarouselOptions, ViewportMetrics};

/// Movement that keeps the focused item centered once it passes the viewport center.
///
/// The leading edge of item `focus` sits at `focus * (extent + margin) + margin`. While that
/// edge is at or before the center point nothing moves; after that the content shifts left (or
/// up) by exactly the overshoot.
///
/// Returns 0 if `orientation`, `unit_extent` or `margin` is unset.
pub fn center_scroll(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    focus: usize,
) -> f64 {
    let Some(g) = options.resolve_uniform("uniform::center_scroll") else {
        return 0.0;
    };
    let center = metrics.axis_center(g.orientation, g.unit_extent, g.inset);
    let stride = g.unit_extent + g.margin;
    pull_to_center(focus as f64 * stride + g.margin, center)
}

/// [`center_scroll`] with an end-of-list clamp for a list of `size` items.
///
/// Once the focus enters the trailing run of items that fits behind the center point, the
/// movement stops growing and is corrected so the last item's trailing edge lines up with the
/// viewport edge instead of exposing blank space. A list that fits in the viewport never moves.
///
/// Returns 0 if `orientation`, `unit_extent` or `margin` is unset.
pub fn boundary_scroll(
    metrics: &impl ViewportMetrics,
    options: &CarouselOptions,
    focus: usize,
    size: usize,
) -> f64 {
    let Some(g) = options.resolve_uniform("uniform::boundary_scroll") else {
        return 0.0;
    };
    let stride = g.unit_extent + g.margin;
    if size as f64 * stride <= metrics.axis_extent(g.orientation, g.inset) {
        ctrace!(size, "uniform::boundary_scroll: list fits in viewport");
        return 0.0;
    }

    let center = metrics.axis_center(g.orientation, g.unit_extent, g.inset);
    let end_count = num::ceil(center / stride);
    // May be negative when the trailing run is longer than the list itself.
    let last_static = size as f64 - end_count;
    let overflow = end_count * stride - center - g.unit_extent;

    let focus = focus as f64;
    let scroll_focus = focus.min(last_static);
    let mut movement = pull_to_center(scroll_focus * stride + g.margin, center);
    if focus >= last_static {
        movement -= overflow;
    }
    ctrace!(
        focus,
        last_static,
        overflow,
        movement,
        "uniform::boundary_scroll"
    );
    movement
}

#[inline]
fn pull_to_center(leading_edge: f64, center: f64) -> f64 {
    if leading_edge > center {
        center - leading_edge
    } else {
        0.0
    }
}
