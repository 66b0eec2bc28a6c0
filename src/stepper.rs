//! How far one directional input moves the focus.
//!
//! Steppers work purely in grid units: a page is [`PAGE_SPAN_BUDGET`] units wide regardless of
//! the pixel geometry.

use crate::{Column, Direction, FixedSpans, SpanSource};

/// Grid units covered by one page step.
pub const PAGE_SPAN_BUDGET: u32 = 12;

/// Number of items one `direction` input should move past, starting at `focus`.
///
/// Items are consumed one by one (the focused item included) while the running span total is
/// still below [`PAGE_SPAN_BUDGET`]. [`Direction::Left`] walks `focus, focus - 1, .., 0`,
/// [`Direction::Right`] walks `focus..len`. Vertical directions never move the focus.
pub fn next_focus_spans<S>(spans: &S, focus: usize, direction: Direction) -> usize
where
    S: SpanSource + ?Sized,
{
    next_focus_spans_with_budget(spans, focus, direction, PAGE_SPAN_BUDGET)
}

/// [`next_focus_spans`] with a caller-chosen page budget.
pub fn next_focus_spans_with_budget<S>(
    spans: &S,
    focus: usize,
    direction: Direction,
    budget: u32,
) -> usize
where
    S: SpanSource + ?Sized,
{
    let len = spans.len();
    match direction {
        Direction::Right => consume(spans, focus..len, budget),
        Direction::Left if len > 0 => consume(spans, (0..=focus.min(len - 1)).rev(), budget),
        Direction::Left | Direction::Up | Direction::Down => 0,
    }
}

fn consume<S>(spans: &S, indices: impl Iterator<Item = usize>, budget: u32) -> usize
where
    S: SpanSource + ?Sized,
{
    let mut used = 0u32;
    let mut count = 0;
    for i in indices {
        if used >= budget {
            break;
        }
        used = used.saturating_add(spans.span_or_zero(i));
        count += 1;
    }
    count
}

/// Focus step for one [`Column`] descriptor per item.
pub fn next_focus(columns: &[Column], focus: usize, direction: Direction) -> usize {
    next_focus_spans(columns, focus, direction)
}

/// Focus step for `count` columns that all span `span` units.
pub fn next_focus_fixed(count: usize, focus: usize, direction: Direction, span: u32) -> usize {
    next_focus_spans(&FixedSpans::new(count, span), focus, direction)
}

/// Focus step for a parallel array of spans.
pub fn next_focus_variable(spans: &[u32], focus: usize, direction: Direction) -> usize {
    next_focus_spans(spans, focus, direction)
}
