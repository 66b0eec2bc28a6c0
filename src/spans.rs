use alloc::vec::Vec;

use crate::Column;
use crate::num;

/// A read-only strip of items whose widths are expressed in grid units.
///
/// This is the single width-lookup capability shared by the centering, boundary, page and
/// stepper calculators. The crate ships three strategies:
///
/// - `[Column]` / `Vec<Column>`: one descriptor per item;
/// - [`FixedSpans`]: every item has the same span;
/// - `[u32]` / `Vec<u32>`: a parallel array of spans.
pub trait SpanSource {
    /// Number of items in the strip.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span of the item at `index`, or `None` past the end.
    fn span(&self, index: usize) -> Option<u32>;

    /// Span of the item at `index`, treating out-of-range items as zero-width.
    fn span_or_zero(&self, index: usize) -> u32 {
        self.span(index).unwrap_or(0)
    }

    /// Pixel footprint of one item, trailing margin included.
    fn extent_of(&self, index: usize, unit: f64, margin: f64) -> f64 {
        f64::from(self.span_or_zero(index)) * unit + margin
    }

    /// Pixel footprint used while measuring the clamped tail of the strip.
    ///
    /// Defaults to [`SpanSource::extent_of`]. Sources whose items are laid out on whole pixels
    /// override this so the tail measurement matches what is rendered.
    fn tail_extent_of(&self, index: usize, unit: f64, margin: f64) -> f64 {
        self.extent_of(index, unit, margin)
    }

    /// Sum of `extent_of` over `0..end` (clamped to the strip length).
    fn offset_of(&self, end: usize, unit: f64, margin: f64) -> f64 {
        (0..end.min(self.len()))
            .map(|i| self.extent_of(i, unit, margin))
            .sum()
    }

    /// Pixel footprint of the whole strip.
    fn total_extent(&self, unit: f64, margin: f64) -> f64 {
        self.offset_of(self.len(), unit, margin)
    }
}

impl SpanSource for [Column] {
    fn len(&self) -> usize {
        <[Column]>::len(self)
    }

    fn span(&self, index: usize) -> Option<u32> {
        self.get(index).map(|c| c.span)
    }

    // Columns are rendered on whole pixels.
    fn tail_extent_of(&self, index: usize, unit: f64, margin: f64) -> f64 {
        num::trunc(self.extent_of(index, unit, margin))
    }
}

impl SpanSource for [u32] {
    fn len(&self) -> usize {
        <[u32]>::len(self)
    }

    fn span(&self, index: usize) -> Option<u32> {
        self.get(index).copied()
    }
}

impl<T> SpanSource for Vec<T>
where
    [T]: SpanSource,
{
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn span(&self, index: usize) -> Option<u32> {
        self.as_slice().span(index)
    }

    fn tail_extent_of(&self, index: usize, unit: f64, margin: f64) -> f64 {
        self.as_slice().tail_extent_of(index, unit, margin)
    }
}

impl<S: SpanSource + ?Sized> SpanSource for &S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn span(&self, index: usize) -> Option<u32> {
        (**self).span(index)
    }

    fn tail_extent_of(&self, index: usize, unit: f64, margin: f64) -> f64 {
        (**self).tail_extent_of(index, unit, margin)
    }
}

/// `count` items that all share the same `span`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSpans {
    pub count: usize,
    pub span: u32,
}

impl FixedSpans {
    pub fn new(count: usize, span: u32) -> Self {
        Self { count, span }
    }
}

impl SpanSource for FixedSpans {
    fn len(&self) -> usize {
        self.count
    }

    fn span(&self, index: usize) -> Option<u32> {
        (index < self.count).then_some(self.span)
    }

    fn offset_of(&self, end: usize, unit: f64, margin: f64) -> f64 {
        let n = end.min(self.count);
        n as f64 * (f64::from(self.span) * unit + margin)
    }
}
