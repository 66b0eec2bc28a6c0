use crate::SpanSource;

/// The static region at the end of a strip and how far its measured extent falls short of the
/// space it has to fill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TailClamp {
    /// First index of the region that never scrolls further once focused.
    pub last_static_index: usize,
    /// Measured extent of `last_static_index..len`.
    pub tail_extent: f64,
    /// `threshold - tail_extent`: added back once the clamp engages so the final item ends
    /// flush with the viewport edge.
    pub overflow: f64,
}

impl TailClamp {
    /// Measures the tail of `spans` against `threshold` pixels of trailing space.
    ///
    /// The backward scan keeps adding items while the running total is still within
    /// `threshold`; `last_static_index` ends up one past the last item it added. Because item
    /// widths differ, that crossing point is only an estimate, so the region after it is
    /// measured again on its own.
    pub fn scan<S>(spans: &S, unit: f64, margin: f64, threshold: f64) -> Self
    where
        S: SpanSource + ?Sized,
    {
        let len = spans.len();

        let mut running = 0.0;
        let mut last_static_index = 0;
        for i in (0..len).rev() {
            if running > threshold {
                break;
            }
            running += spans.tail_extent_of(i, unit, margin);
            last_static_index = i + 1;
        }

        let tail_extent: f64 = (last_static_index..len)
            .rev()
            .map(|i| spans.tail_extent_of(i, unit, margin))
            .sum();

        Self {
            last_static_index,
            tail_extent,
            overflow: threshold - tail_extent,
        }
    }

    /// Whether `focus` lies inside the static region.
    #[inline]
    pub fn clamps(&self, focus: usize) -> bool {
        focus >= self.last_static_index
    }
}
