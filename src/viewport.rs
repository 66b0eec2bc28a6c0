use crate::Orientation;

/// Supplies viewport geometry to the calculators.
///
/// Implementations are read-only from the crate's point of view: every query takes `&self` and
/// no calculator ever mutates or caches a provider.
///
/// `inset` is extra space along the axis that is consumed outside the visible carousel (side
/// panels, headers, padding). It is subtracted before any centering happens.
pub trait ViewportMetrics {
    /// Visible extent along `orientation` after removing `inset`.
    fn axis_extent(&self, orientation: Orientation, inset: f64) -> f64;

    /// The coordinate at which an item of `item_extent` must start to appear centered.
    fn axis_center(&self, orientation: Orientation, item_extent: f64, inset: f64) -> f64 {
        (self.axis_extent(orientation, inset) - item_extent) / 2.0
    }
}

impl<T: ViewportMetrics + ?Sized> ViewportMetrics for &T {
    fn axis_extent(&self, orientation: Orientation, inset: f64) -> f64 {
        (**self).axis_extent(orientation, inset)
    }

    fn axis_center(&self, orientation: Orientation, item_extent: f64, inset: f64) -> f64 {
        (**self).axis_center(orientation, item_extent, inset)
    }
}

/// A plain screen-sized viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raw size along `orientation`, ignoring any inset.
    pub fn main(&self, orientation: Orientation) -> f64 {
        orientation.select(self.width, self.height)
    }
}

impl ViewportMetrics for Viewport {
    fn axis_extent(&self, orientation: Orientation, inset: f64) -> f64 {
        self.main(orientation) - inset
    }
}
