use crate::Orientation;

/// Geometry shared by every calculator call.
///
/// All fields are optional so callers can forward partially-populated application state. A
/// calculator that finds a required field unset returns its neutral result instead of failing:
///
/// - uniform calculators need `orientation`, `unit_extent` and `margin` (`inset` defaults to 0);
/// - column-span, page and boundary calculators additionally need `inset`.
///
/// `action_offset` is never required; it defaults to 0.
///
/// With `feature = "tracing"`, the first missing field is reported at `debug` level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub orientation: Option<Orientation>,
    /// Item extent in the uniform model, or the width of a single grid unit for column spans.
    pub unit_extent: Option<f64>,
    /// Space between neighbouring items.
    pub margin: Option<f64>,
    /// Extra space along the axis that lies outside the visible carousel.
    pub inset: Option<f64>,
    /// A pre-existing scroll bias added before the item extents are accumulated.
    pub action_offset: Option<f64>,
}

impl CarouselOptions {
    /// Creates options with the fields every calculator needs. `inset` is set to 0.
    pub fn new(orientation: Orientation, unit_extent: f64, margin: f64) -> Self {
        Self {
            orientation: Some(orientation),
            unit_extent: Some(unit_extent),
            margin: Some(margin),
            inset: Some(0.0),
            action_offset: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_unit_extent(mut self, unit_extent: f64) -> Self {
        self.unit_extent = Some(unit_extent);
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = Some(inset);
        self
    }

    pub fn with_action_offset(mut self, action_offset: f64) -> Self {
        self.action_offset = Some(action_offset);
        self
    }

    /// Returns `true` if every calculator in the crate can run with these options.
    pub fn is_complete(&self) -> bool {
        self.first_missing(true).is_none()
    }

    fn first_missing(&self, needs_inset: bool) -> Option<&'static str> {
        if self.orientation.is_none() {
            Some("orientation")
        } else if self.unit_extent.is_none() {
            Some("unit_extent")
        } else if self.margin.is_none() {
            Some("margin")
        } else if needs_inset && self.inset.is_none() {
            Some("inset")
        } else {
            None
        }
    }

    fn resolve(&self, op: &'static str, needs_inset: bool) -> Option<Geometry> {
        if let Some(missing) = self.first_missing(needs_inset) {
            cdebug!(op, missing, "missing required input, returning neutral movement");
            let _ = (op, missing);
            return None;
        }
        Some(Geometry {
            orientation: self.orientation?,
            unit_extent: self.unit_extent?,
            margin: self.margin?,
            inset: self.inset.unwrap_or(0.0),
            action_offset: self.action_offset.unwrap_or(0.0),
        })
    }

    pub(crate) fn resolve_uniform(&self, op: &'static str) -> Option<Geometry> {
        self.resolve(op, false)
    }

    pub(crate) fn resolve_spans(&self, op: &'static str) -> Option<Geometry> {
        self.resolve(op, true)
    }
}

/// Fully-populated options, produced once per call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub(crate) orientation: Orientation,
    pub(crate) unit_extent: f64,
    pub(crate) margin: f64,
    pub(crate) inset: f64,
    pub(crate) action_offset: f64,
}
