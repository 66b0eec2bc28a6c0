//! Stateless scroll-offset math for focus-driven carousels.
//!
//! Given a focused item, the item widths, an orientation and the viewport geometry, the
//! calculators in this crate return the pixel movement that brings the focused item into view
//! without ever exposing blank space past either end of the list.
//!
//! - Uniform lists: [`uniform::center_scroll`] and [`uniform::boundary_scroll`].
//! - Column spans (items `span` grid units wide): [`center_scroll_spans`],
//!   [`boundary_scroll_spans`] and [`page_scroll_spans`], each with per-item, fixed and
//!   parallel-array variants.
//! - Focus stepping in grid units: [`next_focus_spans`].
//!
//! It is UI-agnostic and keeps no state between calls. The caller is expected to provide:
//! - viewport geometry through [`ViewportMetrics`] (or the plain [`Viewport`])
//! - the list metadata and the current focus
//! - the resulting movement to its own transform/animation layer
//!
//! Incomplete [`CarouselOptions`] never panic or error: the calculators return a neutral,
//! "no movement" result instead.
//!
//! ```
//! use carousel_calc::{CarouselOptions, Orientation, Viewport, uniform};
//!
//! let viewport = Viewport::new(900.0, 500.0);
//! let options = CarouselOptions::new(Orientation::Horizontal, 100.0, 10.0);
//!
//! // Item 3 starts at 340px, before the 400px center point.
//! assert_eq!(uniform::center_scroll(&viewport, &options, 3), 0.0);
//! // Item 6 starts at 670px and is pulled back to the center.
//! assert_eq!(uniform::center_scroll(&viewport, &options, 6), -270.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("carousel-calc requires either the `std` or `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod boundary;
mod center;
mod num;
mod options;
mod page;
mod spans;
mod stepper;
mod tail;
mod types;
pub mod uniform;
mod viewport;


pub use boundary::{
    boundary_scroll_columns, boundary_scroll_fixed, boundary_scroll_spans,
    boundary_scroll_variable,
};
pub use center::{
    center_scroll_columns, center_scroll_fixed, center_scroll_spans, center_scroll_variable,
};
pub use options::CarouselOptions;
pub use page::{page_scroll, page_scroll_fixed, page_scroll_spans, page_scroll_variable};
pub use spans::{FixedSpans, SpanSource};
pub use stepper::{
    PAGE_SPAN_BUDGET, next_focus, next_focus_fixed, next_focus_spans,
    next_focus_spans_with_budget, next_focus_variable,
};
pub use tail::TailClamp;
pub use types::{Column, Direction, Orientation, ParseTokenError, Position, ScrollMovement};
pub use viewport::{Viewport, ViewportMetrics};
