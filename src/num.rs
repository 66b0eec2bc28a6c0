//! Rounding helpers that also work without `std`.

#[cfg(feature = "std")]
#[inline]
pub(crate) fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}
