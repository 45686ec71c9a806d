//! In-place distribution normalization.
//!
//! Rescales a bucket vector so it sums to 1 while preserving relative
//! proportions. A zero or non-finite total is reported to the caller as a
//! terminal computation fault, never smuggled out as NaN.

use thiserror::Error;

/// Failure modes for [`normalize_in_place`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Every bucket is exactly zero; relative proportions are undefined.
    #[error("cannot normalize: total probability mass is zero")]
    ZeroMass,

    /// The accumulated mass is NaN or infinite.
    #[error("cannot normalize: total probability mass is not finite")]
    NonFinite,
}

/// Rescale `values` so they sum to 1, preserving relative proportions.
///
/// Returns the pre-normalization total on success. An empty slice has zero
/// mass and is rejected.
pub fn normalize_in_place(values: &mut [f64]) -> Result<f64, NormalizeError> {
    let total: f64 = values.iter().sum();
    if !total.is_finite() {
        return Err(NormalizeError::NonFinite);
    }
    if total == 0.0 {
        return Err(NormalizeError::ZeroMass);
    }
    for value in values.iter_mut() {
        *value /= total;
    }
    Ok(total)
}
