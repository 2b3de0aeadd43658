//! The per-family construction seam, plus the parameter checks builders share.

use crate::bundle::ComponentBundle;
use crate::domain::Family;
use crate::error::ComponentError;
use std::fmt::Debug;

/// Constructs the four components of exactly one family.
///
/// Builders are created from a configuration snapshot and never fail to construct;
/// validation happens in [`VariantBuilder::build`], which yields a whole bundle or nothing.
pub trait VariantBuilder: Debug + Send + Sync {
    fn family(&self) -> Family;

    /// # Errors
    /// Returns the first invalid parameter, or an assembly failure.
    fn build(&self) -> Result<ComponentBundle, ComponentError>;
}

/// # Errors
/// [`ComponentError::InvalidParameter`] unless `value` is finite and `> 0`.
pub fn positive(name: &'static str, value: f64) -> Result<f64, ComponentError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ComponentError::invalid(name, value, "must be positive"))
    }
}

/// # Errors
/// [`ComponentError::InvalidParameter`] unless `value` is finite and `>= 0`.
pub fn non_negative(name: &'static str, value: f64) -> Result<f64, ComponentError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ComponentError::invalid(name, value, "must not be negative"))
    }
}

/// # Errors
/// [`ComponentError::InvalidParameter`] unless `value` is finite.
pub fn finite(name: &'static str, value: f64) -> Result<f64, ComponentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComponentError::invalid(name, value, "must be finite"))
    }
}

/// # Errors
/// [`ComponentError::InvalidParameter`] when `value > bound`.
pub fn at_most(
    name: &'static str,
    value: f64,
    bound: f64,
    reason: &'static str,
) -> Result<f64, ComponentError> {
    if value <= bound { Ok(value) } else { Err(ComponentError::invalid(name, value, reason)) }
}
