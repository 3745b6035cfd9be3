//! Domain checks for HSL and HSV input.
//!
//! RGB needs no checking since every `u8` is a legal channel. Hue must lie in
//! `[0, 360]` and the remaining components in `[0, 1]`. NaN fails every check.

use crate::types::{Component, ConversionError, Hsl, Hsv};

/// Returns `value` if it lies within the domain of `component`.
///
/// # Errors
/// [`ConversionError::OutOfRange`] naming the component and the value.
#[inline]
pub fn check(component: Component, value: f64) -> Result<f64, ConversionError> {
    if component.range().contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::OutOfRange { component, value })
    }
}

/// Checks an HSL triple field by field, stopping at the first violation.
///
/// # Errors
/// [`ConversionError::OutOfRange`] for the first field outside its domain.
pub fn validate_hsl(hue: f64, saturation: f64, lightness: f64) -> Result<Hsl, ConversionError> {
    Ok(Hsl::new(
        check(Component::Hue, hue)?,
        check(Component::Saturation, saturation)?,
        check(Component::Lightness, lightness)?,
    ))
}

/// Checks an HSV triple field by field, stopping at the first violation.
///
/// # Errors
/// [`ConversionError::OutOfRange`] for the first field outside its domain.
pub fn validate_hsv(hue: f64, saturation: f64, value: f64) -> Result<Hsv, ConversionError> {
    Ok(Hsv::new(
        check(Component::Hue, hue)?,
        check(Component::Saturation, saturation)?,
        check(Component::Value, value)?,
    ))
}

impl Hsl {
    /// Checks that every component lies within its domain.
    ///
    /// # Errors
    /// [`ConversionError::OutOfRange`] for the first field outside its domain.
    pub fn validate(&self) -> Result<(), ConversionError> {
        validate_hsl(self.hue, self.saturation, self.lightness).map(|_| ())
    }
}

impl Hsv {
    /// Checks that every component lies within its domain.
    ///
    /// # Errors
    /// [`ConversionError::OutOfRange`] for the first field outside its domain.
    pub fn validate(&self) -> Result<(), ConversionError> {
        validate_hsv(self.hue, self.saturation, self.value).map(|_| ())
    }
}
