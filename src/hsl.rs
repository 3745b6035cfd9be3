//! Conversions between 8-bit RGB and HSL.

use crate::hue::{self, Extremes};
use crate::range::validate_hsl;
use crate::types::{ConversionError, Hsl, Rgb8};
use num_traits::float::FloatCore;

/// Converts an RGB triple to HSL.
///
/// Grays (`r == g == b`) get a hue and saturation of exactly zero.
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> Hsl {
    let Extremes {
        max,
        min,
        delta,
        hue,
    } = Extremes::of(Rgb8::new(red, green, blue));

    let lightness = (max + min) / 2.0;
    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, lightness);
    }

    // Float error can push this a hair past one when the brightest channel is 255.
    let saturation = (delta / (1.0 - FloatCore::abs(2.0 * lightness - 1.0))).min(1.0);

    Hsl::new(hue, saturation, lightness)
}

/// Converts an HSL triple to RGB.
///
/// Channels are rounded half away from zero.
///
/// # Errors
/// [`ConversionError::OutOfRange`] if hue is outside `[0, 360]` or saturation
/// or lightness is outside `[0, 1]`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Result<Rgb8, ConversionError> {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = validate_hsl(hue, saturation, lightness)?;

    let chroma = (1.0 - FloatCore::abs(2.0 * lightness - 1.0)) * saturation;
    let offset = lightness - chroma / 2.0;

    Ok(hue::to_rgb8(hue, chroma, offset))
}

impl Rgb8 {
    /// Converts this color to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.red, self.green, self.blue)
    }
}

impl Hsl {
    /// Converts this triple to RGB.
    ///
    /// # Errors
    /// [`ConversionError::OutOfRange`] if any component is outside its domain.
    #[inline]
    pub fn to_rgb(&self) -> Result<Rgb8, ConversionError> {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl From<Rgb8> for Hsl {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_hsl()
    }
}

impl TryFrom<Hsl> for Rgb8 {
    type Error = ConversionError;

    fn try_from(hsl: Hsl) -> Result<Self, Self::Error> {
        hsl.to_rgb()
    }
}
