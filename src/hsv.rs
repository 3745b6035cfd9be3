//! Conversions between 8-bit RGB and HSV.

use crate::hue::{self, Extremes};
use crate::range::validate_hsv;
use crate::types::{ConversionError, Hsv, Rgb8};

/// Converts an RGB triple to HSV.
///
/// Grays get a hue and saturation of exactly zero; black has zero saturation
/// too since it has no brightest channel to measure against.
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> Hsv {
    let Extremes { max, delta, hue, .. } = Extremes::of(Rgb8::new(red, green, blue));

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(hue, saturation, max)
}

/// Converts an HSV triple to RGB.
///
/// Channels are rounded half away from zero.
///
/// # Errors
/// [`ConversionError::OutOfRange`] if hue is outside `[0, 360]` or saturation
/// or value is outside `[0, 1]`.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Result<Rgb8, ConversionError> {
    let Hsv {
        hue,
        saturation,
        value,
    } = validate_hsv(hue, saturation, value)?;

    let chroma = value * saturation;

    Ok(hue::to_rgb8(hue, chroma, value - chroma))
}

impl Rgb8 {
    /// Converts this color to HSV.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.red, self.green, self.blue)
    }
}

impl Hsv {
    /// Converts this triple to RGB.
    ///
    /// # Errors
    /// [`ConversionError::OutOfRange`] if any component is outside its domain.
    #[inline]
    pub fn to_rgb(&self) -> Result<Rgb8, ConversionError> {
        hsv_to_rgb(self.hue, self.saturation, self.value)
    }
}

impl From<Rgb8> for Hsv {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_hsv()
    }
}

impl TryFrom<Hsv> for Rgb8 {
    type Error = ConversionError;

    fn try_from(hsv: Hsv) -> Result<Self, Self::Error> {
        hsv.to_rgb()
    }
}
