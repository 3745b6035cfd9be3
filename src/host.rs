//! Adapters between the conversions and the embedding application's colors.
//!
//! Imaging libraries each bring their own color type. The [`HostColor`]
//! trait is the only thing the adapters need from one: read and write
//! 8-bit red, green, blue and alpha. Implementations are provided for
//! [`Rgb8`], plain arrays and the `palette` sRGB types.

use palette::{Srgb, Srgba};

use crate::gray::{Gray, rgb_to_gray_with_weight};
use crate::hex::{HexCode, hex_to_rgb};
use crate::hsl::hsl_to_rgb;
use crate::hsv::hsv_to_rgb;
use crate::types::{ConversionError, Hsl, Hsv, Rgb8};

/// Trait for abstracting a host color representation.
///
/// Implement this for your imaging library's color type to use it with the
/// `color_to_*` and `*_to_color` adapters.
pub trait HostColor: Sized {
    /// Returns the color's channels and its alpha.
    fn to_rgba8(&self) -> (Rgb8, u8);

    /// Builds a color from channels and alpha.
    ///
    /// Types without an alpha channel ignore `alpha`.
    fn from_rgba8(rgb: Rgb8, alpha: u8) -> Self;

    /// Returns the color's channels, discarding alpha.
    #[inline]
    fn to_rgb8(&self) -> Rgb8 {
        self.to_rgba8().0
    }
}

impl HostColor for Rgb8 {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        (*self, u8::MAX)
    }

    fn from_rgba8(rgb: Rgb8, _alpha: u8) -> Self {
        rgb
    }
}

impl HostColor for [u8; 3] {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        (Rgb8::from(*self), u8::MAX)
    }

    fn from_rgba8(rgb: Rgb8, _alpha: u8) -> Self {
        rgb.channels()
    }
}

impl HostColor for [u8; 4] {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        let [red, green, blue, alpha] = *self;
        (Rgb8::new(red, green, blue), alpha)
    }

    fn from_rgba8(rgb: Rgb8, alpha: u8) -> Self {
        [rgb.red, rgb.green, rgb.blue, alpha]
    }
}

impl HostColor for Srgb<u8> {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        (Rgb8::new(self.red, self.green, self.blue), u8::MAX)
    }

    fn from_rgba8(rgb: Rgb8, _alpha: u8) -> Self {
        Srgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl HostColor for Srgba<u8> {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        (Rgb8::new(self.red, self.green, self.blue), self.alpha)
    }

    fn from_rgba8(rgb: Rgb8, alpha: u8) -> Self {
        Srgba::new(rgb.red, rgb.green, rgb.blue, alpha)
    }
}

/// Components in the 0.0-1.0 range are quantized to 8 bits by palette.
impl HostColor for Srgb<f32> {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        let color: Srgb<u8> = self.into_format();
        color.to_rgba8()
    }

    fn from_rgba8(rgb: Rgb8, _alpha: u8) -> Self {
        Srgb::<u8>::from_rgba8(rgb, u8::MAX).into_format()
    }
}

impl HostColor for Srgba<f32> {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        let color: Srgba<u8> = self.into_format();
        color.to_rgba8()
    }

    fn from_rgba8(rgb: Rgb8, alpha: u8) -> Self {
        Srgba::<u8>::from_rgba8(rgb, alpha).into_format()
    }
}

impl From<Srgb<u8>> for Rgb8 {
    fn from(color: Srgb<u8>) -> Self {
        color.to_rgb8()
    }
}

impl From<Rgb8> for Srgb<u8> {
    fn from(rgb: Rgb8) -> Self {
        Srgb::from_rgba8(rgb, u8::MAX)
    }
}

/// Converts a host color to HSL, ignoring alpha.
#[inline]
pub fn color_to_hsl<C: HostColor>(color: &C) -> Hsl {
    color.to_rgb8().to_hsl()
}

/// Converts a host color to HSV, ignoring alpha.
#[inline]
pub fn color_to_hsv<C: HostColor>(color: &C) -> Hsv {
    color.to_rgb8().to_hsv()
}

/// Encodes a host color as `0xRRGGBB`, ignoring alpha.
#[inline]
pub fn color_to_hex<C: HostColor>(color: &C) -> HexCode {
    color.to_rgb8().to_hex()
}

/// Builds an opaque host color from HSL.
///
/// # Errors
/// [`ConversionError::OutOfRange`] if any component is outside its domain.
pub fn hsl_to_color<C: HostColor>(
    hue: f64,
    saturation: f64,
    lightness: f64,
) -> Result<C, ConversionError> {
    hsl_to_rgb(hue, saturation, lightness).map(opaque)
}

/// Builds an opaque host color from HSV.
///
/// # Errors
/// [`ConversionError::OutOfRange`] if any component is outside its domain.
pub fn hsv_to_color<C: HostColor>(hue: f64, saturation: f64, value: f64) -> Result<C, ConversionError> {
    hsv_to_rgb(hue, saturation, value).map(opaque)
}

/// Builds an opaque host color from a hex string.
///
/// # Errors
/// [`ConversionError::InvalidFormat`] if `hex` is not six hex digits behind
/// an optional `0x` or `#`.
pub fn hex_to_color<C: HostColor>(hex: &str) -> Result<C, ConversionError> {
    hex_to_rgb(hex).map(opaque)
}

/// Reduces a host color to gray with per-mille weights, keeping its alpha.
pub fn color_to_gray<C: HostColor>(
    color: &C,
    red_weight: u32,
    green_weight: u32,
    blue_weight: u32,
) -> C {
    let (rgb, alpha) = color.to_rgba8();
    let gray = rgb_to_gray_with_weight(
        rgb.red,
        rgb.green,
        rgb.blue,
        red_weight,
        green_weight,
        blue_weight,
    );
    C::from_rgba8(gray.to_rgb(), alpha)
}

impl Gray {
    /// Builds an opaque host color with the luminance in every channel.
    #[inline]
    pub fn to_color<C: HostColor>(self) -> C {
        opaque(self.to_rgb())
    }
}

#[inline]
fn opaque<C: HostColor>(rgb: Rgb8) -> C {
    C::from_rgba8(rgb, u8::MAX)
}
