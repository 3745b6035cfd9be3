//! Core value types and the conversion error.

use core::fmt;
use core::ops::RangeInclusive;

/// An additive color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb8 {
    /// Red channel.
    pub red: u8,

    /// Green channel.
    pub green: u8,

    /// Blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// All channels off.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// All channels at full intensity.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the channels as `[red, green, blue]`.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        rgb.channels()
    }
}

/// A color in HSL notation.
///
/// Fields are public and unchecked; conversions back to RGB validate them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360]`.
    pub hue: f64,

    /// Saturation, `[0, 1]`.
    pub saturation: f64,

    /// Lightness, `[0, 1]`.
    pub lightness: f64,
}

impl Hsl {
    /// Creates an HSL triple without validating it.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// A color in HSV notation.
///
/// `value` is the brightest channel, unlike HSL's lightness which is the
/// midpoint of the brightest and darkest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    /// Hue angle in degrees, `[0, 360]`.
    pub hue: f64,

    /// Saturation, `[0, 1]`.
    pub saturation: f64,

    /// Value, `[0, 1]`.
    pub value: f64,
}

impl Hsv {
    /// Creates an HSV triple without validating it.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Names a field of an HSL or HSV triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Component {
    /// Hue angle, degrees.
    Hue,

    /// Saturation of HSL or HSV.
    Saturation,

    /// HSL lightness.
    Lightness,

    /// HSV value.
    Value,
}

impl Component {
    /// The closed interval of legal values for this component.
    pub const fn range(self) -> RangeInclusive<f64> {
        match self {
            Component::Hue => 0.0..=360.0,
            Component::Saturation | Component::Lightness | Component::Value => 0.0..=1.0,
        }
    }

    /// Lowercase field name.
    pub const fn name(self) -> &'static str {
        match self {
            Component::Hue => "hue",
            Component::Saturation => "saturation",
            Component::Lightness => "lightness",
            Component::Value => "value",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a hex string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// The digits (after the optional prefix) are not exactly six characters.
    #[error("expected 6 hex digits, found {found} characters")]
    Length {
        /// Number of characters left after stripping the prefix.
        found: usize,
    },

    /// A channel pair contains a character outside `[0-9a-fA-F]`.
    #[error("`{}{}` at offset {offset} is not a hex byte", .pair[0], .pair[1])]
    Digits {
        /// Character offset of the pair within the digits.
        offset: usize,
        /// The offending two characters.
        pair: [char; 2],
    },
}

/// Errors returned by conversions that accept free-form input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// An HSL/HSV component lies outside its domain.
    #[error(
        "{component} {value} is outside [{}, {}]",
        .component.range().start(),
        .component.range().end()
    )]
    OutOfRange {
        /// The offending field.
        component: Component,
        /// The rejected value.
        value: f64,
    },

    /// A hex string is not six hexadecimal digits.
    #[error("invalid hex color: {0}")]
    InvalidFormat(HexError),
}
