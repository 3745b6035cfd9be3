//! Hexadecimal encoding of RGB triples.
//!
//! Encoding always produces the lowercase `0xRRGGBB` form. Decoding accepts
//! six digits in either case, optionally behind a single `0x` or `#` prefix.

use core::fmt::{self, Write};
use core::ops::Deref;
use core::str::FromStr;

use crate::types::{ConversionError, HexError, Rgb8};

/// Length of an encoded color: the `0x` prefix plus six digits.
pub const HEX_CODE_LEN: usize = 8;

/// A `0xRRGGBB` string held inline, without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexCode(heapless::String<HEX_CODE_LEN>);

impl HexCode {
    /// Returns the encoded string.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes this code back to channels.
    #[inline]
    pub fn to_rgb(&self) -> Rgb8 {
        // Every HexCode is built by `rgb_to_hex`, so parsing cannot fail.
        hex_to_rgb(self.as_str()).unwrap_or_default()
    }
}

impl Deref for HexCode {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HexCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for HexCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HexCode {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

impl FromStr for HexCode {
    type Err = ConversionError;

    /// Parses any accepted spelling and re-encodes it in canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).map(Rgb8::to_hex)
    }
}

/// Encodes an RGB triple as `0xRRGGBB` with lowercase digits.
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> HexCode {
    let mut code = heapless::String::new();
    // Prefix plus three zero-padded bytes fills the buffer exactly.
    let _ = write!(code, "0x{red:02x}{green:02x}{blue:02x}");
    HexCode(code)
}

/// Decodes a six-digit hex color.
///
/// One leading `0x` or `#` is stripped if present; only one, and the match
/// is case-sensitive.
///
/// # Errors
/// [`ConversionError::InvalidFormat`] when the digits are not exactly six
/// characters or a pair is not a hex byte.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb8, ConversionError> {
    decode(hex).map_err(ConversionError::InvalidFormat)
}

fn decode(hex: &str) -> Result<Rgb8, HexError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix('#'))
        .unwrap_or(hex);

    let found = digits.chars().count();
    if found != 6 {
        return Err(HexError::Length { found });
    }

    let mut chars = digits.chars();
    let mut channels = [0u8; 3];
    for (index, channel) in channels.iter_mut().enumerate() {
        // Six characters were counted above.
        let pair = [
            chars.next().unwrap_or_default(),
            chars.next().unwrap_or_default(),
        ];
        *channel = byte(pair).ok_or(HexError::Digits {
            offset: index * 2,
            pair,
        })?;
    }

    Ok(Rgb8::from(channels))
}

fn byte([high, low]: [char; 2]) -> Option<u8> {
    let high = high.to_digit(16)?;
    let low = low.to_digit(16)?;
    u8::try_from((high << 4) | low).ok()
}

impl Rgb8 {
    /// Encodes this color as `0xRRGGBB`.
    #[inline]
    pub fn to_hex(self) -> HexCode {
        rgb_to_hex(self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb8 {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}
