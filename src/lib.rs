#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb8`**: Three 8-bit channels; every value is legal, so RGB-consuming conversions cannot fail
//! - **`Hsl`** / **`Hsv`**: Hue in degrees plus two unit components; checked before converting back
//! - **`HexCode`**: An inline `0xRRGGBB` string produced by `rgb_to_hex`
//! - **`Gray`**: A single luminance channel from weighted or averaged RGB
//! - **`HostColor`**: Trait to implement for your imaging library's color type
//! - **`ConversionError`**: `OutOfRange` for bad HSL/HSV input, `InvalidFormat` for bad hex
//!
//! Channels coming back from HSL or HSV are rounded half away from zero, so a
//! forward conversion followed by its inverse lands within one step of the
//! original channel.

// Re-export palette's sRGB types for user convenience
pub use palette::{Srgb, Srgba};

pub mod types;
pub mod range;
pub mod hsl;
pub mod hsv;
pub mod hex;
pub mod gray;
pub mod host;
mod hue;

pub use types::{Component, ConversionError, HexError, Hsl, Hsv, Rgb8};
pub use range::{validate_hsl, validate_hsv};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use hex::{HexCode, hex_to_rgb, rgb_to_hex};
pub use gray::{Gray, rgb_to_gray_average, rgb_to_gray_with_weight};
pub use host::{
    HostColor, color_to_gray, color_to_hex, color_to_hsl, color_to_hsv, hex_to_color,
    hsl_to_color, hsv_to_color,
};
