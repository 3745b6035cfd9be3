//! Shared test infrastructure for colorconv integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use colorconv::{HostColor, Rgb8};

// ============================================================================
// Sampling
// ============================================================================

/// Dense but tractable sample of the RGB cube: red every 7, green every 5,
/// blue every 3.
pub fn rgb_samples() -> impl Iterator<Item = Rgb8> {
    (0..=255u8).step_by(7).flat_map(|red| {
        (0..=255u8).step_by(5).flat_map(move |green| {
            (0..=255u8)
                .step_by(3)
                .map(move |blue| Rgb8::new(red, green, blue))
        })
    })
}

// ============================================================================
// Mock Host Color
// ============================================================================

/// Host color with 16-bit channels, as some imaging libraries store them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideColor {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl HostColor for WideColor {
    fn to_rgba8(&self) -> (Rgb8, u8) {
        let narrow = |c: u16| (c >> 8) as u8;
        (
            Rgb8::new(narrow(self.r), narrow(self.g), narrow(self.b)),
            narrow(self.a),
        )
    }

    fn from_rgba8(rgb: Rgb8, alpha: u8) -> Self {
        let widen = |c: u8| u16::from(c) * 0x101;
        WideColor {
            r: widen(rgb.red),
            g: widen(rgb.green),
            b: widen(rgb.blue),
            a: widen(alpha),
        }
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Absolute difference between two channels
pub fn delta(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

/// Largest per-channel difference between two colors
pub fn max_channel_delta(a: Rgb8, b: Rgb8) -> u8 {
    delta(a.red, b.red)
        .max(delta(a.green, b.green))
        .max(delta(a.blue, b.blue))
}

/// Assert two colors agree within `tolerance` on every channel
pub fn assert_within(expected: Rgb8, actual: Rgb8, tolerance: u8, context: impl core::fmt::Debug) {
    assert!(
        max_channel_delta(expected, actual) <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance}) via {context:?}"
    );
}
