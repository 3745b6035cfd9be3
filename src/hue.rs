//! Hue geometry shared by the HSL and HSV converters.
//!
//! Both notations describe a color by its position on the same hue circle.
//! They differ only in how the chroma and the offset added to every channel
//! are derived, so the forward hue formula and the inverse sector table
//! live here.

use crate::types::Rgb8;
use num_traits::float::FloatCore;

/// Normalized extremes of an RGB triple together with its hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Extremes {
    /// Brightest channel, `[0, 1]`.
    pub max: f64,
    /// Darkest channel, `[0, 1]`.
    pub min: f64,
    /// `max - min`; zero for grays.
    pub delta: f64,
    /// Hue in degrees, zero for grays.
    pub hue: f64,
}

impl Extremes {
    pub(crate) fn of(rgb: Rgb8) -> Self {
        let red = f64::from(rgb.red) / 255.0;
        let green = f64::from(rgb.green) / 255.0;
        let blue = f64::from(rgb.blue) / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else {
            let sextant = if max == red {
                ((green - blue) / delta) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            let hue = 60.0 * sextant;
            if hue < 0.0 { hue + 360.0 } else { hue }
        };

        Self {
            max,
            min,
            delta,
            hue,
        }
    }
}

/// Which intermediate value lands in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    /// The full chroma `C`.
    Chroma,
    /// The secondary component `X`.
    Second,
    /// Nothing beyond the shared offset.
    Zero,
}

/// A 60-degree slice `[start, end)` of the hue circle.
#[derive(Debug, Clone, Copy)]
struct Sector {
    start: f64,
    end: f64,
    /// Assignment for red, green and blue.
    parts: [Part; 3],
}

const SECTORS: [Sector; 6] = [
    Sector { start: 0.0, end: 60.0, parts: [Part::Chroma, Part::Second, Part::Zero] },
    Sector { start: 60.0, end: 120.0, parts: [Part::Second, Part::Chroma, Part::Zero] },
    Sector { start: 120.0, end: 180.0, parts: [Part::Zero, Part::Chroma, Part::Second] },
    Sector { start: 180.0, end: 240.0, parts: [Part::Zero, Part::Second, Part::Chroma] },
    Sector { start: 240.0, end: 300.0, parts: [Part::Second, Part::Zero, Part::Chroma] },
    Sector { start: 300.0, end: 360.0, parts: [Part::Chroma, Part::Zero, Part::Second] },
];

fn sector(hue: f64) -> &'static Sector {
    SECTORS
        .iter()
        .find(|s| (s.start..s.end).contains(&hue))
        .unwrap_or(&SECTORS[0])
}

/// Secondary component `X = C * (1 - |(H / 60) mod 2 - 1|)`.
#[inline]
pub(crate) fn second(hue: f64, chroma: f64) -> f64 {
    chroma * (1.0 - FloatCore::abs((hue / 60.0) % 2.0 - 1.0))
}

/// Maps a validated hue, chroma and offset back to 8-bit channels.
///
/// A hue of exactly 360 wraps to 0.
pub(crate) fn to_rgb8(hue: f64, chroma: f64, offset: f64) -> Rgb8 {
    let hue = if hue >= 360.0 { hue - 360.0 } else { hue };
    let second = second(hue, chroma);

    let [red, green, blue] = sector(hue).parts.map(|part| {
        let primed = match part {
            Part::Chroma => chroma,
            Part::Second => second,
            Part::Zero => 0.0,
        };
        quantize(primed + offset)
    });

    Rgb8::new(red, green, blue)
}

/// Scales a unit value to a channel, rounding half away from zero.
#[inline]
pub(crate) fn quantize(unit: f64) -> u8 {
    FloatCore::round(unit * 255.0).clamp(0.0, 255.0) as u8
}
