//! Grayscale reduction.

use crate::types::Rgb8;

/// A single luminance channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gray(pub u8);

impl Gray {
    /// Returns the luminance.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Replicates the luminance into all three channels.
    #[inline]
    pub const fn to_rgb(self) -> Rgb8 {
        Rgb8::new(self.0, self.0, self.0)
    }
}

impl From<Gray> for Rgb8 {
    fn from(gray: Gray) -> Self {
        gray.to_rgb()
    }
}

/// Weighted luminance `round((r*wr + g*wg + b*wb) / 1000)`.
///
/// Weights are per mille, e.g. `299, 587, 114` for ITU-R BT.601 luma. The
/// result saturates at 255 if the weights sum to more than 1000.
pub fn rgb_to_gray_with_weight(
    red: u8,
    green: u8,
    blue: u8,
    red_weight: u32,
    green_weight: u32,
    blue_weight: u32,
) -> Gray {
    let sum = u64::from(red) * u64::from(red_weight)
        + u64::from(green) * u64::from(green_weight)
        + u64::from(blue) * u64::from(blue_weight);

    Gray(u8::try_from((sum + 500) / 1000).unwrap_or(u8::MAX))
}

/// Unweighted luminance `round((r + g + b) / 3)`.
pub fn rgb_to_gray_average(red: u8, green: u8, blue: u8) -> Gray {
    let sum = u16::from(red) + u16::from(green) + u16::from(blue);

    // sum <= 765, so the rounded third always fits.
    Gray(((sum + 1) / 3) as u8)
}

impl Rgb8 {
    /// Reduces this color with per-mille channel weights.
    #[inline]
    pub fn to_gray_with_weight(self, red_weight: u32, green_weight: u32, blue_weight: u32) -> Gray {
        rgb_to_gray_with_weight(
            self.red,
            self.green,
            self.blue,
            red_weight,
            green_weight,
            blue_weight,
        )
    }

    /// Reduces this color to the mean of its channels.
    #[inline]
    pub fn to_gray_average(self) -> Gray {
        rgb_to_gray_average(self.red, self.green, self.blue)
    }
}
