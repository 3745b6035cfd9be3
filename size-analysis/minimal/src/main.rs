#![no_std]
#![no_main]

use core::hint::black_box;

use colorconv::{
    Rgb8, Srgb, color_to_gray, color_to_hex, hex_to_rgb, hsl_to_color, hsl_to_rgb, hsv_to_rgb,
    rgb_to_gray_average, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Conversions
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn convert_colors() {
    let rgb = black_box(Rgb8::new(255, 0, 128));

    // RGB -> HSL -> RGB
    let hsl = rgb_to_hsl(rgb.red, rgb.green, rgb.blue);
    black_box(hsl_to_rgb(hsl.hue, hsl.saturation, hsl.lightness).ok());

    // RGB -> HSV -> RGB
    let hsv = rgb_to_hsv(rgb.red, rgb.green, rgb.blue);
    black_box(hsv_to_rgb(hsv.hue, hsv.saturation, hsv.value).ok());

    // Hex codec
    let hex = rgb_to_hex(rgb.red, rgb.green, rgb.blue);
    black_box(hex_to_rgb(black_box("#ff0080")).ok());
    black_box(hex);

    // Grayscale
    black_box(rgb_to_gray_average(rgb.red, rgb.green, rgb.blue));

    // Host color adapters
    let host: Option<Srgb<u8>> = hsl_to_color(black_box(200.0), 0.5, 0.5).ok();
    if let Some(color) = host {
        black_box(color_to_hex(&color));
        black_box(color_to_gray(&color, 299, 587, 114));
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    convert_colors();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
