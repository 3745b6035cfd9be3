//! Integration tests for the host color adapters

mod common;
use common::*;

use colorconv::{
    ConversionError, Gray, HostColor, Rgb8, Srgb, Srgba, color_to_gray, color_to_hex,
    color_to_hsl, color_to_hsv, hex_to_color, hsl_to_color, hsv_to_color, rgb_to_hsl, rgb_to_hsv,
};

#[test]
fn hsl_round_trip_through_palette() {
    for rgb in rgb_samples() {
        let color = Srgb::<u8>::from(rgb);
        let hsl = color_to_hsl(&color);
        let back: Srgb<u8> = hsl_to_color(hsl.hue, hsl.saturation, hsl.lightness).unwrap();
        assert_within(rgb, back.into(), 1, hsl);
    }
}

#[test]
fn hsv_round_trip_through_palette() {
    for rgb in rgb_samples() {
        let color = Srgb::<u8>::from(rgb);
        let hsv = color_to_hsv(&color);
        let back: Srgb<u8> = hsv_to_color(hsv.hue, hsv.saturation, hsv.value).unwrap();
        assert_within(rgb, back.into(), 1, hsv);
    }
}

#[test]
fn hex_round_trip_through_palette_is_exact() {
    for rgb in rgb_samples() {
        let color = Srgb::<u8>::from(rgb);
        let hex = color_to_hex(&color);
        let back: Srgb<u8> = hex_to_color(&hex).unwrap();
        assert_eq!(back, color, "{hex}");
    }
}

#[test]
fn readers_ignore_alpha() {
    let translucent = Srgba::new(200u8, 100, 50, 10);
    let opaque = Srgba::new(200u8, 100, 50, 255);

    assert_eq!(color_to_hsl(&translucent), color_to_hsl(&opaque));
    assert_eq!(color_to_hsv(&translucent), rgb_to_hsv(200, 100, 50));
    assert_eq!(color_to_hex(&translucent), "0xc86432");
}

#[test]
fn builders_produce_opaque_colors() {
    let color: Srgba<u8> = hsl_to_color(0.0, 1.0, 0.5).unwrap();
    assert_eq!(color, Srgba::new(255, 0, 0, 255));

    let color: [u8; 4] = hex_to_color("#102030").unwrap();
    assert_eq!(color, [0x10, 0x20, 0x30, 0xff]);

    let color: WideColor = hsv_to_color(240.0, 1.0, 1.0).unwrap();
    assert_eq!(color, WideColor { r: 0, g: 0, b: 0xffff, a: 0xffff });
}

#[test]
fn builders_propagate_errors() {
    assert!(matches!(
        hex_to_color::<Srgb<u8>>("0xnothex"),
        Err(ConversionError::InvalidFormat(_))
    ));
    assert!(matches!(
        hsl_to_color::<[u8; 3]>(0.0, 1.5, 0.5),
        Err(ConversionError::OutOfRange { .. })
    ));
}

#[test]
fn wide_host_colors_are_narrowed_to_8_bits() {
    let wide = WideColor { r: 0xff80, g: 0x00ff, b: 0x8000, a: 0x1234 };
    assert_eq!(wide.to_rgba8(), (Rgb8::new(0xff, 0x00, 0x80), 0x12));
    assert_eq!(color_to_hsl(&wide), rgb_to_hsl(0xff, 0x00, 0x80));
}

#[test]
fn float_palette_colors_are_quantized() {
    let color = Srgb::new(0.0f32, 1.0, 1.0);
    assert_eq!(color_to_hex(&color), "0x00ffff");

    let back: Srgba<f32> = hex_to_color("#00ffff").unwrap();
    assert_eq!(back, Srgba::new(0.0, 1.0, 1.0, 1.0));
}

#[test]
fn color_to_gray_keeps_source_alpha() {
    let color = Srgba::new(255u8, 255, 255, 40);
    let gray = color_to_gray(&color, 299, 587, 114);
    assert_eq!(gray, Srgba::new(255, 255, 255, 40));

    let color = [30u8, 60, 90, 7];
    assert_eq!(color_to_gray(&color, 0, 1000, 0), [60, 60, 60, 7]);
}

#[test]
fn gray_to_color_is_opaque() {
    let color: WideColor = Gray(0x80).to_color();
    assert_eq!(color, WideColor { r: 0x8080, g: 0x8080, b: 0x8080, a: 0xffff });
}
