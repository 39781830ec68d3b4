use super::*;

#[test]
fn dimensions_reject_zero_edges() {
    assert!(Dimensions::new(0, 1350).is_err());
    assert!(Dimensions::new(1080, 0).is_err());
    assert!(Dimensions::new(0, 0).is_err());
}

#[test]
fn dimensions_accept_social_sizes() {
    let d = Dimensions::new(1080, 1350).unwrap();
    assert_eq!((d.width, d.height), (1080, 1350));
    assert!(Dimensions::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
}

#[test]
fn dimensions_reject_oversized() {
    assert!(Dimensions::new(MAX_DIMENSION + 1, 100).is_err());
    assert!(Dimensions::new(100, MAX_DIMENSION + 1).is_err());
}

#[test]
fn hex_parses_six_digit_forms() {
    assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));
    assert_eq!(Rgb::from_hex("00FF7f").unwrap(), Rgb::new(0, 255, 127));
    assert_eq!(Rgb::from_hex(" #1b3a5c ").unwrap(), Rgb::new(0x1b, 0x3a, 0x5c));
}

#[test]
fn hex_rejects_everything_else() {
    for bad in [
        "#fff",
        "#ff00000a",
        "red",
        "",
        "#gg0000",
        "#ff00",
        // Signed pairs are six parseable-by-radix chars but not hex digits.
        "+1+2+3",
        "-1-2-3",
        "#+0f0f0",
    ] {
        assert!(Rgb::from_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn hex_round_trips_lowercase() {
    let c = Rgb::from_hex("#C29B40").unwrap();
    assert_eq!(c.to_hex(), "#c29b40");
}

#[test]
fn rgb_serde_uses_hex_strings() {
    let c: Rgb = serde_json::from_str("\"#1b3a5c\"").unwrap();
    assert_eq!(c, Rgb::new(0x1b, 0x3a, 0x5c));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#1b3a5c\"");
    assert!(serde_json::from_str::<Rgb>("\"#abc\"").is_err());
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![200u8, 100, 50, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px[3], 128);
    assert!(px[0] < 200);
    unpremultiply_rgba8_in_place(&mut px);
    // One rounding step each way stays within a couple of code values.
    assert!((i32::from(px[0]) - 200).abs() <= 2);
    assert!((i32::from(px[1]) - 100).abs() <= 2);
    assert!((i32::from(px[2]) - 50).abs() <= 2);
}

#[test]
fn zero_alpha_zeroes_color_channels() {
    let mut px = vec![10u8, 20, 30, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0]);
}
