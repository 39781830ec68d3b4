use super::*;

const DEFAULTS: ColorScheme = ColorScheme {
    primary: Rgb::new(0x1b, 0x3a, 0x5c),
    secondary: Rgb::new(0xc2, 0x9b, 0x40),
};

fn preset() -> ClubPreset {
    ClubPreset {
        primary_color: Rgb::new(0x8c, 0x1d, 0x2f),
        secondary_color: Rgb::new(0x2e, 0x2e, 0x2e),
        logo_filename: None,
    }
}

fn explicit() -> ColorPair {
    ColorPair {
        primary: Rgb::new(1, 2, 3),
        secondary: Rgb::new(4, 5, 6),
    }
}

#[test]
fn explicit_beats_preset_and_default() {
    let scheme = resolve_colors(Some(explicit()), Some(&preset()), DEFAULTS);
    assert_eq!(scheme.primary, Rgb::new(1, 2, 3));
    assert_eq!(scheme.secondary, Rgb::new(4, 5, 6));
}

#[test]
fn preset_beats_default() {
    let scheme = resolve_colors(None, Some(&preset()), DEFAULTS);
    assert_eq!(scheme.primary, preset().primary_color);
    assert_eq!(scheme.secondary, preset().secondary_color);
}

#[test]
fn default_applies_when_nothing_else_given() {
    let scheme = resolve_colors(None, None, DEFAULTS);
    assert_eq!(scheme, DEFAULTS);
}

#[test]
fn color_pair_serde_is_hex() {
    let json = serde_json::to_value(explicit()).unwrap();
    assert_eq!(json["primary"], "#010203");
    assert_eq!(json["secondary"], "#040506");
    let back: ColorPair = serde_json::from_value(json).unwrap();
    assert_eq!(back, explicit());
}
