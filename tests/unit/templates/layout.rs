use super::*;

#[test]
fn dark_backgrounds_get_white_text() {
    assert_eq!(text_color_on(Rgb::new(0x1b, 0x3a, 0x5c)), WHITE);
    assert_eq!(text_color_on(Rgb::new(0, 0, 0)), WHITE);
}

#[test]
fn light_backgrounds_get_ink_text() {
    assert_eq!(text_color_on(Rgb::new(255, 255, 255)), INK);
    assert_eq!(text_color_on(Rgb::new(0xc2, 0x9b, 0x40)), INK);
}

#[test]
fn body_text_color_tracks_the_background_fill() {
    let dark_secondary = ColorScheme {
        primary: Rgb::new(0x1b, 0x3a, 0x5c),
        secondary: Rgb::new(0x10, 0x10, 0x10),
    };
    // Solid body is white regardless of branding.
    assert_eq!(
        body_text_color(BackgroundStyle::Solid, dark_secondary),
        INK
    );
    // Gradient toward a near-black secondary stays mid-dark, so text flips
    // to white for contrast.
    assert_eq!(
        body_text_color(BackgroundStyle::Gradient, dark_secondary),
        WHITE
    );
    // Split tints the body heavily toward white, keeping ink readable.
    assert_eq!(
        body_text_color(BackgroundStyle::Split, dark_secondary),
        INK
    );
}

#[test]
fn mix_endpoints_and_midpoint() {
    let a = Rgb::new(0, 0, 0);
    let b = Rgb::new(200, 100, 50);
    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 1.0), b);
    assert_eq!(mix(a, b, 0.5), Rgb::new(100, 50, 25));
    // t is clamped, not extrapolated.
    assert_eq!(mix(a, b, 2.0), b);
    assert_eq!(mix(a, b, -1.0), a);
}

#[test]
fn entry_text_honors_display_mode() {
    let seat = Seat {
        label: "Stroke".into(),
        name: "A. Hartley".into(),
    };
    assert_eq!(entry_text(&seat, NameDisplay::SeatAndName), "Stroke · A. Hartley");
    assert_eq!(entry_text(&seat, NameDisplay::NameOnly), "A. Hartley");
}

#[test]
fn gradient_bitmap_spans_top_to_bottom() {
    let top = Rgb::new(10, 20, 30);
    let bottom = Rgb::new(200, 150, 100);
    let bmp = vertical_gradient_bitmap(4, 8, top, bottom);
    assert_eq!((bmp.width, bmp.height), (4, 8));
    assert_eq!(bmp.rgba8_premul.len(), 4 * 8 * 4);

    let first = &bmp.rgba8_premul[..4];
    assert_eq!(first, [top.r, top.g, top.b, 255]);
    let last_row = (7 * 4) * 4;
    let last = &bmp.rgba8_premul[last_row..last_row + 4];
    assert_eq!(last, [bottom.r, bottom.g, bottom.b, 255]);

    // Every row is a single uniform color.
    for y in 0..8usize {
        let row = &bmp.rgba8_premul[y * 16..(y + 1) * 16];
        for px in row.chunks_exact(4).skip(1) {
            assert_eq!(px, &row[..4]);
        }
    }
}

#[test]
fn degenerate_gradient_sizes_are_clamped() {
    let bmp = vertical_gradient_bitmap(0, 0, Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
    assert_eq!((bmp.width, bmp.height), (1, 1));
    assert_eq!(bmp.rgba8_premul.len(), 4);
}

#[test]
fn lens_path_is_closed_both_ways() {
    let rect = kurbo::Rect::new(0.0, 0.0, 100.0, 10.0);
    for reversed in [false, true] {
        let p = lens_path(rect, reversed);
        assert!(matches!(p.elements().last(), Some(&kurbo::PathEl::ClosePath)));
        let bb = kurbo::Shape::bounding_box(&p);
        assert!(bb.width() > 0.0 && bb.height() > 0.0);
    }
}
