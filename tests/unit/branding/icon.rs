use super::*;
use crate::branding::store::InMemoryLogoStore;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 120, 30, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20">
  <rect width="40" height="20" fill="#1b3a5c"/>
</svg>"##;

#[test]
fn png_decodes_to_bitmap_with_size() {
    let icon = decode_icon_bytes(&png_bytes(6, 4), "logo.png").unwrap();
    match icon {
        ResolvedIcon::Bitmap(b) => {
            assert_eq!((b.width, b.height), (6, 4));
            assert_eq!(b.rgba8_premul.len(), 6 * 4 * 4);
        }
        ResolvedIcon::Svg(_) => panic!("expected bitmap"),
    }
}

#[test]
fn svg_parses_to_tree_with_intrinsic_size() {
    let icon = decode_icon_bytes(SVG.as_bytes(), "logo.svg").unwrap();
    assert!(matches!(icon, ResolvedIcon::Svg(_)));
    assert_eq!(icon.intrinsic_size(), (40.0, 20.0));
}

#[test]
fn xml_prolog_svg_is_recognized() {
    let with_prolog = format!("<?xml version=\"1.0\"?>\n{SVG}");
    let icon = decode_icon_bytes(with_prolog.as_bytes(), "logo.svg").unwrap();
    assert!(matches!(icon, ResolvedIcon::Svg(_)));
}

#[test]
fn garbage_bytes_are_unsupported_format() {
    let err = decode_icon_bytes(b"definitely not an image", "logo.bin").unwrap_err();
    assert_eq!(err.code(), "unsupported_icon_format");
    assert!(err.to_string().contains("logo.bin"));
}

#[test]
fn no_icon_resolves_to_none() {
    let logos = InMemoryLogoStore::new();
    assert!(resolve_icon(None, &logos).unwrap().is_none());
}

#[test]
fn upload_bytes_are_decoded_directly() {
    let logos = InMemoryLogoStore::new();
    let icon = ClubIcon::Upload {
        file_bytes: png_bytes(2, 2),
        filename: "upload.png".into(),
    };
    assert!(matches!(
        resolve_icon(Some(&icon), &logos).unwrap(),
        Some(ResolvedIcon::Bitmap(_))
    ));
}

#[test]
fn empty_upload_is_rejected() {
    let logos = InMemoryLogoStore::new();
    let icon = ClubIcon::Upload {
        file_bytes: Vec::new(),
        filename: "empty.png".into(),
    };
    let err = resolve_icon(Some(&icon), &logos).unwrap_err();
    assert_eq!(err.code(), "unsupported_icon_format");
}

#[test]
fn preset_reference_loads_from_store() {
    let logos = InMemoryLogoStore::new();
    logos.insert("club.png", png_bytes(3, 3)).unwrap();
    let icon = ClubIcon::Preset {
        filename: "club.png".into(),
    };
    assert!(resolve_icon(Some(&icon), &logos).unwrap().is_some());
}

#[test]
fn missing_preset_logo_is_icon_not_found() {
    let logos = InMemoryLogoStore::new();
    let icon = ClubIcon::Preset {
        filename: "missing.png".into(),
    };
    let err = resolve_icon(Some(&icon), &logos).unwrap_err();
    assert_eq!(err.code(), "icon_not_found");
    assert!(err.to_string().contains("missing.png"));
}
