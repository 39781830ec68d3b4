use super::*;
use crate::render::font::FontSource;

const BLACK: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

fn test_font() -> Option<Arc<Vec<u8>>> {
    FontSource::Detect.load().ok()
}

#[test]
fn empty_font_bytes_are_rejected() {
    assert!(TextPainter::new(Arc::new(Vec::new())).is_err());
    assert!(TextPainter::new(Arc::new(vec![0u8; 64])).is_err());
}

#[test]
fn shaping_reports_positive_metrics() {
    let Some(bytes) = test_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let mut painter = TextPainter::new(bytes).unwrap();
    let shaped = painter
        .shape("Riverside RC", 32.0, BLACK, None)
        .unwrap();
    assert!(shaped.width() > 0.0);
    assert!(shaped.height() > 0.0);
}

#[test]
fn non_positive_size_is_an_error() {
    let Some(bytes) = test_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let mut painter = TextPainter::new(bytes).unwrap();
    assert!(painter.shape("x", 0.0, BLACK, None).is_err());
    assert!(
        painter
            .shape("x", f32::NAN, BLACK, None)
            .is_err()
    );
}

#[test]
fn fit_rule_shrinks_to_max_width() {
    let Some(bytes) = test_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let mut painter = TextPainter::new(bytes).unwrap();
    let long = "An Unreasonably Long Crew Name For A Narrow Column";

    let free = painter.shape(long, 40.0, BLACK, None).unwrap();
    assert!(free.width() > 120.0);

    let fitted = painter
        .shape(long, 40.0, BLACK, Some(120.0))
        .unwrap();
    // Near the budget after the corrective passes, and strictly smaller.
    assert!(fitted.width() <= 120.0 * 1.05, "got {}", fitted.width());
    assert!(fitted.width() < free.width());
    assert!(fitted.height() < free.height());
}

#[test]
fn fit_rule_leaves_short_text_alone() {
    let Some(bytes) = test_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let mut painter = TextPainter::new(bytes).unwrap();
    let free = painter.shape("Bow", 20.0, BLACK, None).unwrap();
    let capped = painter.shape("Bow", 20.0, BLACK, Some(10_000.0)).unwrap();
    assert_eq!(free.width(), capped.width());
    assert_eq!(free.height(), capped.height());
}

#[test]
fn shaping_is_deterministic() {
    let Some(bytes) = test_font() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let mut painter = TextPainter::new(bytes).unwrap();
    let a = painter
        .shape("Stroke · A. Hartley", 24.0, BLACK, Some(300.0))
        .unwrap();
    let b = painter
        .shape("Stroke · A. Hartley", 24.0, BLACK, Some(300.0))
        .unwrap();
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
}
