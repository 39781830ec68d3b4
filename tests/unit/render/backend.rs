use super::*;
use crate::roster::boat::BoatType;
use crate::roster::seats;
use crate::templates;

fn backend() -> Option<CpuBackend> {
    CpuBackend::new(FontSource::Detect).ok()
}

fn crew() -> Crew {
    Crew {
        id: None,
        name: "M1".into(),
        club_name: "Riverside RC".into(),
        race_name: "Spring Head".into(),
        boat_type: BoatType::from_code("2x").unwrap(),
        member_names: vec!["A. Port".into(), "B. Starboard".into()],
        cox_name: None,
        coach_name: None,
    }
}

fn config(w: u32, h: u32) -> TemplateConfig {
    serde_json::from_str(&format!(
        r#"{{"dimensions": {{"width": {w}, "height": {h}}}}}"#
    ))
    .unwrap()
}

#[test]
fn empty_font_bytes_fail_at_construction() {
    let err = CpuBackend::new(FontSource::Bytes(Arc::new(Vec::new()))).unwrap_err();
    assert_eq!(err.code(), "validation_error");
}

#[test]
fn junk_font_bytes_fail_at_construction() {
    assert!(CpuBackend::new(FontSource::Bytes(Arc::new(vec![1u8; 32]))).is_err());
}

#[test]
fn compose_yields_png_at_requested_size() {
    let Some(mut backend) = backend() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let crew = crew();
    let assignment = seats::resolve(&crew.boat_type, &crew.member_names, None).unwrap();
    let template = templates::find("classic-lineup").unwrap();
    let config = config(320, 400);
    let scene = RenderScene {
        template,
        crew: &crew,
        seats: &assignment,
        colors: template.default_colors,
        icon: None,
        config: &config,
    };
    let png = backend.compose(&scene).unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (320, 400));
}

#[test]
fn compose_is_deterministic() {
    let Some(mut backend) = backend() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let crew = crew();
    let assignment = seats::resolve(&crew.boat_type, &crew.member_names, None).unwrap();
    let template = templates::find("minimal-card").unwrap();
    let config = config(240, 300);
    let scene = RenderScene {
        template,
        crew: &crew,
        seats: &assignment,
        colors: template.default_colors,
        icon: None,
        config: &config,
    };
    let a = backend.compose(&scene).unwrap();
    let b = backend.compose(&scene).unwrap();
    assert_eq!(a, b);
}

#[test]
fn compose_failures_carry_render_code() {
    let Some(mut backend) = backend() else {
        eprintln!("no system font available, skipping");
        return;
    };
    let crew = crew();
    let assignment = seats::resolve(&crew.boat_type, &crew.member_names, None).unwrap();
    let template = templates::find("classic-lineup").unwrap();
    // A config that slipped past request validation still fails safely:
    // surface acquisition rejects it and compose reports a render failure.
    let bad = TemplateConfig {
        dimensions: crate::foundation::core::Dimensions {
            width: 0,
            height: 10,
        },
        ..config(10, 10)
    };
    let scene = RenderScene {
        template,
        crew: &crew,
        seats: &assignment,
        colors: template.default_colors,
        icon: None,
        config: &bad,
    };
    let err = backend.compose(&scene).unwrap_err();
    assert_eq!(err.code(), "render_failure");
}
