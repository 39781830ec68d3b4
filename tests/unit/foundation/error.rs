use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CrewframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CrewframeError::TemplateNotFound("t".into())
            .to_string()
            .contains("template not found:")
    );
    assert!(
        CrewframeError::RosterSizeMismatch {
            expected: 8,
            actual: 7
        }
        .to_string()
        .contains("roster size mismatch")
    );
}

#[test]
fn codes_are_stable() {
    assert_eq!(CrewframeError::validation("x").code(), "validation_error");
    assert_eq!(
        CrewframeError::RosterSizeMismatch {
            expected: 4,
            actual: 3
        }
        .code(),
        "roster_size_mismatch"
    );
    assert_eq!(
        CrewframeError::TemplateNotFound("x".into()).code(),
        "template_not_found"
    );
    assert_eq!(
        CrewframeError::PresetNotFound("x".into()).code(),
        "preset_not_found"
    );
    assert_eq!(
        CrewframeError::IconNotFound("x".into()).code(),
        "icon_not_found"
    );
    assert_eq!(
        CrewframeError::UnsupportedIconFormat("x".into()).code(),
        "unsupported_icon_format"
    );
    assert_eq!(
        CrewframeError::render(anyhow::anyhow!("boom")).code(),
        "render_failure"
    );
}

#[test]
fn envelope_hides_internal_detail() {
    let client = CrewframeError::IconNotFound("logo.png".into()).to_envelope();
    assert_eq!(client.code, "icon_not_found");
    assert!(client.message.contains("logo.png"));

    let internal = CrewframeError::render(anyhow::anyhow!("font table corrupt")).to_envelope();
    assert_eq!(internal.code, "render_failure");
    assert!(!internal.message.contains("font table"));
}

#[test]
fn envelope_serializes_to_small_json() {
    let env = CrewframeError::validation("missing clubName").to_envelope();
    let json = serde_json::to_value(&env).unwrap();
    assert_eq!(json["code"], "validation_error");
    assert!(json["message"].as_str().unwrap().contains("clubName"));
}

#[test]
fn render_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CrewframeError::render(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom") || format!("{err:?}").contains("boom"));
}
