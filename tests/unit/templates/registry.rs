use super::*;

#[test]
fn registry_lists_four_variants_in_order() {
    let ids: Vec<&str> = all().iter().map(|t| t.id).collect();
    assert_eq!(ids, ["classic-lineup", "race-day", "regatta-poster", "minimal-card"]);
}

#[test]
fn ids_are_unique_and_kebab_case() {
    let mut seen = std::collections::BTreeSet::new();
    for t in all() {
        assert!(seen.insert(t.id), "duplicate id {}", t.id);
        assert!(
            t.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "{}",
            t.id
        );
        assert!(!t.name.is_empty());
    }
}

#[test]
fn find_returns_registered_variant() {
    let t = find("race-day").unwrap();
    assert_eq!(t.name, "Race Day");
}

#[test]
fn find_rejects_unknown_ids_without_fallback() {
    for bad in ["artistic-flair", "classic", "", "CLASSIC-LINEUP"] {
        let err = find(bad).unwrap_err();
        assert_eq!(err.code(), "template_not_found", "{bad:?}");
        assert!(err.to_string().contains(bad) || bad.is_empty());
    }
}

#[test]
fn default_palettes_differ_per_variant() {
    let mut palettes = std::collections::BTreeSet::new();
    for t in all() {
        palettes.insert(t.default_colors.primary.to_hex());
    }
    assert_eq!(palettes.len(), all().len());
}
