use super::*;

#[test]
fn embedded_catalog_parses() {
    let content = SiteContent::parse(SITE_JSON).expect("embedded catalog should be valid");
    assert!(!content.owner.is_empty());
    assert_eq!(content.projects.len(), 3);
    assert_eq!(content.effects.trail, TrailConfig::default());
    assert_eq!(content.effects.loader, LoaderConfig::default());
}

#[test]
fn embedded_matches_parse() {
    let parsed = SiteContent::parse(SITE_JSON).expect("valid");
    assert_eq!(SiteContent::embedded(), parsed);
}

#[test]
fn missing_sections_default() {
    let content = SiteContent::parse(r#"{ "owner": "Ada" }"#).expect("valid");
    assert_eq!(content.owner, "Ada");
    assert!(content.projects.is_empty());
    assert_eq!(content.effects, EffectsOverrides::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteContent::parse("{ not json").expect_err("should fail");
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn invalid_effect_override_is_rejected() {
    let err = SiteContent::parse(r#"{ "effects": { "trail": { "decay": 1.5 } } }"#).expect_err("should fail");
    assert!(matches!(err, ContentError::Effects(ConfigError::InvalidDecay(_))));
}

#[test]
fn effect_override_is_applied() {
    let content = SiteContent::parse(r#"{ "effects": { "loader": { "settle_delay_ms": 250 } } }"#).expect("valid");
    assert!((content.effects.loader.settle_delay_ms - 250.0).abs() < f64::EPSILON);
    assert_eq!(content.effects.loader.phases.len(), 5);
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let raw = r#"{
        "projects": [
            { "id": 7, "title": "a", "description": "", "tags": [], "thumbnail": "", "live_url": "", "github_url": "", "tech_stack": [] },
            { "id": 7, "title": "b", "description": "", "tags": [], "thumbnail": "", "live_url": "", "github_url": "", "tech_stack": [] }
        ]
    }"#;
    let err = SiteContent::parse(raw).expect_err("should fail");
    assert!(matches!(err, ContentError::DuplicateProjectId(7)));
}

#[test]
fn project_lookup_by_id() {
    let content = SiteContent::embedded();
    assert_eq!(content.project(2).map(|p| p.title.as_str()), Some("Pocket Ledger"));
    assert!(content.project(99).is_none());
}
