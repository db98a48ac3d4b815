use super::*;

#[test]
fn active_link_gets_modifier_class() {
    assert_eq!(nav_link_class(Section::About, Section::About), "nav-bar__link nav-bar__link--active");
    assert_eq!(nav_link_class(Section::About, Section::Home), "nav-bar__link");
}

#[test]
fn brand_uppercases_owner() {
    assert_eq!(brand("Raj"), "RAJ.3D");
}

#[test]
fn brand_falls_back_when_owner_missing() {
    assert_eq!(brand("  "), "PORTFOLIO");
}
