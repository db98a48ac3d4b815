use super::*;

#[test]
fn page_title_uses_owner_name() {
    assert_eq!(page_title("Raj"), "Raj | Portfolio");
}

#[test]
fn page_title_falls_back_for_blank_owner() {
    assert_eq!(page_title("  "), "Portfolio");
}
