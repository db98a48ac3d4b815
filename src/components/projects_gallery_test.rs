use super::*;

#[test]
fn active_filter_gets_modifier_class() {
    assert_eq!(filter_button_class(true), "gallery__filter gallery__filter--active");
    assert_eq!(filter_button_class(false), "gallery__filter");
}

#[test]
fn featured_cards_are_marked() {
    assert_eq!(card_class(true), "card card--featured");
    assert_eq!(card_class(false), "card");
}
