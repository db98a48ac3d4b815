#![allow(clippy::float_cmp)]

use super::*;
use effects::increments::FixedIncrements;

#[test]
fn initial_view_shows_first_phase() {
    let view = LoaderView::initial(&LoaderConfig::default());
    assert_eq!(view.percent, 0);
    assert_eq!(view.label, "Initializing 3D Space...");
}

#[test]
fn initial_view_with_no_phases_has_empty_label() {
    let config = LoaderConfig { phases: Vec::new(), ..LoaderConfig::default() };
    assert_eq!(LoaderView::initial(&config).label, "");
}

#[test]
fn view_tracks_loader() {
    let mut loader = Loader::new(LoaderConfig::default(), FixedIncrements(42.4), || {}, 0.0).expect("valid config");
    loader.advance(400.0);
    let view = LoaderView::of(&loader);
    assert_eq!(view.percent, 85);
    assert_eq!(view.label, "Almost Ready...");
}

#[test]
fn bar_width_is_clamped_percentage() {
    assert_eq!(bar_width(12.345), "12.3%");
    assert_eq!(bar_width(140.0), "100.0%");
    assert_eq!(bar_width(-3.0), "0.0%");
}

#[test]
fn percent_label_appends_sign() {
    assert_eq!(percent_label(7), "7%");
}
