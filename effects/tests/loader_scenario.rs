//! End-to-end loader run with deterministic increments and simulated time.

#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use effects::LoaderConfig;
use effects::increments::FixedIncrements;
use effects::loader::{Loader, LoaderEvent, LoaderState};

#[test]
fn fixed_twenty_percent_steps_complete_once() {
    let fired_at = Rc::new(Cell::new(None::<f64>));
    let now = Rc::new(Cell::new(0.0_f64));
    let hook_fired = Rc::clone(&fired_at);
    let hook_now = Rc::clone(&now);
    let mut loader = Loader::new(
        LoaderConfig::default(),
        FixedIncrements(20.0),
        move || hook_fired.set(Some(hook_now.get())),
        0.0,
    )
    .expect("default config is valid");

    let mut observed = Vec::new();
    while let Some(deadline) = loader.next_deadline_ms() {
        now.set(deadline);
        for event in loader.advance(deadline) {
            match event {
                LoaderEvent::Progressed { progress, .. } => observed.push(progress),
                LoaderEvent::Clamped { .. } => observed.push(loader.progress()),
                LoaderEvent::Completed => {}
            }
        }
    }

    assert_eq!(observed, vec![20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(loader.ticks(), 5);
    assert_eq!(loader.state(), LoaderState::Done);
    // Tick 5 lands at 1000ms; completion follows the 500ms settle delay.
    assert_eq!(fired_at.get(), Some(1500.0));

    assert!(loader.advance(5_000.0).is_empty());
    assert_eq!(loader.ticks(), 5);
}

#[test]
fn teardown_before_completion_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let hook = Rc::clone(&fired);
    let mut loader = Loader::new(LoaderConfig::default(), FixedIncrements(20.0), move || hook.set(true), 0.0)
        .expect("default config is valid");

    loader.advance(600.0);
    loader.cancel();
    // A timer that was already scheduled still wakes the host up.
    let stale = loader.advance(1_500.0);

    assert!(stale.is_empty());
    assert!(!fired.get());
    assert_eq!(loader.progress(), 60.0);
    assert_eq!(loader.state(), LoaderState::Cancelled);
}
