#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_is_disarmed() {
    let timer = OneShot::new();
    assert!(!timer.is_armed());
    assert_eq!(timer.due_ms(), None);
}

#[test]
fn fires_once_at_deadline() {
    let mut timer = OneShot::new();
    timer.arm(1000.0, 500.0);
    assert!(!timer.fire_if_due(1499.0));
    assert!(timer.fire_if_due(1500.0));
    assert!(!timer.fire_if_due(1600.0));
    assert!(!timer.is_armed());
}

#[test]
fn rearm_moves_deadline() {
    let mut timer = OneShot::new();
    timer.arm(0.0, 100.0);
    timer.arm(50.0, 100.0);
    assert_eq!(timer.due_ms(), Some(150.0));
    assert!(!timer.fire_if_due(120.0));
}

#[test]
fn cancel_is_idempotent() {
    let mut timer = OneShot::new();
    timer.arm(0.0, 10.0);
    timer.cancel();
    timer.cancel();
    assert!(!timer.fire_if_due(1000.0));
}

#[test]
fn negative_delay_fires_immediately() {
    let mut timer = OneShot::new();
    timer.arm(10.0, -5.0);
    assert!(timer.fire_if_due(10.0));
}

#[test]
fn earliest_picks_smaller_present_value() {
    assert_eq!(earliest(Some(3.0), Some(2.0)), Some(2.0));
    assert_eq!(earliest(None, Some(2.0)), Some(2.0));
    assert_eq!(earliest(Some(3.0), None), Some(3.0));
    assert_eq!(earliest(None, None), None);
}
