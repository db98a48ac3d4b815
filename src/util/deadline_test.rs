use super::*;

#[test]
fn delay_until_future_deadline() {
    assert_eq!(delay_until(1_500.0, 1_000.0), 500);
}

#[test]
fn delay_until_rounds_up_partial_milliseconds() {
    assert_eq!(delay_until(1_000.2, 1_000.0), 1);
}

#[test]
fn delay_until_past_deadline_is_zero() {
    assert_eq!(delay_until(900.0, 1_000.0), 0);
    assert_eq!(delay_until(f64::NAN, 0.0), 0);
}

#[test]
fn delay_until_saturates() {
    assert_eq!(delay_until(f64::MAX, 0.0), u32::MAX);
}

#[cfg(not(feature = "csr"))]
#[test]
fn wake_at_is_inert_outside_browser() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = std::rc::Rc::clone(&ran);
    wake_at(0.0, move || flag.set(true));
    assert!(!ran.get());
}
