#![cfg(not(feature = "csr"))]
#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn clock_reads_zero_outside_browser() {
    assert_eq!(now_ms(), 0.0);
}

#[test]
fn entropy_seed_is_fixed_outside_browser() {
    assert_eq!(entropy_seed(), entropy_seed());
}
