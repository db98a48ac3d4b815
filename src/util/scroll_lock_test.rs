#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
    release();
}
