#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_string_misses_outside_the_browser() {
    assert_eq!(load_string("token"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    save_string("token", "abc");
    remove("token");
    assert_eq!(load_string("token"), None);
}
