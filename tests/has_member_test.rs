//! Tests for the has_member! query.
//!
//! `has_member!(T, name)` works for any concrete type; the name must be
//! registered with `member_probe!` first. The member's own type never
//! matters, only its name and accessibility.

use member_probe::{has_member, member_probe, Members};

// =============================================================================
// The three canonical types: same name, prefix name, same name other type
// =============================================================================

#[derive(Members)]
pub struct CubeSphereObject {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub heading: f64,
}

#[derive(Members)]
pub struct B {
    pub headings: bool,
}

#[derive(Members)]
pub struct C {
    pub heading: bool,
}

member_probe!(heading, headings, width);

// =============================================================================
// Name-exact detection
// =============================================================================

#[test]
fn detects_declared_member() {
    assert!(has_member!(CubeSphereObject, heading));
    assert!(has_member!(CubeSphereObject, width));
}

#[test]
fn prefix_names_do_not_cross_match() {
    // "heading" vs "headings": neither direction matches
    assert!(!has_member!(B, heading));
    assert!(has_member!(B, headings));
    assert!(!has_member!(CubeSphereObject, headings));
}

#[test]
fn member_type_is_irrelevant() {
    // C's heading is bool, CubeSphereObject's is f64; both report true
    assert!(has_member!(C, heading));
}

#[test]
fn absent_name_is_false() {
    assert!(!has_member!(C, width));
    assert!(!has_member!(B, width));
}

// =============================================================================
// Generic targets
// =============================================================================

#[derive(Members)]
pub struct Tagged<T> {
    pub heading: f64,
    pub payload: T,
}

#[test]
fn generic_structs_are_probed_per_instantiation() {
    assert!(has_member!(Tagged<u8>, heading));
    assert!(has_member!(Tagged<String>, heading));
    assert!(!has_member!(Tagged<u8>, headings));
}

#[test]
fn bare_type_parameters_take_the_fallback() {
    // Resolution happens at the call site; inside a generic fn nothing is
    // known about T, so the fallback (false) wins even for T = C.
    fn probe_generic<T>() -> bool {
        has_member!(T, heading)
    }
    assert!(!probe_generic::<C>());
}
