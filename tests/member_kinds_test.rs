//! Tests covering every member kind and the accessibility gate.

#![allow(dead_code)]

use member_probe::{has_member, impl_member, member_probe, probe_members, Members};

// =============================================================================
// Fields, methods, associated consts, manual declarations
// =============================================================================

#[derive(Members)]
pub struct Craft {
    pub id: u32,
    fuel: f32,
}

#[probe_members]
impl Craft {
    pub fn heading(&self) -> f64 {
        0.0
    }

    pub const MAX_SPEED: u32 = 12;

    fn recalibrate(&mut self) {}
}

pub struct Legacy;
impl_member!(Legacy { heading, speed });

member_probe!(id, fuel, heading, max_speed, MAX_SPEED, recalibrate, speed);

#[test]
fn pub_field_is_detected() {
    assert!(has_member!(Craft, id));
}

#[test]
fn private_field_is_not_found() {
    // The field exists but is inaccessible; existence alone is not enough.
    assert!(!has_member!(Craft, fuel));
}

#[test]
fn pub_method_is_detected() {
    assert!(has_member!(Craft, heading));
}

#[test]
fn assoc_const_is_detected() {
    assert!(has_member!(Craft, MAX_SPEED));
}

#[test]
fn private_method_is_not_found() {
    assert!(!has_member!(Craft, recalibrate));
}

#[test]
fn manual_declarations_are_detected() {
    assert!(has_member!(Legacy, heading));
    assert!(has_member!(Legacy, speed));
    assert!(!has_member!(Legacy, id));
}

// =============================================================================
// Spelling-exact names
// =============================================================================

pub struct Engine;

#[probe_members]
impl Engine {
    pub fn max_speed(&self) -> u32 {
        Self::MAX_SPEED
    }

    pub const MAX_SPEED: u32 = 90;
}

#[test]
fn casing_variants_are_distinct_names() {
    // max_speed and MAX_SPEED are registered side by side above; each query
    // answers for its own spelling only.
    assert!(has_member!(Engine, max_speed));
    assert!(has_member!(Engine, MAX_SPEED));

    // Craft declares MAX_SPEED but nothing named max_speed.
    assert!(has_member!(Craft, MAX_SPEED));
    assert!(!has_member!(Craft, max_speed));
}

// =============================================================================
// Generic inherent impls
// =============================================================================

pub struct Carrier<T>(T);

#[probe_members]
impl<T> Carrier<T> {
    pub fn heading(&self) -> f64 {
        0.0
    }
}

#[test]
fn generic_impl_blocks_declare_for_all_instantiations() {
    assert!(has_member!(Carrier<u8>, heading));
    assert!(has_member!(Carrier<Legacy>, heading));
}
