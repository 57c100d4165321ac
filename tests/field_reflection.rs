//! Tests for the type-level surface: keys, field lists, and lookup.

#![allow(dead_code)]

use member_probe::prelude::*;
use member_probe::{member_key, member_probe, Bool, KeyEq};

#[derive(Members)]
pub struct Pose {
    pub heading: f64,
    pub speed: f64,
    altitude_raw: i32,
}

member_probe!(heading, speed, altitude);

fn key_eq<A, B>() -> bool
where
    A: KeyEq<B>,
{
    <<A as KeyEq<B>>::Out as Bool>::VALUE
}

fn value_of<B: Bool>() -> bool {
    B::VALUE
}

// =============================================================================
// Key identity
// =============================================================================

#[test]
fn same_name_encodes_to_same_key() {
    // Identifier and string spellings unify structurally.
    assert!(key_eq::<member_key!(heading), member_key!("heading")>());
}

#[test]
fn different_names_have_unequal_keys() {
    assert!(!key_eq::<member_key!(heading), member_key!(speed)>());
    // Prefixes differ by length alone.
    assert!(!key_eq::<member_key!(heading), member_key!(headings)>());
}

#[test]
fn registrations_in_sibling_scopes_share_keys() {
    mod nav {
        member_probe::member_probe!(bearing);
    }
    mod geo {
        member_probe::member_probe!(bearing);
    }
    // Two registrations of one name are distinct markers with one key.
    assert!(key_eq::<Key<nav::bearingProbe>, Key<geo::bearingProbe>>());
}

// =============================================================================
// Field lists
// =============================================================================

// Pub fields only, checked entirely during compilation.
const _: () = assert!(<<Pose as Fields>::Names as Contains<Key<headingProbe>>>::RESULT);
const _: () = assert!(<<Pose as Fields>::Names as Contains<Key<speedProbe>>>::RESULT);
const _: () = assert!(!<<Pose as Fields>::Names as Contains<Key<altitudeProbe>>>::RESULT);

#[test]
fn field_lookup_resolves_to_present_or_absent() {
    assert!(value_of::<HasField<Pose, headingProbe>>());
    assert!(value_of::<HasField<Pose, speedProbe>>());
    assert!(!value_of::<HasField<Pose, altitudeProbe>>());
}

#[test]
fn witnesses_are_constructible() {
    let _heading: HasField<Pose, headingProbe> = Present;
    let _altitude: HasField<Pose, altitudeProbe> = Absent;
}

// =============================================================================
// Empty field lists
// =============================================================================

#[derive(Members)]
pub struct Opaque;

#[derive(Members)]
pub struct Pair(pub u8, pub u8);

#[test]
fn unit_and_tuple_structs_have_no_named_members() {
    assert!(!<<Opaque as Fields>::Names as Contains<Key<headingProbe>>>::RESULT);
    assert!(!<<Pair as Fields>::Names as Contains<Key<headingProbe>>>::RESULT);
}
