//! Tests for registration scoping.
//!
//! A probe name may be registered once per scope; separate scopes register
//! independently, and queries resolve against whichever marker is in scope.

#![allow(dead_code)]

use member_probe::{has_member, member_probe, Members};

#[derive(Members)]
pub struct Ship {
    pub heading: f64,
}

#[derive(Members)]
pub struct Buoy {
    pub anchor: bool,
}

member_probe!(heading);

mod inner {
    // Same name, different scope: a fresh, independent registration.
    member_probe::member_probe!(heading, anchor);
}

#[test]
fn outer_registration_resolves() {
    assert!(has_member!(Ship, heading));
    assert!(!has_member!(Buoy, heading));
}

#[test]
fn imported_markers_resolve_like_local_ones() {
    use inner::anchorProbe;

    // The query references anchorProbe unqualified; the import satisfies it.
    assert!(has_member!(Buoy, anchor));
    assert!(!has_member!(Ship, anchor));
}

#[test]
fn function_scope_registration_works() {
    #[derive(Members)]
    struct Local {
        pub beacon: u8,
    }

    member_probe!(beacon);

    assert!(has_member!(Local, beacon));
    assert!(!has_member!(Ship, beacon));
}
