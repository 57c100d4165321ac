//! Demonstration: exact-name member detection across unrelated types.
//!
//! Three types that share no trait or base: one with a `heading: f64` field,
//! one with `heading: bool` (same name, different type), one with `headings`
//! (different name). Only the name decides the result.

#![allow(dead_code)]

use member_probe::{has_member, member_probe, Members};

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
    pub heading: bool,
}

#[derive(Members)]
pub struct C {
    pub headings: bool,
}

member_probe!(heading);

fn main() {
    println!("has_member(T, heading) {}", has_member!(CubeSphereObject, heading));
    println!();
    println!("has_member(T, heading) {}", has_member!(B, heading));
    println!();
    println!("has_member(T, heading) {}", has_member!(C, heading));
    println!();
}
