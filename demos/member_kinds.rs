//! Demonstration: every member kind the probe can see.
//!
//! Fields come from `#[derive(Members)]`, methods and associated consts from
//! `#[probe_members]`, and hand-declared members from `impl_member!`. The
//! non-pub method stays invisible: accessibility gates the result.

#![allow(dead_code)]

use member_probe::prelude::*;
use member_probe::{has_member, impl_member, member_probe};

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
impl_member!(Legacy { heading });

member_probe!(id, fuel, heading, MAX_SPEED, recalibrate);

fn main() {
    println!("Craft.id (pub field)            {}", has_member!(Craft, id));
    println!("Craft.fuel (private field)      {}", has_member!(Craft, fuel));
    println!("Craft.heading (pub method)      {}", has_member!(Craft, heading));
    println!("Craft.MAX_SPEED (assoc const)   {}", has_member!(Craft, MAX_SPEED));
    println!("Craft.recalibrate (private fn)  {}", has_member!(Craft, recalibrate));
    println!("Legacy.heading (impl_member!)   {}", has_member!(Legacy, heading));

    // The type-level surface agrees with the const surface for fields.
    let _id_is_a_field: HasField<Craft, idProbe> = Present;
    let _fuel_is_not: HasField<Craft, fuelProbe> = Absent;
}
