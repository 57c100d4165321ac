//! Type-level member-name keys.
//!
//! A key is a cons-list of `Byte`s, one per ASCII character of the member
//! name, each byte split into a high/low nibble pair:
//!
//! ```text
//! "heading" -> KCons<Byte<X6, X8>, KCons<Byte<X6, X5>, ... KNil>>
//!               'h' = 0x68          'e' = 0x65
//! ```
//!
//! The encoding is structural: two `member_key!` expansions of the same name
//! produce the same type, so type identity of keys is name identity. `KeyEq`
//! additionally decides equality as a type-level `Bool`, which is what lets
//! `Contains` scan a field list for a name.
//!
//! The byte table covers the ASCII range only; `member_key!` rejects anything
//! else at expansion time:
//!
//! ```compile_fail
//! type K = member_probe::member_key!("héading");
//! ```

use core::marker::PhantomData;

use super::bool::{Absent, Bool, BoolAnd, Present};
use super::nibble::{Nibble, NibbleEq};

/// Type-level byte: high and low nibble.
pub struct Byte<H, L>(PhantomData<(H, L)>);

/// Empty key (and empty key list).
pub struct KNil;

/// Cons cell, used at both levels: bytes within a key, keys within a list.
pub struct KCons<H, T>(PhantomData<(H, T)>);

// =============================================================================
// Byte equality
// =============================================================================

/// Type-level byte equality.
pub trait ByteEq<Other> {
    type Out: Bool;
}

impl<AH, AL, BH, BL> ByteEq<Byte<BH, BL>> for Byte<AH, AL>
where
    AH: NibbleEq<BH>,
    AL: NibbleEq<BL>,
    BH: Nibble,
    BL: Nibble,
    <AH as NibbleEq<BH>>::Out: BoolAnd<<AL as NibbleEq<BL>>::Out>,
{
    type Out = <<AH as NibbleEq<BH>>::Out as BoolAnd<<AL as NibbleEq<BL>>::Out>>::Out;
}

// =============================================================================
// Key equality
// =============================================================================

/// Type-level key equality. Keys of different length are unequal, so a name
/// never matches its own prefix ("heading" vs "headings").
pub trait KeyEq<Other> {
    type Out: Bool;
}

impl KeyEq<KNil> for KNil {
    type Out = Present;
}

impl<H, T> KeyEq<KCons<H, T>> for KNil {
    type Out = Absent;
}

impl<H, T> KeyEq<KNil> for KCons<H, T> {
    type Out = Absent;
}

impl<AH, AT, BH, BT> KeyEq<KCons<BH, BT>> for KCons<AH, AT>
where
    AH: ByteEq<BH>,
    AT: KeyEq<BT>,
    <AH as ByteEq<BH>>::Out: BoolAnd<<AT as KeyEq<BT>>::Out>,
{
    type Out = <<AH as ByteEq<BH>>::Out as BoolAnd<<AT as KeyEq<BT>>::Out>>::Out;
}
