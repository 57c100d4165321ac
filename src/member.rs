//! # Layer 1: Member declarations and the probe contract
//!
//! `HasMember<K>` is the opt-in registry: each impl records one accessible
//! member of one type, keyed by the type-level encoding of the member's name.
//! Impls are produced by `#[derive(Members)]` (pub fields), `#[probe_members]`
//! (pub methods and associated consts), or `impl_member!` (manual escape
//! hatch). The `has_member!` query then resolves against these impls via
//! inherent-const fallback, entirely at compile time.

use crate::primitives::{Absent, Bool, BoolOr, KCons, KNil, KeyEq};

/// Marker: the implementing type has an accessible member whose name encodes
/// to key `K`.
///
/// Impls are generated from type definitions, never written against an
/// ad-hoc key by hand. Declaring the same member name twice for one type
/// (e.g. a derived field plus a manual `impl_member!`) produces overlapping
/// impls and is rejected by coherence: ambiguous membership is a build
/// error, not a silent pick.
pub trait HasMember<K> {}

/// A registered probe name.
///
/// Generated by `member_probe!`; binds the marker type for a member name to
/// that name's key. Registration must precede any `has_member!` query for
/// the name, and at most one registration per name is allowed per scope.
pub trait MemberName {
    /// The type-level key of the registered name.
    type Key;
}

/// Key of a registered probe name.
pub type Key<M> = <M as MemberName>::Key;

/// Pub-field name list of a type, generated by `#[derive(Members)]`.
///
/// `Names` is a `KCons` list of member keys in declaration order. Types
/// without named fields carry the empty list.
pub trait Fields {
    type Names;
}

/// Does a key list contain key `K`?
pub trait Contains<K> {
    type Out: Bool;
    /// The boolean result of the lookup as a constant.
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

impl<K> Contains<K> for KNil {
    type Out = Absent;
}

impl<K, H, T> Contains<K> for KCons<H, T>
where
    H: KeyEq<K>,
    T: Contains<K>,
    <H as KeyEq<K>>::Out: BoolOr<<T as Contains<K>>::Out>,
{
    type Out = <<H as KeyEq<K>>::Out as BoolOr<<T as Contains<K>>::Out>>::Out;
}

/// Type-level field lookup: `Present` iff `T` derives `Members` and declares
/// a pub field named by the registered probe `M`.
pub type HasField<T, M> = <<T as Fields>::Names as Contains<Key<M>>>::Out;
