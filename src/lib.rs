#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

//! # member-probe
//!
//! Compile-time member-name detection for unrelated types.
//!
//! **Does type `T` have an accessible member named `M`?** Answered as a
//! `const bool` during compilation, for any member kind (field, method,
//! associated const), regardless of the member's own type or signature.
//!
//! ## Architecture
//!
//! Rust has no substitution-failure idiom that can silently test an
//! arbitrary member name, so detection is split into two stable tricks:
//!
//! ### 1. Structural keys
//! A member name is encoded as a type: a cons-list of bytes, each byte a
//! pair of type-level nibbles. The encoding is deterministic, so the same
//! name always encodes to the same type:
//!
//! ```text
//! Member Name -> ASCII Bytes -> Nibble Pairs -> KCons<Byte<..>, ...>
//! ```
//!
//! ### 2. Inherent Const Fallback
//! `has_member!(T, name)` declares a local probe wrapper with a fallback
//! trait const (`false`, viable for every type) and an inherent const
//! (`true`, bounded on `T: HasMember<key>`). Constant resolution prefers the
//! inherent candidate exactly when the bound holds, the stable analog of
//! overload-resolution preference.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), Byte, Key lists         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Member Registry                                         |
//! |  - HasMember<K>, MemberName, Fields, Contains                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - #[derive(Members)], #[probe_members], impl_member!             |
//! |  - member_probe! (registration), has_member! (query)              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Properties
//!
//! - **Zero runtime cost**: every check resolves during compilation; the
//!   probe emits no object code and has no runtime failure mode.
//! - **Name-exact**: `heading` never matches `headings`; keys of different
//!   length are distinct types.
//! - **Accessibility-gated**: only `pub` members are declared, so a private
//!   field reports `false`, not an error.
//! - **Errors are diagnostics**: double registration is a redefinition
//!   error, query-before-registration an unresolved name, and an ambiguous
//!   (doubly declared) member a coherence conflict.
//!
//! ## Quick Start
//!
//! ```
//! use member_probe::prelude::*;
//! use member_probe::{has_member, member_probe};
//!
//! // Declare members by deriving (pub fields only)
//! #[derive(Members)]
//! pub struct CubeSphereObject {
//!     pub heading: f64,
//!     pub width: f64,
//! }
//!
//! #[derive(Members)]
//! pub struct Compass {
//!     pub headings: [f64; 4],
//! }
//!
//! // Register the probe once per name, then query freely
//! member_probe!(heading);
//!
//! assert!(has_member!(CubeSphereObject, heading));
//! assert!(!has_member!(Compass, heading)); // name-exact
//! ```

// Allow `::member_probe` to work inside the crate itself
extern crate self as member_probe;

// Re-export paste for member_probe!/has_member! case conversion
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Member Registry
// =============================================================================
pub mod member;

// Syntax macros (member_probe!, has_member!, impl_member!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use member::{Contains, Fields, HasField, HasMember, Key, MemberName};
pub use primitives::bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, FromConst, If, Present, SelectBool};
pub use primitives::key::{Byte, ByteEq, KCons, KNil, KeyEq};
pub use primitives::nibble::{
    Nibble, NibbleEq,
    X0, X1, X2, X3, X4, X5, X6, X7,
    X8, X9, XA, XB, XC, XD, XE, XF,
};

// Re-export proc-macros
pub use macros::{member_key, probe_members, Members};

/// Common items for member probing.
pub mod prelude {
    pub use crate::member::{Contains, Fields, HasField, HasMember, Key, MemberName};
    pub use crate::primitives::bool::{Absent, Bool, FromConst, Present};
    pub use macros::{member_key, probe_members, Members};
    // Note: member_probe!, has_member!, impl_member! are #[macro_export] so
    // they live at the crate root.
}
