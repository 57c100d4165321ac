//! Procedural macros for the member-probe introspection crate
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `member_key!` | name | Expand a member name to its type-level key |
//! | `#[derive(Members)]` | struct | Declare pub fields as members |
//! | `#[probe_members]` | inherent impl | Declare pub methods/consts as members |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Members)]
//! pub struct Craft {
//!     pub heading: f64,
//! }
//!
//! #[probe_members]
//! impl Craft {
//!     pub fn turn_rate(&self) -> f64 { 0.0 }
//! }
//!
//! member_probe!(heading, turn_rate);
//! assert!(has_member!(Craft, heading));
//! assert!(has_member!(Craft, turn_rate));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// Macros
// =============================================================================

/// Expand a member name (identifier or string literal) to its type-level key.
///
/// # Usage
/// ```ignore
/// type HeadingKey = member_key!(heading);
/// type SameKey = member_key!("heading");   // identical type
/// ```
///
/// Non-ASCII names are rejected with an expansion error; key equality is
/// decided by a finite nibble table that only covers the ASCII range.
#[proc_macro]
pub fn member_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::key::KeyInput);
    common::key::expand_member_key(input).into()
}

/// Derive macro declaring every **pub named field** as a member.
///
/// Generates one `HasMember<key>` impl per pub field plus a `Fields` impl
/// carrying the type-level list of field keys in declaration order. Non-pub
/// fields are skipped: the probe reports accessible members only.
///
/// # Usage
/// ```ignore
/// #[derive(Members)]
/// pub struct Pose {
///     pub heading: f64,
///     secret: u8,       // not declared; has_member! reports false
/// }
/// ```
#[proc_macro_derive(Members)]
pub fn derive_members(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::members::expand_derive_members(input).into()
}

/// Attribute macro declaring every **pub method and pub associated const**
/// of an inherent impl block as a member.
///
/// The impl block itself is emitted unchanged; one `HasMember<key>` impl is
/// added per pub item. Applying it to a trait impl is an error: trait
/// members belong to the trait's contract, not the type's own surface.
///
/// # Usage
/// ```ignore
/// #[probe_members]
/// impl Craft {
///     pub fn heading(&self) -> f64 { self.heading }
///     pub const MAX_SPEED: u32 = 12;
///     fn internal(&self) {}     // not declared
/// }
/// ```
#[proc_macro_attribute]
pub fn probe_members(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemImpl);
    user::probe_members::expand_probe_members(attr.into(), item).into()
}
