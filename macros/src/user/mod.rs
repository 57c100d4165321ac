//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Members)]` | on struct | Declare pub fields as members |
//! | `#[probe_members]` | on inherent impl | Declare pub methods/consts as members |

pub mod members;
pub mod probe_members;
