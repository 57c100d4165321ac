//! Shared expansion helpers (member-name key encoding).

pub mod key;
