//! # Layer 0: Primitives (no dependencies)
//!
//! Type-level booleans, nibbles, and member-name keys.

pub mod bool;
pub mod key;
pub mod nibble;

pub use bool::{Absent, Bool, BoolAnd, BoolNot, BoolOr, FromConst, If, Present, SelectBool};
pub use key::{Byte, ByteEq, KCons, KNil, KeyEq};
pub use nibble::{
    Nibble, NibbleEq,
    X0, X1, X2, X3, X4, X5, X6, X7,
    X8, X9, XA, XB, XC, XD, XE, XF,
};
