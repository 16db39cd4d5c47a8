//! Constant values for ecpk elliptic-curve key operations
//!
//! This crate carries the static tables the other ecpk crates consult:
//! named-curve identifiers, sizes and ASN.1 object identifiers.

pub mod traditional;
