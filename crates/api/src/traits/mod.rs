//! Trait definitions shared across the ecpk crates

pub mod serialize;

pub use serialize::{KeyExport, KeyImport};
