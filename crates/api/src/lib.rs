//! Public API traits and types for the ecpk library
//!
//! This crate provides the public API surface shared by the ecpk crates:
//! the error taxonomy, the value types describing curves, key variants and
//! capabilities, and the key encoding traits.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{KeyExport, KeyImport};
