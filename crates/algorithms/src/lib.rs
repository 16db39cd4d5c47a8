//! Elliptic-curve building blocks for the ecpk library
//!
//! - [`ec::registry`]: which named curves and algorithms this build carries
//! - [`ec`]: key material types backed by the RustCrypto curve crates
//! - [`encoding`]: SEC1 / PKCS#8 / SubjectPublicKeyInfo in PEM or DER

pub mod ec;
pub mod encoding;

pub use ec::registry::{capabilities, is_supported, supported_curves, Capabilities};
pub use ec::{EcPrivate, EcPublic};
pub use encoding::{DecodedPrivate, DecodedPublic, KeyFamily};
