//! # ecpk
//!
//! Elliptic-curve key management over standard named curves: key
//! generation, SEC1 / PKCS#8 / SubjectPublicKeyInfo import and export in PEM
//! or DER, capability introspection and public/private pair verification.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecpk = "0.3"
//! ```
//!
//! ```
//! use ecpk::prelude::*;
//!
//! let mut key = Ecp::with_type(PkType::Ecdsa);
//! key.generate_key(CurveId::Secp256r1)?;
//!
//! let mut public = Ecp::with_type(PkType::Ecdsa);
//! public.import_public_key(&key.export_public_key(KeyFormat::Pem)?)?;
//! assert!(check_pair(&public, &key));
//! # Ok::<(), ecpk::Error>(())
//! ```
//!
//! ## Features
//!
//! - `all-curves` (default): every curve below
//! - `secp192r1`, `secp224r1`, `secp256r1`, `secp384r1`, `secp521r1`,
//!   `secp256k1`: individual named curves
//! - `ecdsa` (default): report signing capability for EC and ECDSA keys
//! - `ecdh` (default): enable [`Ecp::shared_secret`](pk::Ecp::shared_secret)
//! - `pk-export` (default): enable key export
//! - `serde`: `Serialize`/`Deserialize` for the public value types
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecpk-api`]: error taxonomy, value types and encoding traits
//! - [`ecpk-params`]: named-curve constant tables
//! - [`ecpk-algorithms`]: curve registry, curve backend and key encodings
//! - [`ecpk-pk`]: the EC key entity, capability model and pair verifier

pub use ecpk_algorithms as algorithms;
pub use ecpk_api as api;
pub use ecpk_internal as internal;
pub use ecpk_params as params;
pub use ecpk_pk as pk;

pub use ecpk_algorithms::{is_supported, supported_curves};
pub use ecpk_api::{Error, Result};
pub use ecpk_pk::{check_pair, supports, supports_feature, Ecp};

/// Common imports for ecpk users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Value types
    pub use crate::api::{ActionFlags, CurveId, Feature, KeyFormat, PkType};

    // Encoding traits
    pub use crate::api::{KeyExport, KeyImport};

    // Key entity and free functions
    pub use crate::pk::{check_pair, supports, supports_feature, Ecp};
    pub use crate::algorithms::{is_supported, supported_curves};
}
