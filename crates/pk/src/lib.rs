//! EC key entity for the ecpk library
//!
//! - [`Ecp`]: a key of a declared [`PkType`] that can be generated,
//!   imported, exported and queried for its capabilities
//! - [`capability`]: the type-compatibility table and action flags
//! - [`check_pair`]: whether two entities hold halves of the same key pair

pub mod capability;
pub mod ecp;
pub mod pair;

pub use capability::{compatible, supports, supports_feature, Capability, KeyPresence};
pub use ecp::{Ecp, KeyMaterial};
pub use pair::check_pair;

pub use ecpk_api::{ActionFlags, CurveId, Error, Feature, KeyFormat, PkType, Result};
