//! Capability model
//!
//! Pure functions over [`PkType`] and a [`Capabilities`] snapshot. The
//! entity-facing helpers read the process-wide snapshot; the `*_in`
//! variants take an explicit one so narrowed builds can be exercised.

use ecpk_algorithms::{capabilities, Capabilities};
use ecpk_api::{ActionFlags, Feature, PkType};

/// What a key type can be used for in a given build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub supports_ecdh: bool,
    pub supports_sign: bool,
}

/// How much key material an entity holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPresence {
    Empty,
    PublicOnly,
    PublicAndPrivate,
}

/// Capabilities of `variant` in this build
pub fn capabilities_of(variant: PkType) -> Capability {
    capabilities_in(variant, capabilities())
}

/// Capabilities of `variant` under `caps`
pub fn capabilities_in(variant: PkType, caps: &Capabilities) -> Capability {
    match variant {
        PkType::EcKey => Capability {
            supports_ecdh: true,
            supports_sign: caps.ecdsa(),
        },
        PkType::EcKeyDh => Capability {
            supports_ecdh: true,
            supports_sign: false,
        },
        PkType::Ecdsa => Capability {
            supports_ecdh: false,
            supports_sign: caps.ecdsa(),
        },
    }
}

/// Whether an entity declared as `declared` may act as `requested`
pub fn compatible(declared: PkType, requested: PkType) -> bool {
    compatible_in(declared, requested, capabilities())
}

/// [`compatible`] under an explicit snapshot
pub fn compatible_in(declared: PkType, requested: PkType, caps: &Capabilities) -> bool {
    match (declared, requested) {
        (PkType::EcKey, PkType::EcKey | PkType::EcKeyDh) => true,
        (PkType::EcKey, PkType::Ecdsa) => caps.ecdsa(),
        (PkType::EcKeyDh, PkType::EcKeyDh | PkType::EcKey) => true,
        (PkType::EcKeyDh, PkType::Ecdsa) => false,
        (PkType::Ecdsa, PkType::Ecdsa) => caps.ecdsa(),
        (PkType::Ecdsa, PkType::EcKey | PkType::EcKeyDh) => false,
    }
}

/// Operations an entity can perform right now
///
/// EC keys never encrypt or decrypt. Signing needs the private key;
/// verifying needs only the public key.
pub fn action_flags(variant: PkType, presence: KeyPresence, caps: &Capabilities) -> ActionFlags {
    if presence == KeyPresence::Empty {
        return ActionFlags::none();
    }
    let signer = capabilities_in(variant, caps).supports_sign;
    ActionFlags::new(
        false,
        false,
        signer && presence == KeyPresence::PublicAndPrivate,
        signer,
    )
}

/// Whether keys of `pk_type` can be created in this build
pub fn supports(pk_type: PkType) -> bool {
    supports_in(pk_type, capabilities())
}

/// [`supports`] under an explicit snapshot
pub fn supports_in(pk_type: PkType, caps: &Capabilities) -> bool {
    match pk_type {
        PkType::EcKey | PkType::EcKeyDh => caps.has_any_curve(),
        PkType::Ecdsa => caps.has_any_curve() && caps.ecdsa(),
    }
}

/// Whether an optional feature is compiled in
pub fn supports_feature(feature: Feature) -> bool {
    capabilities().supports_feature(feature)
}
