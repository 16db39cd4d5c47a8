//! Shared fixtures and helpers for the ecpk integration tests

pub mod fixtures;

use ecpk::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Every curve the registry knows about, supported or not
pub const ALL_CURVES: [CurveId; 11] = [
    CurveId::Secp192r1,
    CurveId::Secp224r1,
    CurveId::Secp256r1,
    CurveId::Secp384r1,
    CurveId::Secp521r1,
    CurveId::Secp192k1,
    CurveId::Secp224k1,
    CurveId::Secp256k1,
    CurveId::Bp256r1,
    CurveId::Bp384r1,
    CurveId::Bp512r1,
];

/// Key variants that can hold signing keys
pub const SIGN_CAPABLE: [PkType; 2] = [PkType::EcKey, PkType::Ecdsa];

/// Deterministic key of `pk_type` on `curve`
pub fn generated(pk_type: PkType, curve: CurveId, seed: u64) -> Result<Ecp> {
    let mut key = Ecp::with_type(pk_type);
    key.generate_key_with_rng(curve, &mut ChaCha20Rng::seed_from_u64(seed))?;
    Ok(key)
}

/// Expected (private, public-only) action flags for a sign-capable key
pub fn sign_capable_flags() -> (ActionFlags, ActionFlags) {
    if supports(PkType::Ecdsa) {
        (
            ActionFlags::new(false, false, true, true),
            ActionFlags::new(false, false, false, true),
        )
    } else {
        (ActionFlags::none(), ActionFlags::none())
    }
}
