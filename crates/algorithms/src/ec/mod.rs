//! Elliptic-curve key material
//!
//! [`EcPublic`] and [`EcPrivate`] are validated, curve-tagged key values.
//! They can only be built through constructors that check the material
//! against the curve, so holding one means the bytes inside are well formed.

mod backend;
pub mod registry;

use core::fmt;

use ecpk_api::{CurveId, Result};
use ecpk_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// A validated public point on a named curve
///
/// The point is held in uncompressed SEC1 form (`0x04 || X || Y`), so two
/// values are equal exactly when their affine coordinates are equal.
#[derive(Clone, PartialEq, Eq)]
pub struct EcPublic {
    curve: CurveId,
    point: Vec<u8>,
}

impl EcPublic {
    /// Validate a SEC1 point (compressed or uncompressed) on `curve`
    pub fn from_sec1(curve: CurveId, point: &[u8]) -> Result<Self> {
        registry::require(curve)?;
        let point = backend::normalize_point(curve, point)?;
        Ok(Self { curve, point })
    }

    /// Curve this point lives on
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Uncompressed SEC1 encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.point
    }

    /// Constant-time coordinate comparison
    pub fn ct_eq(&self, other: &EcPublic) -> bool {
        self.curve == other.curve && ct_eq(&self.point, &other.point)
    }
}

impl fmt::Debug for EcPublic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPublic")
            .field("curve", &self.curve)
            .field("point", &hex::encode(&self.point))
            .finish()
    }
}

/// A private scalar together with its public point
///
/// The scalar is zeroized on drop and never printed.
#[derive(Clone)]
pub struct EcPrivate {
    curve: CurveId,
    scalar: Zeroizing<Vec<u8>>,
    public: EcPublic,
}

impl EcPrivate {
    /// Generate a fresh key pair on `curve`
    pub fn generate<R>(curve: CurveId, rng: &mut R) -> Result<Self>
    where
        R: CryptoRng + RngCore,
    {
        registry::require(curve)?;
        let (scalar, point) = backend::generate(curve, rng)?;
        Ok(Self {
            curve,
            scalar,
            public: EcPublic { curve, point },
        })
    }

    /// Rebuild a key pair from a big-endian scalar of the curve's field size
    ///
    /// The scalar must lie in `[1, n-1]`.
    pub fn from_scalar(curve: CurveId, scalar: &[u8]) -> Result<Self> {
        registry::require(curve)?;
        let point = backend::derive_public(curve, scalar)?;
        Ok(Self {
            curve,
            scalar: Zeroizing::new(scalar.to_vec()),
            public: EcPublic { curve, point },
        })
    }

    /// Curve of this key
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// The public half
    pub fn public(&self) -> &EcPublic {
        &self.public
    }

    /// Big-endian scalar bytes
    pub(crate) fn scalar(&self) -> &[u8] {
        &self.scalar
    }

    /// Recompute the public point from the scalar
    pub fn derive_public(&self) -> Result<EcPublic> {
        let point = backend::derive_public(self.curve, &self.scalar)?;
        Ok(EcPublic {
            curve: self.curve,
            point,
        })
    }

    /// Raw EC-DH shared secret with `peer` (affine x-coordinate)
    pub fn diffie_hellman(&self, peer: &EcPublic) -> Result<Zeroizing<Vec<u8>>> {
        ecpk_api::error::validate::argument(
            peer.curve == self.curve,
            "EcPrivate::diffie_hellman",
            "peer key is on a different curve",
        )?;
        backend::diffie_hellman(self.curve, &self.scalar, &peer.point)
    }
}

impl fmt::Debug for EcPrivate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivate")
            .field("curve", &self.curve)
            .field("scalar", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}
