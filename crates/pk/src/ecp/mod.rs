//! EC key entity
//!
//! [`Ecp`] couples a declared [`PkType`] with optional key material on a
//! named curve. Material only changes through [`Ecp::reset_as`], key
//! generation and import. Every fallible mutation builds the new material
//! first and swaps it in last, so an error leaves the entity as it was.

use core::fmt;

use ecpk_algorithms::encoding::{self, KeyFamily};
use ecpk_algorithms::{capabilities, EcPrivate, EcPublic};
use ecpk_api::error::validate;
use ecpk_api::{
    ActionFlags, CurveId, Error, KeyExport, KeyFormat, KeyImport, PkType, Result,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::capability::{self, KeyPresence};

/// Key material held by an entity
#[derive(Debug, Clone, Default)]
pub enum KeyMaterial {
    #[default]
    Empty,
    PublicOnly(EcPublic),
    PublicAndPrivate(EcPrivate),
}

impl KeyMaterial {
    pub fn presence(&self) -> KeyPresence {
        match self {
            KeyMaterial::Empty => KeyPresence::Empty,
            KeyMaterial::PublicOnly(_) => KeyPresence::PublicOnly,
            KeyMaterial::PublicAndPrivate(_) => KeyPresence::PublicAndPrivate,
        }
    }

    /// The public half, if any material is held
    pub fn public(&self) -> Option<&EcPublic> {
        match self {
            KeyMaterial::Empty => None,
            KeyMaterial::PublicOnly(public) => Some(public),
            KeyMaterial::PublicAndPrivate(private) => Some(private.public()),
        }
    }

    /// The private key, if held
    pub fn private(&self) -> Option<&EcPrivate> {
        match self {
            KeyMaterial::PublicAndPrivate(private) => Some(private),
            _ => None,
        }
    }
}

/// An elliptic-curve key of a declared type
///
/// ```
/// use ecpk_api::{CurveId, KeyExport, KeyFormat, PkType};
/// use ecpk_pk::Ecp;
///
/// let mut key = Ecp::with_type(PkType::EcKey);
/// key.generate_key(CurveId::Secp256r1)?;
/// let pem = key.export_public_key(KeyFormat::Pem)?;
/// assert!(pem.starts_with(b"-----BEGIN PUBLIC KEY-----"));
/// # Ok::<(), ecpk_api::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct Ecp {
    pk_type: PkType,
    material: KeyMaterial,
}

impl Ecp {
    /// An empty generic EC key
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty key of the given type
    pub fn with_type(pk_type: PkType) -> Self {
        Self {
            pk_type,
            material: KeyMaterial::Empty,
        }
    }

    /// Drop all material and re-declare the type
    pub fn reset_as(&mut self, pk_type: PkType) {
        debug!(from = %self.pk_type, to = %pk_type, "resetting EC key");
        self.pk_type = pk_type;
        self.material = KeyMaterial::Empty;
    }

    /// Generate a fresh key pair on `curve` from the operating system RNG
    pub fn generate_key(&mut self, curve: CurveId) -> Result<()> {
        self.generate_key_with_rng(curve, &mut OsRng)
    }

    /// Generate a fresh key pair on `curve` from `rng`
    ///
    /// `CurveId::None` is an `InvalidArgument`; a curve missing from the
    /// build is `UnsupportedFeature`.
    pub fn generate_key_with_rng<R>(&mut self, curve: CurveId, rng: &mut R) -> Result<()>
    where
        R: CryptoRng + RngCore,
    {
        let private =
            EcPrivate::generate(curve, rng).map_err(|e| e.with_context("Ecp::generate_key"))?;
        debug!(pk_type = %self.pk_type, curve = %curve, "generated EC key pair");
        self.material = KeyMaterial::PublicAndPrivate(private);
        Ok(())
    }

    /// Declared key type
    pub fn pk_type(&self) -> PkType {
        self.pk_type
    }

    /// Display name of the declared type
    pub fn name(&self) -> &'static str {
        self.pk_type.name()
    }

    /// Held material
    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    pub fn has_private_key(&self) -> bool {
        self.material.private().is_some()
    }

    pub fn has_public_key(&self) -> bool {
        self.material.public().is_some()
    }

    /// Curve of the held material
    pub fn curve(&self) -> Option<CurveId> {
        self.material.public().map(EcPublic::curve)
    }

    /// Curve size in bits, 0 when empty
    pub fn bitlen(&self) -> usize {
        self.curve().map_or(0, CurveId::bit_len)
    }

    /// Uncompressed SEC1 encoding of the public point
    pub fn public_point(&self) -> Option<&[u8]> {
        self.material.public().map(EcPublic::as_bytes)
    }

    /// Whether this entity may act as `requested`, regardless of material
    pub fn can_do(&self, requested: PkType) -> bool {
        capability::compatible(self.pk_type, requested)
    }

    /// Operations available with the held material
    pub fn what_can_do(&self) -> ActionFlags {
        capability::action_flags(self.pk_type, self.material.presence(), capabilities())
    }

    /// Raw EC-DH shared secret (affine x-coordinate) with `peer`
    pub fn shared_secret(&self, peer: &Ecp) -> Result<Zeroizing<Vec<u8>>> {
        validate::feature(capabilities().ecdh(), "ecdh")?;
        validate::state(
            capability::capabilities_of(self.pk_type).supports_ecdh,
            "Ecp::shared_secret",
            "key type does not support EC-DH",
        )?;
        let private = self
            .material
            .private()
            .ok_or_else(|| Error::invalid_state("Ecp::shared_secret", "no private key"))?;
        let public = peer
            .material
            .public()
            .ok_or_else(|| Error::invalid_argument("Ecp::shared_secret", "peer holds no public key"))?;
        private.diffie_hellman(public)
    }

    /// Declared type after importing material of `family`
    fn resolve_type(&self, family: KeyFamily) -> Result<PkType> {
        match (family, self.pk_type) {
            (KeyFamily::Generic, declared) => Ok(declared),
            (KeyFamily::DhOnly, PkType::Ecdsa) => Err(Error::parse(
                "EC key import",
                "id-ecDH key cannot be loaded as ECDSA",
            )),
            (KeyFamily::DhOnly, _) => Ok(PkType::EcKeyDh),
        }
    }

    /// Algorithm family written on public export
    fn family(&self) -> KeyFamily {
        match self.pk_type {
            PkType::EcKeyDh => KeyFamily::DhOnly,
            PkType::EcKey | PkType::Ecdsa => KeyFamily::Generic,
        }
    }

    fn require_export() -> Result<()> {
        validate::feature(capabilities().pk_export(), "pk export")
    }
}

impl fmt::Debug for Ecp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecp")
            .field("pk_type", &self.pk_type)
            .field("curve", &self.curve())
            .field("presence", &self.material.presence())
            .finish()
    }
}

impl KeyExport for Ecp {
    fn export_key(&self, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>> {
        Self::require_export()?;
        let private = self
            .material
            .private()
            .ok_or_else(|| Error::invalid_state("Ecp::export_key", "no private key"))?;
        let encoded = encoding::encode_private(private, format)?;
        debug!(curve = %private.curve(), ?format, "exported EC private key");
        Ok(encoded)
    }

    fn export_public_key(&self, format: KeyFormat) -> Result<Vec<u8>> {
        Self::require_export()?;
        let public = self
            .material
            .public()
            .ok_or_else(|| Error::invalid_state("Ecp::export_public_key", "no key material"))?;
        let encoded = encoding::encode_public(public, self.family(), format)?;
        debug!(curve = %public.curve(), ?format, "exported EC public key");
        Ok(encoded)
    }
}

impl KeyImport for Ecp {
    fn import_key(&mut self, encoded: &[u8]) -> Result<()> {
        let imported = encoding::decode_private(encoded)
            .and_then(|decoded| Ok((self.resolve_type(decoded.family)?, decoded.key)));
        let (pk_type, key) = match imported {
            Ok(parts) => parts,
            Err(err) => {
                warn!(kind = ?err.kind(), "rejected EC private key import");
                return Err(err);
            }
        };

        debug!(pk_type = %pk_type, curve = %key.curve(), "imported EC private key");
        self.pk_type = pk_type;
        self.material = KeyMaterial::PublicAndPrivate(key);
        Ok(())
    }

    fn import_public_key(&mut self, encoded: &[u8]) -> Result<()> {
        let imported = encoding::decode_public(encoded)
            .and_then(|decoded| Ok((self.resolve_type(decoded.family)?, decoded.key)));
        let (pk_type, key) = match imported {
            Ok(parts) => parts,
            Err(err) => {
                warn!(kind = ?err.kind(), "rejected EC public key import");
                return Err(err);
            }
        };

        debug!(pk_type = %pk_type, curve = %key.curve(), "imported EC public key");
        self.pk_type = pk_type;
        self.material = KeyMaterial::PublicOnly(key);
        Ok(())
    }
}
