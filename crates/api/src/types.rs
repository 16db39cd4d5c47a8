//! Core value types for the ecpk library
//!
//! These are plain `Copy` values describing curves, key variants, encodings
//! and capabilities. None of them carry key material.

use core::fmt;
use core::str::FromStr;

use ecpk_params::traditional::ec::{self as params, NamedCurveParams};

use crate::{Error, Result};

/// Standard named curves
///
/// `None` is a sentinel meaning "no curve selected"; it is never a valid
/// argument to key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveId {
    #[default]
    None,
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Secp192k1,
    Secp224k1,
    Secp256k1,
    Bp256r1,
    Bp384r1,
    Bp512r1,
    Curve25519,
}

impl CurveId {
    /// Every real curve, in registry order
    pub const ALL: [CurveId; 12] = [
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
        CurveId::Curve25519,
    ];

    /// Constant table entry for this curve, `None` for the sentinel
    pub fn params(self) -> Option<&'static NamedCurveParams> {
        let p = match self {
            CurveId::None => return None,
            CurveId::Secp192r1 => &params::SECP192R1,
            CurveId::Secp224r1 => &params::SECP224R1,
            CurveId::Secp256r1 => &params::SECP256R1,
            CurveId::Secp384r1 => &params::SECP384R1,
            CurveId::Secp521r1 => &params::SECP521R1,
            CurveId::Secp192k1 => &params::SECP192K1,
            CurveId::Secp224k1 => &params::SECP224K1,
            CurveId::Secp256k1 => &params::SECP256K1,
            CurveId::Bp256r1 => &params::BP256R1,
            CurveId::Bp384r1 => &params::BP384R1,
            CurveId::Bp512r1 => &params::BP512R1,
            CurveId::Curve25519 => &params::CURVE25519,
        };
        Some(p)
    }

    /// Canonical curve name (`"none"` for the sentinel)
    pub fn name(self) -> &'static str {
        self.params().map_or("none", |p| p.name)
    }

    /// Group order size in bits, 0 for the sentinel
    pub fn bit_len(self) -> usize {
        self.params().map_or(0, |p| p.bits)
    }

    /// Serialized scalar / field element size in bytes, 0 for the sentinel
    pub fn field_size(self) -> usize {
        self.params().map_or(0, |p| p.field_size)
    }

    /// Dotted named-curve OID, if the curve has one
    pub fn oid(self) -> Option<&'static str> {
        self.params().and_then(|p| p.oid)
    }

    /// Look a curve up by its dotted named-curve OID
    pub fn from_oid(oid: &str) -> Option<CurveId> {
        Self::ALL.into_iter().find(|c| c.oid() == Some(oid))
    }

    /// Look a curve up by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<CurveId> {
        if name.eq_ignore_ascii_case("none") {
            return Some(CurveId::None);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Whether this is the `None` sentinel
    pub fn is_none(self) -> bool {
        self == CurveId::None
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CurveId::from_name(s)
            .ok_or_else(|| Error::invalid_argument("CurveId::from_str", format!("unknown curve {:?}", s)))
    }
}

/// Elliptic-curve key type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PkType {
    /// Generic EC key: EC-DH, and ECDSA when available
    #[default]
    EcKey,
    /// EC key restricted to Diffie-Hellman
    EcKeyDh,
    /// EC key restricted to ECDSA signatures
    Ecdsa,
}

impl PkType {
    /// Human-readable algorithm name
    pub fn name(self) -> &'static str {
        match self {
            PkType::EcKey => "EC",
            PkType::EcKeyDh => "EC_DH",
            PkType::Ecdsa => "ECDSA",
        }
    }
}

impl fmt::Display for PkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a key can currently be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionFlags {
    pub encrypt: bool,
    pub decrypt: bool,
    pub sign: bool,
    pub verify: bool,
}

impl ActionFlags {
    pub const fn new(encrypt: bool, decrypt: bool, sign: bool, verify: bool) -> Self {
        Self {
            encrypt,
            decrypt,
            sign,
            verify,
        }
    }

    /// All four capabilities false
    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    /// Whether at least one capability is set
    pub fn any(&self) -> bool {
        self.encrypt || self.decrypt || self.sign || self.verify
    }
}

impl fmt::Display for ActionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "encrypt: {} , decrypt: {} , sign: {} , verify: {}",
            self.encrypt, self.decrypt, self.sign, self.verify
        )
    }
}

/// Key encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyFormat {
    /// RFC 7468 ASCII armor around DER
    #[default]
    Pem,
    /// Raw ASN.1 DER
    Der,
}

/// Optional build features that can be queried at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Key export (`export_key` / `export_public_key`)
    PkExport,
    /// EC-DH shared secret computation
    Ecdh,
}
