//! Key serialization
//!
//! Private keys are written as SEC1 `ECPrivateKey` with named-curve
//! parameters and the public point; public keys as `SubjectPublicKeyInfo`
//! under `id-ecPublicKey`, or `id-ecDH` for DH-only keys. Either can be
//! armored as PEM.
//!
//! Decoding accepts PEM or DER, detected from the input. Private keys may
//! also arrive wrapped in PKCS#8, and either kind may be tagged `id-ecDH`,
//! which is reported back as [`KeyFamily::DhOnly`].

mod ec_private_key;
mod pem;
mod private_key_info;
mod public_key_info;

pub use pem::{EC_PRIVATE_KEY_LABEL, PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};

use der::asn1::ObjectIdentifier;
use ecpk_api::{CurveId, Error, KeyFormat, Result};
use ecpk_params::traditional::ec as params;
use zeroize::Zeroizing;

use crate::ec::registry;
use crate::ec::{EcPrivate, EcPublic};

/// `id-ecPublicKey`: unrestricted EC key
pub(crate) const ID_EC_PUBLIC_KEY: ObjectIdentifier =
    ObjectIdentifier::new_unwrap(params::ID_EC_PUBLIC_KEY);

/// `id-ecDH`: EC key restricted to key agreement
pub(crate) const ID_EC_DH: ObjectIdentifier = ObjectIdentifier::new_unwrap(params::ID_EC_DH);

/// Algorithm family a decoded key was tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFamily {
    /// `id-ecPublicKey`, or SEC1 with no algorithm identifier
    Generic,
    /// `id-ecDH`
    DhOnly,
}

/// A private key read from PEM or DER
#[derive(Debug, Clone)]
pub struct DecodedPrivate {
    pub family: KeyFamily,
    pub key: EcPrivate,
}

/// A public key read from PEM or DER
#[derive(Debug, Clone)]
pub struct DecodedPublic {
    pub family: KeyFamily,
    pub key: EcPublic,
}

/// Object identifier of a curve
pub(crate) fn curve_oid(curve: CurveId) -> Result<ObjectIdentifier> {
    let oid = curve
        .oid()
        .ok_or_else(|| Error::unsupported(curve.name()))?;
    ObjectIdentifier::new(oid).map_err(|e| Error::invalid_argument("curve OID", e.to_string()))
}

/// Curve named by `oid`, which must be known to the registry and
/// compiled into this build
pub(crate) fn curve_from_oid(oid: &ObjectIdentifier) -> Result<CurveId> {
    let curve = CurveId::from_oid(&oid.to_string())
        .ok_or_else(|| Error::parse("EC named curve", format!("unknown curve {}", oid)))?;
    registry::require(curve)?;
    Ok(curve)
}

/// Serialize a private key as SEC1 `ECPrivateKey`
pub fn encode_private(key: &EcPrivate, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>> {
    let der = ec_private_key::encode(key)?;
    pem::armor(EC_PRIVATE_KEY_LABEL, &der, format).map(Zeroizing::new)
}

/// Serialize a public key as `SubjectPublicKeyInfo` tagged with `family`
pub fn encode_public(key: &EcPublic, family: KeyFamily, format: KeyFormat) -> Result<Vec<u8>> {
    let der = public_key_info::encode(key, family)?;
    pem::armor(PUBLIC_KEY_LABEL, &der, format)
}

/// Parse a private key from PEM or DER
///
/// PEM must be labelled `EC PRIVATE KEY` or `PRIVATE KEY`. Raw DER may be
/// either structure.
pub fn decode_private(input: &[u8]) -> Result<DecodedPrivate> {
    let unarmored = pem::unarmor(input)?;
    let der = unarmored.der.as_slice();

    match unarmored.label.as_deref() {
        Some(EC_PRIVATE_KEY_LABEL) => decode_sec1(der),
        Some(PRIVATE_KEY_LABEL) => private_key_info::decode(der),
        Some(other) => Err(Error::parse(
            "private key PEM",
            format!("unexpected label {:?}", other),
        )),
        None if private_key_info::is_private_key_info(der) => private_key_info::decode(der),
        None => decode_sec1(der),
    }
}

/// Parse a public key from PEM or DER
///
/// PEM must be labelled `PUBLIC KEY`.
pub fn decode_public(input: &[u8]) -> Result<DecodedPublic> {
    let unarmored = pem::unarmor(input)?;

    match unarmored.label.as_deref() {
        Some(PUBLIC_KEY_LABEL) | None => {
            let (family, key) = public_key_info::decode(&unarmored.der)?;
            Ok(DecodedPublic { family, key })
        }
        Some(other) => Err(Error::parse(
            "public key PEM",
            format!("unexpected label {:?}", other),
        )),
    }
}

fn decode_sec1(der: &[u8]) -> Result<DecodedPrivate> {
    let key = ec_private_key::decode(der, None)?;
    Ok(DecodedPrivate {
        family: KeyFamily::Generic,
        key,
    })
}
