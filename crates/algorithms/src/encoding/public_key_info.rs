//! X.509 `SubjectPublicKeyInfo` for EC keys (RFC 5480)

use der::asn1::{BitStringRef, ObjectIdentifier};
use der::{Decode, Encode};
use ecpk_api::error::ResultExt;
use ecpk_api::{Error, Result};
use spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoRef};

use super::{curve_from_oid, curve_oid, KeyFamily, ID_EC_DH, ID_EC_PUBLIC_KEY};
use crate::ec::EcPublic;

const CONTEXT: &str = "SubjectPublicKeyInfo";

/// DER-encode a public key with named-curve parameters
///
/// The algorithm is `id-ecDH` for [`KeyFamily::DhOnly`] and `id-ecPublicKey`
/// otherwise.
pub(crate) fn encode(key: &EcPublic, family: KeyFamily) -> Result<Vec<u8>> {
    let oid = curve_oid(key.curve())?;
    let info = SubjectPublicKeyInfoRef {
        algorithm: AlgorithmIdentifierRef {
            oid: algorithm_oid(family),
            parameters: Some((&oid).into()),
        },
        subject_public_key: BitStringRef::new(0, key.as_bytes()).or_invalid_argument(CONTEXT)?,
    };
    info.to_der().or_invalid_argument(CONTEXT)
}

/// Decode a DER `SubjectPublicKeyInfo` carrying an EC key
pub(crate) fn decode(der: &[u8]) -> Result<(KeyFamily, EcPublic)> {
    let info = SubjectPublicKeyInfoRef::from_der(der).or_parse_error(CONTEXT)?;
    let family = family_of(&info.algorithm.oid)?;

    let oid = info
        .algorithm
        .parameters_oid()
        .or_parse_error("EC named curve parameters")?;
    let curve = curve_from_oid(&oid)?;

    let point = info
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::parse(CONTEXT, "public key bit string is not octet aligned"))?;
    let key = EcPublic::from_sec1(curve, point)?;
    Ok((family, key))
}

fn algorithm_oid(family: KeyFamily) -> ObjectIdentifier {
    match family {
        KeyFamily::Generic => ID_EC_PUBLIC_KEY,
        KeyFamily::DhOnly => ID_EC_DH,
    }
}

/// Map an algorithm identifier OID to an EC key family
pub(crate) fn family_of(oid: &ObjectIdentifier) -> Result<KeyFamily> {
    if *oid == ID_EC_PUBLIC_KEY {
        Ok(KeyFamily::Generic)
    } else if *oid == ID_EC_DH {
        Ok(KeyFamily::DhOnly)
    } else {
        Err(Error::parse(CONTEXT, format!("algorithm {} is not an EC key", oid)))
    }
}
