//! SEC1 `ECPrivateKey` (RFC 5915)

use der::asn1::ObjectIdentifier;
use der::{Decode, Encode};
use ecpk_api::error::{validate, ResultExt};
use ecpk_api::{CurveId, Error, Result};
use sec1::{EcParameters, EcPrivateKey};
use zeroize::Zeroizing;

use super::{curve_from_oid, curve_oid};
use crate::ec::{EcPrivate, EcPublic};

const CONTEXT: &str = "SEC1 ECPrivateKey";

/// DER-encode a private key with named-curve parameters and its public point
pub(crate) fn encode(key: &EcPrivate) -> Result<Zeroizing<Vec<u8>>> {
    let oid = curve_oid(key.curve())?;
    let document = EcPrivateKey {
        private_key: key.scalar(),
        parameters: Some(EcParameters::NamedCurve(oid)),
        public_key: Some(key.public().as_bytes()),
    };
    let der = document.to_der().or_invalid_argument(CONTEXT)?;
    Ok(Zeroizing::new(der))
}

/// Decode a DER `ECPrivateKey`
///
/// `outer_curve` is the curve named by an enclosing PKCS#8 algorithm
/// identifier, if any. When both are present they must agree.
pub(crate) fn decode(der: &[u8], outer_curve: Option<ObjectIdentifier>) -> Result<EcPrivate> {
    let document = EcPrivateKey::from_der(der).or_parse_error(CONTEXT)?;

    let inner_curve = document.parameters.and_then(|p| p.named_curve());
    let oid = match (inner_curve, outer_curve) {
        (Some(inner), Some(outer)) if inner != outer => {
            return Err(Error::parse(CONTEXT, "curve parameters disagree with algorithm identifier"));
        }
        (Some(oid), _) | (None, Some(oid)) => oid,
        (None, None) => return Err(Error::parse(CONTEXT, "missing named curve parameters")),
    };
    let curve = curve_from_oid(&oid)?;

    let scalar = left_pad(document.private_key, curve)?;
    let key = EcPrivate::from_scalar(curve, &scalar)?;

    if let Some(embedded) = document.public_key {
        let embedded = EcPublic::from_sec1(curve, embedded)?;
        validate::parse(
            embedded.ct_eq(key.public()),
            CONTEXT,
            "embedded public key does not match private key",
        )?;
    }

    Ok(key)
}

/// Some encoders drop leading zero octets of the scalar; restore them
fn left_pad(scalar: &[u8], curve: CurveId) -> Result<Zeroizing<Vec<u8>>> {
    let size = curve.field_size();
    validate::parse(
        !scalar.is_empty() && scalar.len() <= size,
        CONTEXT,
        "private key octet string has the wrong size",
    )?;
    let mut padded = Zeroizing::new(vec![0u8; size]);
    padded[size - scalar.len()..].copy_from_slice(scalar);
    Ok(padded)
}
