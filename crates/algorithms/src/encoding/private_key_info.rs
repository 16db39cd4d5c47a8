//! PKCS#8 `PrivateKeyInfo` wrapping a SEC1 key (RFC 5208, RFC 5915 section 3)

use der::Decode;
use ecpk_api::error::ResultExt;
use ecpk_api::Result;
use pkcs8::PrivateKeyInfo;

use super::public_key_info::family_of;
use super::{ec_private_key, DecodedPrivate};

const CONTEXT: &str = "PKCS#8 PrivateKeyInfo";

/// Whether `der` parses as a `PrivateKeyInfo` envelope of any algorithm
pub(crate) fn is_private_key_info(der: &[u8]) -> bool {
    PrivateKeyInfo::from_der(der).is_ok()
}

/// Decode a `PrivateKeyInfo` whose algorithm is `id-ecPublicKey` or `id-ecDH`
///
/// The curve may be named by the algorithm parameters, by the inner SEC1
/// structure, or by both.
pub(crate) fn decode(der: &[u8]) -> Result<DecodedPrivate> {
    let info = PrivateKeyInfo::from_der(der).or_parse_error(CONTEXT)?;
    let family = family_of(&info.algorithm.oid)?;

    let outer_curve = match info.algorithm.parameters {
        Some(_) => Some(
            info.algorithm
                .parameters_oid()
                .or_parse_error("EC named curve parameters")?,
        ),
        None => None,
    };

    let key = ec_private_key::decode(info.private_key, outer_curve)?;
    Ok(DecodedPrivate { family, key })
}
