//! RFC 7468 armor around DER documents

use ecpk_api::error::ResultExt;
use ecpk_api::{Error, KeyFormat, Result};
use pem_rfc7468::LineEnding;
use zeroize::Zeroizing;

/// PEM label of a SEC1 `ECPrivateKey`
pub const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
/// PEM label of a PKCS#8 `PrivateKeyInfo`
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
/// PEM label of a `SubjectPublicKeyInfo`
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const EC_PARAMETERS_BEGIN: &[u8] = b"-----BEGIN EC PARAMETERS-----";
const EC_PARAMETERS_END: &[u8] = b"-----END EC PARAMETERS-----";

/// An encoded input after armor removal
#[derive(Debug)]
pub(crate) struct Unarmored {
    /// PEM label; `None` when the input was raw DER
    pub label: Option<String>,
    pub der: Zeroizing<Vec<u8>>,
}

fn trim_ascii(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if first.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = bytes {
        if last.is_ascii_whitespace() || *last == 0 {
            bytes = rest;
        } else {
            break;
        }
    }
    bytes
}

/// Drop a leading `EC PARAMETERS` block, as written by `openssl ecparam -genkey`
fn skip_ec_parameters(input: &[u8]) -> Result<&[u8]> {
    let input = trim_ascii(input);
    if !input.starts_with(EC_PARAMETERS_BEGIN) {
        return Ok(input);
    }
    let end = input
        .windows(EC_PARAMETERS_END.len())
        .position(|w| w == EC_PARAMETERS_END)
        .ok_or_else(|| Error::parse("PEM armor", "unterminated EC PARAMETERS block"))?;
    Ok(trim_ascii(&input[end + EC_PARAMETERS_END.len()..]))
}

/// Whether `input` looks like PEM rather than DER
pub(crate) fn is_pem(input: &[u8]) -> bool {
    trim_ascii(input).starts_with(BEGIN_MARKER)
}

/// Strip PEM armor if present, otherwise pass the bytes through as DER
///
/// Trailing NUL bytes are tolerated, since some producers terminate PEM
/// buffers like C strings. A leading `EC PARAMETERS` block is skipped.
pub(crate) fn unarmor(input: &[u8]) -> Result<Unarmored> {
    if !is_pem(input) {
        return Ok(Unarmored {
            label: None,
            der: Zeroizing::new(input.to_vec()),
        });
    }

    let block = skip_ec_parameters(input)?;
    let (label, der) = pem_rfc7468::decode_vec(block).or_parse_error("PEM armor")?;
    Ok(Unarmored {
        label: Some(label.to_string()),
        der: Zeroizing::new(der),
    })
}

/// Wrap DER bytes in the requested format
pub(crate) fn armor(label: &'static str, der: &[u8], format: KeyFormat) -> Result<Vec<u8>> {
    match format {
        KeyFormat::Der => Ok(der.to_vec()),
        KeyFormat::Pem => {
            let pem = pem_rfc7468::encode_string(label, LineEnding::LF, der)
                .or_invalid_argument("PEM armor")?;
            Ok(pem.into_bytes())
        }
    }
}
