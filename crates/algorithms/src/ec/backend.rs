//! Curve arithmetic backend
//!
//! Thin, curve-generic wrappers over the RustCrypto `elliptic-curve` traits,
//! plus a dispatcher from [`CurveId`] to the concrete curve type. Points cross
//! this boundary as uncompressed SEC1 bytes and scalars as big-endian bytes
//! of exactly the curve's field size.

use ecpk_api::error::{validate, ResultExt};
use ecpk_api::{CurveId, Error, Result};
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Route a generic backend function to the concrete curve type.
macro_rules! dispatch {
    ($curve:expr, $func:ident ( $($arg:expr),* )) => {
        match $curve {
            #[cfg(feature = "secp192r1")]
            CurveId::Secp192r1 => $func::<p192::NistP192>($($arg),*),
            #[cfg(feature = "secp224r1")]
            CurveId::Secp224r1 => $func::<p224::NistP224>($($arg),*),
            #[cfg(feature = "secp256r1")]
            CurveId::Secp256r1 => $func::<p256::NistP256>($($arg),*),
            #[cfg(feature = "secp384r1")]
            CurveId::Secp384r1 => $func::<p384::NistP384>($($arg),*),
            #[cfg(feature = "secp521r1")]
            CurveId::Secp521r1 => $func::<p521::NistP521>($($arg),*),
            #[cfg(feature = "secp256k1")]
            CurveId::Secp256k1 => $func::<k256::Secp256k1>($($arg),*),
            other => {
                $( let _ = &$arg; )*
                Err(unavailable(other))
            }
        }
    };
}

fn unavailable(curve: CurveId) -> Error {
    if curve.is_none() {
        Error::invalid_argument("curve backend", "curve must not be none")
    } else {
        Error::unsupported(curve.name())
    }
}

/// Whether arithmetic for `curve` is compiled in
///
/// Curve25519 is never compiled in; it has no SEC1 key structure.
pub(crate) fn is_compiled(curve: CurveId) -> bool {
    match curve {
        CurveId::Secp192r1 => cfg!(feature = "secp192r1"),
        CurveId::Secp224r1 => cfg!(feature = "secp224r1"),
        CurveId::Secp256r1 => cfg!(feature = "secp256r1"),
        CurveId::Secp384r1 => cfg!(feature = "secp384r1"),
        CurveId::Secp521r1 => cfg!(feature = "secp521r1"),
        CurveId::Secp256k1 => cfg!(feature = "secp256k1"),
        CurveId::None
        | CurveId::Secp192k1
        | CurveId::Secp224k1
        | CurveId::Bp256r1
        | CurveId::Bp384r1
        | CurveId::Bp512r1
        | CurveId::Curve25519 => false,
    }
}

/// Fresh key pair: (scalar bytes, uncompressed public point)
pub(crate) fn generate<R>(curve: CurveId, rng: &mut R) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)>
where
    R: CryptoRng + RngCore,
{
    dispatch!(curve, generate_on(rng))
}

/// Public point for a scalar
pub(crate) fn derive_public(curve: CurveId, scalar: &[u8]) -> Result<Vec<u8>> {
    dispatch!(curve, derive_public_on(scalar))
}

/// Check that `point` is a valid, non-identity SEC1 point on `curve`
/// (compressed or uncompressed) and return its uncompressed form
pub(crate) fn normalize_point(curve: CurveId, point: &[u8]) -> Result<Vec<u8>> {
    dispatch!(curve, normalize_point_on(point))
}

/// Raw EC-DH shared secret (affine x-coordinate)
pub(crate) fn diffie_hellman(
    curve: CurveId,
    scalar: &[u8],
    peer_point: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    dispatch!(curve, diffie_hellman_on(scalar, peer_point))
}

fn generate_on<C>(rng: &mut (impl CryptoRng + RngCore)) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(rng);
    let point = secret.public_key().to_encoded_point(false);
    let scalar = Zeroizing::new(secret.to_bytes());
    Ok((Zeroizing::new(scalar.to_vec()), point.as_bytes().to_vec()))
}

fn secret_from_bytes<C>(scalar: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let expected = FieldBytes::<C>::default().len();
    validate::length("EC private scalar", scalar.len(), expected)?;
    // Rejects zero and values >= the group order
    SecretKey::<C>::from_slice(scalar).or_parse_error("EC private scalar")
}

fn derive_public_on<C>(scalar: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = secret_from_bytes::<C>(scalar)?;
    Ok(secret.public_key().to_encoded_point(false).as_bytes().to_vec())
}

fn normalize_point_on<C>(point: &[u8]) -> Result<Vec<u8>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let public = PublicKey::<C>::from_sec1_bytes(point).or_parse_error("EC public point")?;
    Ok(public.to_encoded_point(false).as_bytes().to_vec())
}

fn diffie_hellman_on<C>(scalar: &[u8], peer_point: &[u8]) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = secret_from_bytes::<C>(scalar)?;
    let peer = PublicKey::<C>::from_sec1_bytes(peer_point).or_invalid_argument("EC-DH peer point")?;
    let shared = elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
}
