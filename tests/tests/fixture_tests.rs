//! Interoperability with keys written by OpenSSL

use ecpk::prelude::*;
use ecpk_api::error::ErrorKind;
use ecpk_tests::fixtures::*;

fn import_private(pem: &str) -> Result<Ecp> {
    let mut key = Ecp::new();
    key.import_key(pem.as_bytes())?;
    Ok(key)
}

fn import_public(pem: &str) -> Result<Ecp> {
    let mut key = Ecp::new();
    key.import_public_key(pem.as_bytes())?;
    Ok(key)
}

#[test]
fn test_openssl_p256_keys() -> Result<()> {
    if !is_supported(CurveId::Secp256r1) {
        return Ok(());
    }
    let sec1 = import_private(P256_SEC1_PEM)?;
    let pkcs8 = import_private(P256_PKCS8_PEM)?;
    let public = import_public(P256_SPKI_PEM)?;

    assert_eq!(sec1.curve(), Some(CurveId::Secp256r1));
    assert_eq!(sec1.bitlen(), 256);
    assert_eq!(sec1.public_point(), Some(hex::decode(P256_POINT_HEX).unwrap().as_slice()));

    assert!(check_pair(&public, &sec1));
    assert!(check_pair(&public, &pkcs8));
    assert!(check_pair(&sec1, &pkcs8));

    // Output matches OpenSSL byte for byte, whichever form was read
    for key in [&sec1, &pkcs8] {
        assert_eq!(key.export_key(KeyFormat::Pem)?.as_slice(), P256_SEC1_PEM.as_bytes());
        assert_eq!(key.export_public_key(KeyFormat::Pem)?, P256_SPKI_PEM.as_bytes());
    }
    Ok(())
}

#[test]
fn test_openssl_k256_keys() -> Result<()> {
    if !is_supported(CurveId::Secp256k1) {
        return Ok(());
    }
    let sec1 = import_private(K256_SEC1_PEM)?;
    let pkcs8 = import_private(K256_PKCS8_PEM)?;
    let public = import_public(K256_SPKI_PEM)?;

    assert_eq!(sec1.curve(), Some(CurveId::Secp256k1));
    assert!(check_pair(&public, &sec1));
    assert!(check_pair(&public, &pkcs8));
    assert_eq!(sec1.export_key(KeyFormat::Pem)?.as_slice(), K256_SEC1_PEM.as_bytes());
    assert_eq!(public.export_public_key(KeyFormat::Pem)?, K256_SPKI_PEM.as_bytes());
    Ok(())
}

#[test]
fn test_fixtures_on_different_curves_do_not_pair() -> Result<()> {
    if !(is_supported(CurveId::Secp256r1) && is_supported(CurveId::Secp256k1)) {
        return Ok(());
    }
    let p256 = import_private(P256_SEC1_PEM)?;
    let k256 = import_public(K256_SPKI_PEM)?;
    assert!(!check_pair(&k256, &p256));
    Ok(())
}

#[test]
fn test_rsa_key_is_rejected() {
    let err = import_public(RSA_SPKI_PEM).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseError);
    let err = import_private(RSA_SPKI_PEM).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseError);
}

#[test]
fn test_crlf_and_trailing_nul_are_tolerated() -> Result<()> {
    if !is_supported(CurveId::Secp256r1) {
        return Ok(());
    }
    let crlf = P256_SPKI_PEM.replace('\n', "\r\n");
    import_public(&crlf)?;

    let mut nul_terminated = P256_SEC1_PEM.as_bytes().to_vec();
    nul_terminated.push(0);
    let mut key = Ecp::new();
    key.import_key(&nul_terminated)?;
    assert!(key.has_private_key());
    Ok(())
}

#[test]
fn test_ecparam_genkey_output_is_accepted() -> Result<()> {
    if !is_supported(CurveId::Secp256r1) {
        return Ok(());
    }
    let combined = format!("{}{}", P256_EC_PARAMETERS_PEM, P256_SEC1_PEM);
    let key = import_private(&combined)?;
    let reference = import_private(P256_SEC1_PEM)?;
    assert!(check_pair(&reference, &key));
    assert_eq!(key.export_key(KeyFormat::Pem)?.as_slice(), P256_SEC1_PEM.as_bytes());

    // Parameters on their own are not a key
    let err = import_private(P256_EC_PARAMETERS_PEM).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseError);
    Ok(())
}
