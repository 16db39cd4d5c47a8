//! End-to-end behaviour of the EC key entity across every registry curve

use ecpk::prelude::*;
use ecpk_api::error::ErrorKind;
use ecpk_tests::{generated, sign_capable_flags, ALL_CURVES, SIGN_CAPABLE};

#[test]
fn test_ec_type_checks() {
    if supports(PkType::EcKey) || supports(PkType::EcKeyDh) {
        let mut key = Ecp::new();
        assert!(!key.has_private_key());
        assert!(key.name().eq_ignore_ascii_case("ec"));
        assert!(key.can_do(PkType::EcKey));
        assert!(key.can_do(PkType::EcKeyDh));
        assert_eq!(key.can_do(PkType::Ecdsa), supports(PkType::Ecdsa));
        assert!(!key.what_can_do().any());

        key.reset_as(PkType::EcKeyDh);
        assert!(key.name().eq_ignore_ascii_case("ec_dh"));
        assert!(!key.has_private_key());
        assert!(key.can_do(PkType::EcKeyDh));
        assert!(key.can_do(PkType::EcKey));
        assert!(!key.can_do(PkType::Ecdsa));
        assert!(!key.what_can_do().any());
    }

    if supports(PkType::Ecdsa) {
        let key = Ecp::with_type(PkType::Ecdsa);
        assert!(key.name().eq_ignore_ascii_case("ecdsa"));
        assert!(!key.has_private_key());
        assert!(key.can_do(PkType::Ecdsa));
        assert!(!key.can_do(PkType::EcKey));
        assert!(!key.can_do(PkType::EcKeyDh));
        assert!(!key.what_can_do().any());
    }
}

#[test]
fn test_ec_key_round_trips() -> Result<()> {
    if !(supports_feature(Feature::PkExport) && supports(PkType::EcKey)) {
        return Ok(());
    }

    let mut empty = Ecp::new();
    assert!(empty.generate_key(CurveId::None).is_err());

    let (private_flags, public_flags) = sign_capable_flags();
    for pk_type in SIGN_CAPABLE {
        for (i, curve) in ALL_CURVES.into_iter().enumerate() {
            let mut source = Ecp::with_type(pk_type);
            if !is_supported(curve) {
                let err = source.generate_key(curve).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::UnsupportedFeature, "{}", curve);
                continue;
            }

            source.generate_key(curve)?;
            let pri_data = source.export_key(KeyFormat::Pem)?;
            let pub_data = source.export_public_key(KeyFormat::Pem)?;

            let mut pri = Ecp::with_type(pk_type);
            pri.import_key(&pri_data)?;
            assert_eq!(pri.pk_type(), source.pk_type());
            assert_eq!(pri.export_public_key(KeyFormat::Pem)?, pub_data);

            let mut public = Ecp::with_type(pk_type);
            public.import_public_key(&pub_data)?;
            assert_eq!(public.pk_type(), source.pk_type());

            assert!(check_pair(&public, &pri), "{} {}", pk_type, curve);
            assert_eq!(pri.what_can_do(), private_flags);
            assert_eq!(public.what_can_do(), public_flags);

            // Independent key on the same curve never pairs
            let other = generated(pk_type, curve, i as u64)?;
            assert!(!check_pair(&public, &other));
        }
    }
    Ok(())
}

#[test]
fn test_der_round_trips() -> Result<()> {
    for curve in supported_curves() {
        let key = generated(PkType::EcKey, curve, 99)?;
        let der = key.export_key(KeyFormat::Der)?;
        assert_eq!(der.first(), Some(&0x30));

        let mut back = Ecp::new();
        back.import_key(&der)?;
        assert_eq!(back.export_key(KeyFormat::Der)?, der);
        assert_eq!(back.public_point(), key.public_point());
    }
    Ok(())
}

#[test]
fn test_curve_mismatch_never_pairs() -> Result<()> {
    let curves = supported_curves();
    for pair in curves.windows(2) {
        let a = generated(PkType::EcKey, pair[0], 1)?;
        let b = generated(PkType::EcKey, pair[1], 1)?;
        assert!(!check_pair(&a, &b));
        assert!(!check_pair(&b, &a));
    }
    Ok(())
}

#[test]
fn test_generate_none_is_rejected_without_side_effects() -> Result<()> {
    let mut key = Ecp::with_type(PkType::EcKeyDh);
    let err = key.generate_key(CurveId::None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(key.pk_type(), PkType::EcKeyDh);
    assert!(!key.has_public_key());

    if let Some(curve) = supported_curves().first().copied() {
        key.generate_key(curve)?;
        let point = key.public_point().map(<[u8]>::to_vec);
        assert!(key.generate_key(CurveId::None).is_err());
        assert_eq!(key.public_point().map(<[u8]>::to_vec), point);
    }
    Ok(())
}

#[test]
fn test_curve25519_is_unsupported() {
    assert!(!is_supported(CurveId::Curve25519));
    let mut key = Ecp::new();
    let err = key.generate_key(CurveId::Curve25519).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFeature);
}

#[test]
fn test_ecdsa_secp256r1_flags() -> Result<()> {
    if !(supports(PkType::Ecdsa) && is_supported(CurveId::Secp256r1)) {
        return Ok(());
    }
    let mut signer = Ecp::with_type(PkType::Ecdsa);
    signer.generate_key(CurveId::Secp256r1)?;
    assert_eq!(signer.what_can_do(), ActionFlags::new(false, false, true, true));

    let mut verifier = Ecp::with_type(PkType::Ecdsa);
    verifier.import_public_key(&signer.export_public_key(KeyFormat::Pem)?)?;
    assert_eq!(verifier.what_can_do(), ActionFlags::new(false, false, false, true));
    assert_eq!(verifier.pk_type(), PkType::Ecdsa);
    Ok(())
}

#[test]
fn test_dh_keys_never_sign() -> Result<()> {
    for curve in supported_curves() {
        let key = generated(PkType::EcKeyDh, curve, 5)?;
        assert!(!key.what_can_do().any());
        assert!(!key.can_do(PkType::Ecdsa));
    }
    Ok(())
}

#[test]
fn test_shared_secret_between_entities() -> Result<()> {
    if !supports_feature(Feature::Ecdh) {
        return Ok(());
    }
    for curve in supported_curves() {
        let alice = generated(PkType::EcKeyDh, curve, 20)?;
        let bob = generated(PkType::EcKey, curve, 21)?;

        let mut alice_public = Ecp::new();
        alice_public.import_public_key(&alice.export_public_key(KeyFormat::Der)?)?;
        assert_eq!(alice_public.pk_type(), PkType::EcKeyDh);

        let ab = alice.shared_secret(&bob)?;
        let ba = bob.shared_secret(&alice_public)?;
        assert_eq!(ab.as_slice(), ba.as_slice());
        assert_eq!(ab.len(), curve.field_size());
    }
    Ok(())
}
