use ecpk_algorithms::encoding::{encode_private, encode_public, KeyFamily};
use ecpk_algorithms::{capabilities, EcPrivate};
use ecpk_api::{CurveId, KeyFormat};

fn main() -> ecpk_api::Result<()> {
    // What this build carries
    let caps = capabilities();
    println!("ecdsa: {}, ecdh: {}, export: {}", caps.ecdsa(), caps.ecdh(), caps.pk_export());
    for curve in CurveId::ALL {
        println!("{:<16} {:>4} bits  supported: {}", curve, curve.bit_len(), caps.is_supported(curve));
    }

    // Generate on the first available curve and print both halves
    let mut rng = rand::thread_rng();
    if let Some(curve) = caps.supported_curves().first().copied() {
        let key = EcPrivate::generate(curve, &mut rng)?;
        let private = encode_private(&key, KeyFormat::Pem)?;
        let public = encode_public(key.public(), KeyFamily::Generic, KeyFormat::Pem)?;
        println!("{}", String::from_utf8_lossy(&private));
        println!("{}", String::from_utf8_lossy(&public));
    }
    Ok(())
}
