//! Constants for named elliptic curves
//!
//! Object identifiers follow RFC 5480 (SEC 2 / X9.62 curves) and
//! RFC 5639 (Brainpool curves).

/// Static description of a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCurveParams {
    /// Canonical lower-case name
    pub name: &'static str,
    /// Dotted ASN.1 object identifier of the named curve, if one exists
    /// for use inside `ECParameters`
    pub oid: Option<&'static str>,
    /// Size of the group order in bits
    pub bits: usize,
    /// Size of a serialized field element (and private scalar) in bytes
    pub field_size: usize,
}

impl NamedCurveParams {
    /// Size of an uncompressed SEC1 point (0x04 || X || Y)
    pub const fn uncompressed_point_size(&self) -> usize {
        1 + 2 * self.field_size
    }
}

/// `id-ecPublicKey` (RFC 5480 §2.1.1): unrestricted EC public key
pub const ID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// `id-ecDH` (RFC 5480 §2.1.2): EC key restricted to Diffie-Hellman
pub const ID_EC_DH: &str = "1.3.132.1.12";

/// NIST P-192
pub const SECP192R1: NamedCurveParams = NamedCurveParams {
    name: "secp192r1",
    oid: Some("1.2.840.10045.3.1.1"),
    bits: 192,
    field_size: 24,
};

/// NIST P-224
pub const SECP224R1: NamedCurveParams = NamedCurveParams {
    name: "secp224r1",
    oid: Some("1.3.132.0.33"),
    bits: 224,
    field_size: 28,
};

/// NIST P-256
pub const SECP256R1: NamedCurveParams = NamedCurveParams {
    name: "secp256r1",
    oid: Some("1.2.840.10045.3.1.7"),
    bits: 256,
    field_size: 32,
};

/// NIST P-384
pub const SECP384R1: NamedCurveParams = NamedCurveParams {
    name: "secp384r1",
    oid: Some("1.3.132.0.34"),
    bits: 384,
    field_size: 48,
};

/// NIST P-521
pub const SECP521R1: NamedCurveParams = NamedCurveParams {
    name: "secp521r1",
    oid: Some("1.3.132.0.35"),
    bits: 521,
    field_size: 66,
};

/// SEC 2 Koblitz curve over a 192-bit field
pub const SECP192K1: NamedCurveParams = NamedCurveParams {
    name: "secp192k1",
    oid: Some("1.3.132.0.31"),
    bits: 192,
    field_size: 24,
};

/// SEC 2 Koblitz curve over a 224-bit field
///
/// The group order is one bit larger than the field.
pub const SECP224K1: NamedCurveParams = NamedCurveParams {
    name: "secp224k1",
    oid: Some("1.3.132.0.32"),
    bits: 225,
    field_size: 28,
};

/// SEC 2 Koblitz curve over a 256-bit field
pub const SECP256K1: NamedCurveParams = NamedCurveParams {
    name: "secp256k1",
    oid: Some("1.3.132.0.10"),
    bits: 256,
    field_size: 32,
};

/// Brainpool P256r1
pub const BP256R1: NamedCurveParams = NamedCurveParams {
    name: "brainpoolP256r1",
    oid: Some("1.3.36.3.3.2.8.1.1.7"),
    bits: 256,
    field_size: 32,
};

/// Brainpool P384r1
pub const BP384R1: NamedCurveParams = NamedCurveParams {
    name: "brainpoolP384r1",
    oid: Some("1.3.36.3.3.2.8.1.1.11"),
    bits: 384,
    field_size: 48,
};

/// Brainpool P512r1
pub const BP512R1: NamedCurveParams = NamedCurveParams {
    name: "brainpoolP512r1",
    oid: Some("1.3.36.3.3.2.8.1.1.13"),
    bits: 512,
    field_size: 64,
};

/// Curve25519 in Montgomery form
///
/// Has no named-curve OID usable inside `ECParameters`.
pub const CURVE25519: NamedCurveParams = NamedCurveParams {
    name: "curve25519",
    oid: None,
    bits: 255,
    field_size: 32,
};
