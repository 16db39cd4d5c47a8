//! Traits for PEM/DER serialization of key material.

use crate::{KeyFormat, Result};
use zeroize::Zeroizing;

/// Key holders that can be written out in a standard encoding.
pub trait KeyExport {
    /// Encodes the private key (and the public key derivable from it).
    ///
    /// Fails with `InvalidState` unless a private key is present; never
    /// degrades to a public-only export.
    fn export_key(&self, format: KeyFormat) -> Result<Zeroizing<Vec<u8>>>;

    /// Encodes only the public portion of the key.
    fn export_public_key(&self, format: KeyFormat) -> Result<Vec<u8>>;
}

/// Key holders that can be (re)loaded from a standard encoding.
///
/// Implementations detect PEM or DER input on their own. A failed import
/// leaves the holder unchanged.
pub trait KeyImport {
    /// Loads a private key, replacing any held material.
    fn import_key(&mut self, encoded: &[u8]) -> Result<()>;

    /// Loads a public key, replacing any held material.
    fn import_public_key(&mut self, encoded: &[u8]) -> Result<()>;
}
