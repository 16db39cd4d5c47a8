//! Curve registry and build capability snapshot
//!
//! What this build can do is decided by cargo features and frozen into a
//! single [`Capabilities`] value the first time it is read. Every capability
//! query in the workspace goes through that snapshot, so answers never change
//! within a process.

use ecpk_api::error::validate;
use ecpk_api::{CurveId, Feature, Result};
use once_cell::sync::Lazy;
use tracing::debug;

use super::backend;

const SLOTS: usize = CurveId::ALL.len();

/// Immutable record of the curves and algorithms compiled into this build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    curves: [bool; SLOTS],
    ecdsa: bool,
    ecdh: bool,
    pk_export: bool,
}

static CAPABILITIES: Lazy<Capabilities> = Lazy::new(|| {
    let caps = Capabilities::detect();
    debug!(
        curves = ?caps.supported_curves(),
        ecdsa = caps.ecdsa,
        ecdh = caps.ecdh,
        pk_export = caps.pk_export,
        "capability snapshot initialised"
    );
    caps
});

fn slot(curve: CurveId) -> Option<usize> {
    CurveId::ALL.iter().position(|c| *c == curve)
}

impl Capabilities {
    /// Build a snapshot from the enabled cargo features
    fn detect() -> Self {
        let mut curves = [false; SLOTS];
        for (enabled, curve) in curves.iter_mut().zip(CurveId::ALL) {
            *enabled = backend::is_compiled(curve);
        }
        Self {
            curves,
            ecdsa: cfg!(feature = "ecdsa"),
            ecdh: cfg!(feature = "ecdh"),
            pk_export: cfg!(feature = "pk-export"),
        }
    }

    /// Build an explicit snapshot
    ///
    /// Curves without arithmetic in this build are dropped from `curves`,
    /// so a custom snapshot can only narrow what the build supports.
    pub fn new(curves: &[CurveId], ecdsa: bool, ecdh: bool, pk_export: bool) -> Self {
        let mut table = [false; SLOTS];
        for curve in curves {
            if let Some(i) = slot(*curve) {
                table[i] = backend::is_compiled(*curve);
            }
        }
        Self {
            curves: table,
            ecdsa,
            ecdh,
            pk_export,
        }
    }

    /// Whether `curve` is usable; always false for `CurveId::None`
    pub fn is_supported(&self, curve: CurveId) -> bool {
        slot(curve).map_or(false, |i| self.curves[i])
    }

    /// Curves usable in this snapshot, in registry order
    pub fn supported_curves(&self) -> Vec<CurveId> {
        CurveId::ALL
            .into_iter()
            .filter(|c| self.is_supported(*c))
            .collect()
    }

    /// Whether at least one curve is usable
    pub fn has_any_curve(&self) -> bool {
        self.curves.iter().any(|c| *c)
    }

    /// Whether the ECDSA algorithm is available
    pub fn ecdsa(&self) -> bool {
        self.ecdsa
    }

    /// Whether EC-DH is available
    pub fn ecdh(&self) -> bool {
        self.ecdh
    }

    /// Whether key export is available
    pub fn pk_export(&self) -> bool {
        self.pk_export
    }

    /// Query an optional feature
    pub fn supports_feature(&self, feature: Feature) -> bool {
        match feature {
            Feature::PkExport => self.pk_export,
            Feature::Ecdh => self.ecdh,
        }
    }

    /// Check that `curve` can be used for key operations
    ///
    /// `CurveId::None` is an `InvalidArgument`; a real curve missing from the
    /// build is `UnsupportedFeature`.
    pub fn require(&self, curve: CurveId) -> Result<()> {
        validate::argument(!curve.is_none(), "curve registry", "curve must not be none")?;
        validate::feature(self.is_supported(curve), curve.name())
    }
}

/// The process-wide snapshot
pub fn capabilities() -> &'static Capabilities {
    &CAPABILITIES
}

/// Whether `curve` is compiled into this build
pub fn is_supported(curve: CurveId) -> bool {
    capabilities().is_supported(curve)
}

/// Curves compiled into this build
pub fn supported_curves() -> Vec<CurveId> {
    capabilities().supported_curves()
}

/// Check `curve` against the process-wide snapshot
pub fn require(curve: CurveId) -> Result<()> {
    capabilities().require(curve)
}
