//! Public/private pair verification

use ecpk_internal::constant_time::ct_eq;
use tracing::trace;

use crate::Ecp;

/// Whether `pub_key` holds the public half of `pri_key`
///
/// The public point is recomputed from `pri_key`'s scalar and compared in
/// constant time with the point held by `pub_key`, which may itself be a
/// full key pair. Returns false whenever either side lacks the needed
/// material or the curves differ. Never fails and never mutates.
pub fn check_pair(pub_key: &Ecp, pri_key: &Ecp) -> bool {
    let (Some(public), Some(private)) = (pub_key.material().public(), pri_key.material().private())
    else {
        return false;
    };
    if public.curve() != private.curve() {
        return false;
    }

    match private.derive_public() {
        Ok(derived) => ct_eq(derived.as_bytes(), public.as_bytes()),
        Err(err) => {
            trace!(kind = ?err.kind(), "pair check could not derive public point");
            false
        }
    }
}
