//! Effect dispatch port.

use anyhow::Result;

use crate::onboarding::SideEffect;

/// Sink for side-effect descriptors: the store-dispatch boundary.
///
/// The driver hands every [`SideEffect`] to this port in the order the
/// sequencer requires; the implementation decides what "dispatch" means
/// (store action, persistence write, flag refresh).
pub trait EffectSinkPort: Send + Sync {
    fn dispatch(&self, effect: SideEffect) -> Result<()>;
}
