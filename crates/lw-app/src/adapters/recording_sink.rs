//! Ordered log of dispatched side effects.

use std::sync::Mutex;

use anyhow::Result;

use lw_core::onboarding::SideEffect;
use lw_core::ports::EffectSinkPort;

/// Effect sink that records every descriptor in dispatch order.
///
/// Used by the flow-replay tests and by the shell as a breadcrumb trail
/// when onboarding is driven headlessly.
#[derive(Debug, Default)]
pub struct RecordingEffectSink {
    effects: Mutex<Vec<SideEffect>>,
}

impl RecordingEffectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<SideEffect> {
        self.effects.lock().expect("effect sink lock").clone()
    }

    pub fn count_of(&self, effect: SideEffect) -> usize {
        self.effects
            .lock()
            .expect("effect sink lock")
            .iter()
            .filter(|e| **e == effect)
            .count()
    }
}

impl EffectSinkPort for RecordingEffectSink {
    fn dispatch(&self, effect: SideEffect) -> Result<()> {
        self.effects.lock().expect("effect sink lock").push(effect);
        Ok(())
    }
}
