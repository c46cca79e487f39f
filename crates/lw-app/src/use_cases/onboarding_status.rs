//! Read-side onboarding status for the UI shell.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use lw_core::onboarding::{
    step_values, AccountState, OnboardingFlow, ScreenId, StepValues, UserStateSnapshot,
};
use lw_core::ports::FeatureFlagPort;

/// Progress of a target screen within the active flow, as shown in the
/// "step X of Y" header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingProgress {
    pub screen: ScreenId,
    pub step: u32,
    pub total_steps: u32,
}

/// Derives the snapshot from upstream state and answers entry/progress
/// queries. Pure reads: nothing here navigates or dispatches.
pub struct OnboardingStatus<F: FeatureFlagPort> {
    flags: Arc<F>,
}

impl<F: FeatureFlagPort> OnboardingStatus<F> {
    pub fn new(flags: Arc<F>) -> Self {
        Self { flags }
    }

    /// Snapshot for one routing decision, derived fresh from the flag port
    /// and the raw account state.
    pub fn snapshot(&self, account: &AccountState) -> UserStateSnapshot {
        UserStateSnapshot::derive(self.flags.as_ref(), account)
    }

    /// Screen the onboarding flow starts on right now.
    pub fn entry_screen(&self, account: &AccountState) -> ScreenId {
        OnboardingFlow::first_screen(&self.snapshot(account))
    }

    /// Step values for `target` under the current state.
    pub fn progress(&self, target: ScreenId, account: &AccountState) -> Result<OnboardingProgress> {
        let snapshot = self.snapshot(account);
        let StepValues { step, total_steps } = step_values(target, &snapshot)?;
        Ok(OnboardingProgress {
            screen: target,
            step,
            total_steps,
        })
    }
}
