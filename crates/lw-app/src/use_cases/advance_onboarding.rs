//! AdvanceOnboarding use case - executes one real onboarding transition.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use lw_core::onboarding::{
    OnboardingFlow, ScreenId, SideEffect, StackOp, Transition, UserStateSnapshot,
};
use lw_core::ports::{EffectSinkPort, NavigatorPort};

/// The navigation driver: asks the decision table for one transition and
/// plays it against the real navigator and effect sink.
///
/// The UI calls this once per "continue" tap; the surrounding screen
/// disables input while a transition is in flight, so invocations never
/// overlap.
pub struct AdvanceOnboarding<N, E>
where
    N: NavigatorPort,
    E: EffectSinkPort,
{
    navigator: Arc<N>,
    effects: Arc<E>,
}

impl<N, E> AdvanceOnboarding<N, E>
where
    N: NavigatorPort,
    E: EffectSinkPort,
{
    pub fn new(navigator: Arc<N>, effects: Arc<E>) -> Self {
        Self { navigator, effects }
    }

    /// Execute the transition out of `current` under `snapshot`.
    ///
    /// Fails only on a missing decision-table rule or a port failure; both
    /// propagate to the caller untouched.
    pub fn execute(&self, current: ScreenId, snapshot: &UserStateSnapshot) -> Result<()> {
        let transition = OnboardingFlow::next(current, snapshot)?;
        match transition {
            Transition::Advance {
                screen,
                params,
                stack,
                effects,
            } => {
                debug!(%current, %screen, "advancing onboarding");
                for effect in effects {
                    self.effects.dispatch(effect)?;
                }
                match stack {
                    StackOp::Push => self.navigator.advance(screen, params)?,
                    StackOp::ReplaceStack => {
                        self.navigator.advance_replacing_stack(screen, params)?
                    }
                    StackOp::PopToThenPush(anchor) => {
                        self.navigator.pop_to(anchor)?;
                        self.navigator.advance(screen, params)?;
                    }
                }
                // Every non-terminal advance records its destination as the
                // last seen onboarding screen.
                self.effects
                    .dispatch(SideEffect::PersistLastScreen { screen })?;
            }
            Transition::Finish { screen, effects } => {
                debug!(%current, %screen, "finishing onboarding");
                for effect in effects {
                    self.effects.dispatch(effect)?;
                }
                self.navigator.finish(screen)?;
                // Completion must be committed before post-onboarding
                // routing reads it.
                self.effects.dispatch(SideEffect::MarkCompleted)?;
                self.effects
                    .dispatch(SideEffect::PersistLastScreen { screen })?;
                self.effects
                    .dispatch(SideEffect::TriggerPostOnboardingRouting { screen })?;
            }
        }
        Ok(())
    }
}
