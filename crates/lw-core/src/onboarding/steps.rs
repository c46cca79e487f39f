//! Step counting via a dry run of the decision table.
//!
//! The simulator folds transitions into an explicit accumulator instead of
//! navigating: arrivals on non-terminal screens are counted, terminal
//! screens and stack manipulation are not.

use serde::{Deserialize, Serialize};

use super::error::FlowError;
use super::flow::{OnboardingFlow, Transition};
use super::screen::ScreenId;
use super::snapshot::UserStateSnapshot;

/// Position of a screen within the active flow: "step X of Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepValues {
    pub step: u32,
    pub total_steps: u32,
}

/// Accumulator threaded through one simulated traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepAccumulator {
    pub(crate) current: ScreenId,
    pub(crate) target: ScreenId,
    pub(crate) step: u32,
    pub(crate) total: u32,
    pub(crate) reached_target: bool,
}

impl StepAccumulator {
    pub(crate) fn new(first: ScreenId, target: ScreenId) -> Self {
        Self {
            current: first,
            target,
            step: 1,
            total: 1,
            reached_target: false,
        }
    }

    /// Apply one transition the way the simulated navigator would.
    ///
    /// An advance onto a terminal screen moves the cursor but is not
    /// counted; a finish only moves the cursor. The target is marked as
    /// reached when the cursor sits on it *before* the transition applies,
    /// which freezes `step` at the target's ordinal.
    pub(crate) fn apply(&mut self, transition: &Transition) {
        match transition {
            Transition::Advance { screen, .. } => {
                if !screen.is_terminal() {
                    self.total += 1;
                    if self.current == self.target {
                        self.reached_target = true;
                    }
                    if !self.reached_target {
                        self.step += 1;
                    }
                }
                self.current = *screen;
            }
            Transition::Finish { screen, .. } => {
                self.current = *screen;
            }
        }
    }
}

/// Compute `(step, total_steps)` for `target` under `snapshot` without
/// performing real navigation or dispatching any side effect.
///
/// Termination is guaranteed by the decision table: every flow screen
/// reaches a terminal screen in a bounded number of transitions. A missing
/// rule surfaces as [`FlowError::UnhandledScreen`] rather than a hang.
pub fn step_values(
    target: ScreenId,
    snapshot: &UserStateSnapshot,
) -> Result<StepValues, FlowError> {
    let mut acc = StepAccumulator::new(OnboardingFlow::first_screen(snapshot), target);
    while !acc.current.is_terminal() {
        let transition = OnboardingFlow::next(acc.current, snapshot)?;
        acc.apply(&transition);
    }
    Ok(StepValues {
        step: acc.step,
        total_steps: acc.total,
    })
}
