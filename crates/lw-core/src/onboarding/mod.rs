//! Onboarding step-sequencer domain.
//!
//! The flow is a directed graph over onboarding screens. [`OnboardingFlow`]
//! is the pure decision table mapping (current screen, snapshot) to the next
//! [`Transition`]; [`step_values`] dry-runs the same table to answer
//! "step X of Y" without touching real navigation. The real executor lives
//! in the application layer behind [`crate::ports::NavigatorPort`].

mod effect;
mod error;
mod flow;
mod screen;
mod snapshot;
mod steps;

#[cfg(test)]
mod tests;

pub use effect::SideEffect;
pub use error::FlowError;
pub use flow::{KeylessBackupFlow, OnboardingFlow, ScreenParams, StackOp, Transition};
pub use screen::ScreenId;
pub use snapshot::{AccountState, BiometryKind, UserStateSnapshot};
pub use steps::{step_values, StepValues};
