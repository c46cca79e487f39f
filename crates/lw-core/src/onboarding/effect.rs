//! Side-effect descriptors emitted by onboarding transitions.

use serde::{Deserialize, Serialize};

use super::screen::ScreenId;

/// Abstract action attached to a transition or emitted by the driver.
///
/// The decision table only names effects; interpreting them (store dispatch,
/// flag refresh, persistence) happens at the application boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    /// Create the account and keys for a freshly onboarded user.
    InitializeAccount,
    /// Flip the onboarding-completed flag in the store.
    MarkCompleted,
    /// Persist `screen` as the last onboarding screen the user saw.
    PersistLastScreen { screen: ScreenId },
    /// Re-evaluate remote flags and route the user out of onboarding.
    TriggerPostOnboardingRouting { screen: ScreenId },
}
