//! Onboarding use cases.

pub mod advance_onboarding;
pub mod onboarding_status;

pub use advance_onboarding::AdvanceOnboarding;
pub use onboarding_status::{OnboardingProgress, OnboardingStatus};
