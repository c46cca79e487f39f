//! # lw-core
//!
//! Core domain models and business logic for Lumen Wallet.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies. The onboarding module holds the step-sequencer: the
//! decision table over onboarding screens and the step-count simulator
//! built on top of it.

// Public module exports
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use onboarding::{
    BiometryKind, FlowError, OnboardingFlow, ScreenId, SideEffect, StepValues, Transition,
    UserStateSnapshot,
};
pub use ports::{EffectSinkPort, FeatureFlag, FeatureFlagPort, NavigatorPort};
