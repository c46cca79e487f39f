//! Port interfaces for the application layer.
//!
//! Ports define the contract between the onboarding domain and the
//! surrounding application shell. The shell owns the single real navigation
//! stack and the single state store; the domain only ever talks to them
//! through these traits, so tests and the step-count simulator can substitute
//! their own implementations.
//!
//! All ports here are synchronous: each transition runs to completion inside
//! one UI event, with no suspension points (see the sequencer's concurrency
//! contract).

pub mod dispatch;
pub mod feature_flags;
pub mod navigator;

pub use dispatch::EffectSinkPort;
pub use feature_flags::{FeatureFlag, FeatureFlagPort};
pub use navigator::NavigatorPort;
