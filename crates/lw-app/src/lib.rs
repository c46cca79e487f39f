//! Lumen Wallet application orchestration layer.
//!
//! This crate contains the onboarding use cases wired over the `lw-core`
//! ports: the navigation driver that executes real transitions, the
//! read-side status queries for the UI shell, and in-process adapters for
//! the ports.

pub mod adapters;
pub mod use_cases;

pub use use_cases::{advance_onboarding, onboarding_status};
