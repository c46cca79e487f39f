//! Flow errors.

use super::screen::ScreenId;

/// The single error the sequencer can produce: the decision table was asked
/// about a screen it has no routing rule for. This is a programming error
/// (a screen was added to the flow without a rule), never a user condition,
/// so callers propagate it rather than recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("no step info found for screen {0}")]
    UnhandledScreen(ScreenId),
}
