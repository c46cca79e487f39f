//! Navigation port.

use anyhow::Result;

use crate::onboarding::{ScreenId, ScreenParams};

/// Capability set a transition executor needs from the navigation stack.
///
/// The real implementation lives at the application boundary (the platform
/// navigation bridge). Step counting deliberately bypasses this port and
/// folds transitions into a local accumulator instead, so a simulation can
/// never leak into the real stack.
pub trait NavigatorPort: Send + Sync {
    /// Push `screen` on top of the current stack.
    fn advance(&self, screen: ScreenId, params: Option<ScreenParams>) -> Result<()>;

    /// Replace the whole stack with `screen`.
    fn advance_replacing_stack(&self, screen: ScreenId, params: Option<ScreenParams>)
        -> Result<()>;

    /// Pop back to `screen`, which must already be on the stack.
    fn pop_to(&self, screen: ScreenId) -> Result<()>;

    /// Leave onboarding onto the terminal `screen`.
    fn finish(&self, screen: ScreenId) -> Result<()>;
}
