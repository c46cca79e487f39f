//! In-memory navigation stack.

use std::sync::Mutex;

use anyhow::{bail, Result};

use lw_core::onboarding::{ScreenId, ScreenParams};
use lw_core::ports::NavigatorPort;

/// Vec-backed navigation stack.
///
/// Stands in for the platform navigation bridge in headless runs and in the
/// flow-replay tests. `visited` keeps every screen arrived at through an
/// advance, in order, which is what the replay compares against the
/// step-count simulation.
#[derive(Debug, Default)]
pub struct InMemoryNavigator {
    stack: Mutex<Vec<ScreenId>>,
    visited: Mutex<Vec<ScreenId>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator whose stack already holds `screens`, bottom first.
    pub fn with_stack(screens: Vec<ScreenId>) -> Self {
        Self {
            stack: Mutex::new(screens),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn stack(&self) -> Vec<ScreenId> {
        self.stack.lock().expect("navigator stack lock").clone()
    }

    pub fn visited(&self) -> Vec<ScreenId> {
        self.visited.lock().expect("navigator visited lock").clone()
    }

    /// Screen currently on top of the stack.
    pub fn current(&self) -> Option<ScreenId> {
        self.stack
            .lock()
            .expect("navigator stack lock")
            .last()
            .copied()
    }

    fn record_arrival(&self, screen: ScreenId) {
        self.visited
            .lock()
            .expect("navigator visited lock")
            .push(screen);
    }
}

impl NavigatorPort for InMemoryNavigator {
    fn advance(&self, screen: ScreenId, _params: Option<ScreenParams>) -> Result<()> {
        self.stack.lock().expect("navigator stack lock").push(screen);
        self.record_arrival(screen);
        Ok(())
    }

    fn advance_replacing_stack(
        &self,
        screen: ScreenId,
        _params: Option<ScreenParams>,
    ) -> Result<()> {
        *self.stack.lock().expect("navigator stack lock") = vec![screen];
        self.record_arrival(screen);
        Ok(())
    }

    fn pop_to(&self, screen: ScreenId) -> Result<()> {
        let mut stack = self.stack.lock().expect("navigator stack lock");
        match stack.iter().rposition(|s| *s == screen) {
            Some(index) => {
                stack.truncate(index + 1);
                Ok(())
            }
            None => bail!("screen {screen} is not on the stack"),
        }
    }

    fn finish(&self, screen: ScreenId) -> Result<()> {
        *self.stack.lock().expect("navigator stack lock") = vec![screen];
        Ok(())
    }
}
