//! Fixed feature-flag table.

use std::collections::HashSet;

use lw_core::ports::{FeatureFlag, FeatureFlagPort};

/// Flag provider backed by a fixed set, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct StaticFlags {
    enabled: HashSet<FeatureFlag>,
}

impl StaticFlags {
    /// All flags off.
    pub fn none() -> Self {
        Self::default()
    }

    /// Only the given flags on.
    pub fn with(flags: &[FeatureFlag]) -> Self {
        Self {
            enabled: flags.iter().copied().collect(),
        }
    }
}

impl FeatureFlagPort for StaticFlags {
    fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled.contains(&flag)
    }
}
