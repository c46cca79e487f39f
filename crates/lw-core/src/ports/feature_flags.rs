//! Feature-flag lookup port.

use serde::{Deserialize, Serialize};

/// Remotely togglable features consulted during onboarding routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    CloudBackup,
    CloudBackupSetupInOnboarding,
    PhoneVerification,
    ProtectWallet,
    EnableBiometry,
}

/// Read-side flag lookup, implemented over the shell's flag provider.
pub trait FeatureFlagPort: Send + Sync {
    fn is_enabled(&self, flag: FeatureFlag) -> bool;
}
