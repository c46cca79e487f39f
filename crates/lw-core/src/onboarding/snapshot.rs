//! User-state snapshot consulted for one routing decision.

use serde::{Deserialize, Serialize};

use crate::ports::{FeatureFlag, FeatureFlagPort};

/// Biometry hardware available on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometryKind {
    FaceId,
    TouchId,
    Fingerprint,
}

/// Raw account state read from the upstream store selectors.
///
/// This is the input side of [`UserStateSnapshot::derive`]; the fields map
/// one-to-one onto what the store exposes, before feature flags are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub recovering_from_store_wipe: bool,
    /// Unset until the user picks restore or create on the welcome screen.
    pub chose_to_restore_account: Option<bool>,
    pub supported_biometry: Option<BiometryKind>,
    pub number_already_verified_centrally: bool,
}

/// Immutable bundle of user and feature state for one routing decision.
///
/// Derived fresh per decision; never cached across navigations, since the
/// upstream state may change mid-flow (e.g. verification completing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStateSnapshot {
    pub recovering_from_store_wipe: bool,
    pub chose_to_restore_account: Option<bool>,
    pub supported_biometry: Option<BiometryKind>,
    pub skip_verification: bool,
    pub number_already_verified_centrally: bool,
    pub show_cloud_backup_restore: bool,
    pub show_cloud_backup_setup: bool,
    pub skip_protect_wallet: bool,
}

impl UserStateSnapshot {
    /// Derive a snapshot from the feature-flag port and raw account state.
    ///
    /// Invariant enforced here: `show_cloud_backup_setup` is AND-ed with the
    /// `CloudBackup` flag, so setup can never be on while backup itself is
    /// off. Biometry is only surfaced while the `EnableBiometry` flag is on.
    pub fn derive(flags: &dyn FeatureFlagPort, account: &AccountState) -> Self {
        let cloud_backup = flags.is_enabled(FeatureFlag::CloudBackup);
        Self {
            recovering_from_store_wipe: account.recovering_from_store_wipe,
            chose_to_restore_account: account.chose_to_restore_account,
            supported_biometry: if flags.is_enabled(FeatureFlag::EnableBiometry) {
                account.supported_biometry
            } else {
                None
            },
            skip_verification: !flags.is_enabled(FeatureFlag::PhoneVerification),
            number_already_verified_centrally: account.number_already_verified_centrally,
            show_cloud_backup_restore: cloud_backup,
            show_cloud_backup_setup: cloud_backup
                && flags.is_enabled(FeatureFlag::CloudBackupSetupInOnboarding),
            skip_protect_wallet: !flags.is_enabled(FeatureFlag::ProtectWallet),
        }
    }
}
