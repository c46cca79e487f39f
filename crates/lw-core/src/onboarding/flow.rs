//! Onboarding flow decision table.
//!
//! Pure: maps (current screen, snapshot) to the next [`Transition`]. The
//! table never performs navigation or dispatch itself and never knows
//! whether its caller is the real driver or the step-count simulator.

use serde::{Deserialize, Serialize};

use super::effect::SideEffect;
use super::error::FlowError;
use super::screen::ScreenId;
use super::snapshot::UserStateSnapshot;

/// Which keyless-backup flow a screen is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeylessBackupFlow {
    Setup,
    Restore,
}

/// Typed navigation parameters carried by an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenParams {
    KeylessBackup { flow: KeylessBackupFlow },
}

/// How an advance manipulates the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackOp {
    /// Push on top of the current stack.
    Push,
    /// Replace the whole stack with the destination.
    ReplaceStack,
    /// Pop back to the anchor first, then push the destination.
    PopToThenPush(ScreenId),
}

/// One routing decision for one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Move to another onboarding screen.
    Advance {
        screen: ScreenId,
        params: Option<ScreenParams>,
        stack: StackOp,
        effects: Vec<SideEffect>,
    },
    /// Leave onboarding onto a terminal screen.
    Finish {
        screen: ScreenId,
        effects: Vec<SideEffect>,
    },
}

impl Transition {
    fn push(screen: ScreenId) -> Self {
        Self::Advance {
            screen,
            params: None,
            stack: StackOp::Push,
            effects: Vec::new(),
        }
    }

    fn finish() -> Self {
        Self::Finish {
            screen: ScreenId::ChooseYourAdventure,
            effects: Vec::new(),
        }
    }
}

/// Pure decision table over onboarding screens.
pub struct OnboardingFlow;

impl OnboardingFlow {
    /// Screen the flow starts on for the given snapshot.
    ///
    /// A store-wipe recovery skips pincode setup and drops the user straight
    /// into the import path; everyone else starts at `PincodeSet`.
    pub fn first_screen(snapshot: &UserStateSnapshot) -> ScreenId {
        if snapshot.recovering_from_store_wipe {
            if snapshot.show_cloud_backup_restore {
                ScreenId::ImportSelect
            } else {
                ScreenId::ImportWallet
            }
        } else {
            ScreenId::PincodeSet
        }
    }

    /// Next transition for the screen the user is currently completing.
    ///
    /// Total over every flow screen; `Welcome` and the terminal screens have
    /// no outgoing rule and yield [`FlowError::UnhandledScreen`].
    pub fn next(
        current: ScreenId,
        snapshot: &UserStateSnapshot,
    ) -> Result<Transition, FlowError> {
        match current {
            ScreenId::PincodeSet => {
                if snapshot.supported_biometry.is_some() {
                    Ok(Transition::push(ScreenId::EnableBiometry))
                } else {
                    Ok(Self::after_pincode(snapshot))
                }
            }
            // Biometry already handled; the remaining branches are shared
            // with PincodeSet.
            ScreenId::EnableBiometry => Ok(Self::after_pincode(snapshot)),
            ScreenId::ImportSelect => {
                Ok(Self::verify_or_finish(snapshot, ScreenId::LinkPhoneNumber))
            }
            ScreenId::SignInWithEmail => {
                Ok(Self::verify_or_finish(snapshot, ScreenId::VerificationStart))
            }
            ScreenId::ImportWallet => {
                Ok(Self::verify_or_finish(snapshot, ScreenId::VerificationStart))
            }
            // Account init already happened mid-verification; not repeated.
            ScreenId::LinkPhoneNumber | ScreenId::VerificationStart => Ok(Transition::finish()),
            ScreenId::ProtectWallet => {
                if snapshot.skip_verification {
                    Ok(Transition::finish())
                } else {
                    Ok(Transition::push(ScreenId::VerificationStart))
                }
            }
            screen @ (ScreenId::Welcome | ScreenId::ChooseYourAdventure | ScreenId::TabHome) => {
                Err(FlowError::UnhandledScreen(screen))
            }
        }
    }

    /// Post-biometry branches shared by `PincodeSet` and `EnableBiometry`:
    /// restore, cloud-backup setup, then the protect-wallet decision.
    fn after_pincode(snapshot: &UserStateSnapshot) -> Transition {
        if snapshot.chose_to_restore_account == Some(true) {
            let screen = if snapshot.show_cloud_backup_restore {
                ScreenId::ImportSelect
            } else {
                ScreenId::ImportWallet
            };
            return Transition::Advance {
                screen,
                params: None,
                stack: StackOp::PopToThenPush(ScreenId::Welcome),
                effects: Vec::new(),
            };
        }
        if snapshot.show_cloud_backup_setup {
            return Transition::Advance {
                screen: ScreenId::SignInWithEmail,
                params: Some(ScreenParams::KeylessBackup {
                    flow: KeylessBackupFlow::Setup,
                }),
                stack: StackOp::Push,
                effects: vec![SideEffect::InitializeAccount],
            };
        }
        if snapshot.skip_protect_wallet {
            Transition::Finish {
                screen: ScreenId::ChooseYourAdventure,
                effects: vec![SideEffect::InitializeAccount],
            }
        } else {
            Transition::Advance {
                screen: ScreenId::ProtectWallet,
                params: None,
                stack: StackOp::Push,
                effects: vec![SideEffect::InitializeAccount],
            }
        }
    }

    /// Shared tail of the import/sign-in screens: finish if verification is
    /// skipped or already done centrally, otherwise push the next
    /// verification screen.
    fn verify_or_finish(snapshot: &UserStateSnapshot, next: ScreenId) -> Transition {
        if snapshot.skip_verification || snapshot.number_already_verified_centrally {
            Transition::finish()
        } else {
            // Plain push: clearing the stack here breaks the restore flow
            // on cold start.
            Transition::push(next)
        }
    }
}
