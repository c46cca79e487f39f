//! Tests for the decision table ([`OnboardingFlow`]).

use super::fixtures::*;
use crate::onboarding::{
    FlowError, KeylessBackupFlow, OnboardingFlow, ScreenId, ScreenParams, SideEffect, StackOp,
    Transition, UserStateSnapshot,
};

#[test]
fn fresh_account_goes_from_pincode_to_protect_wallet_with_account_init() {
    // Scenario A.
    let transition = OnboardingFlow::next(ScreenId::PincodeSet, &fresh_account()).unwrap();
    assert_eq!(
        transition,
        Transition::Advance {
            screen: ScreenId::ProtectWallet,
            params: None,
            stack: StackOp::Push,
            effects: vec![SideEffect::InitializeAccount],
        }
    );
}

#[test]
fn biometry_hardware_routes_pincode_to_enable_biometry() {
    // Scenario B: the biometry branch wins before anything else.
    let transition =
        OnboardingFlow::next(ScreenId::PincodeSet, &fresh_account_with_biometry()).unwrap();
    assert_eq!(
        transition,
        Transition::Advance {
            screen: ScreenId::EnableBiometry,
            params: None,
            stack: StackOp::Push,
            effects: vec![],
        }
    );
}

#[test]
fn restore_choice_pops_to_welcome_then_imports() {
    // Scenario C: cloud backup enabled picks the import selector.
    let transition =
        OnboardingFlow::next(ScreenId::PincodeSet, &restoring_with_cloud_backup()).unwrap();
    assert_eq!(
        transition,
        Transition::Advance {
            screen: ScreenId::ImportSelect,
            params: None,
            stack: StackOp::PopToThenPush(ScreenId::Welcome),
            effects: vec![],
        }
    );

    // Without cloud backup the destination is the plain import screen.
    let snapshot = UserStateSnapshot {
        show_cloud_backup_restore: false,
        ..restoring_with_cloud_backup()
    };
    match OnboardingFlow::next(ScreenId::PincodeSet, &snapshot).unwrap() {
        Transition::Advance { screen, stack, .. } => {
            assert_eq!(screen, ScreenId::ImportWallet);
            assert_eq!(stack, StackOp::PopToThenPush(ScreenId::Welcome));
        }
        other => panic!("expected advance, got {other:?}"),
    }
}

#[test]
fn cloud_backup_setup_routes_to_sign_in_with_setup_flow() {
    let snapshot = UserStateSnapshot {
        show_cloud_backup_restore: true,
        show_cloud_backup_setup: true,
        ..fresh_account()
    };
    let transition = OnboardingFlow::next(ScreenId::PincodeSet, &snapshot).unwrap();
    assert_eq!(
        transition,
        Transition::Advance {
            screen: ScreenId::SignInWithEmail,
            params: Some(ScreenParams::KeylessBackup {
                flow: KeylessBackupFlow::Setup,
            }),
            stack: StackOp::Push,
            effects: vec![SideEffect::InitializeAccount],
        }
    );
}

#[test]
fn skipping_protect_wallet_finishes_straight_from_pincode() {
    let snapshot = UserStateSnapshot {
        skip_protect_wallet: true,
        ..fresh_account()
    };
    let transition = OnboardingFlow::next(ScreenId::PincodeSet, &snapshot).unwrap();
    assert_eq!(
        transition,
        Transition::Finish {
            screen: ScreenId::ChooseYourAdventure,
            effects: vec![SideEffect::InitializeAccount],
        }
    );
}

#[test]
fn enable_biometry_shares_the_post_pincode_branches() {
    // Same snapshots, biometry check omitted: EnableBiometry must land on
    // the same destinations PincodeSet would without hardware.
    for snapshot in [
        fresh_account(),
        restoring_with_cloud_backup(),
        UserStateSnapshot {
            show_cloud_backup_restore: true,
            show_cloud_backup_setup: true,
            ..fresh_account()
        },
    ] {
        let via_pincode = OnboardingFlow::next(ScreenId::PincodeSet, &snapshot).unwrap();
        let via_biometry = OnboardingFlow::next(ScreenId::EnableBiometry, &snapshot).unwrap();
        assert_eq!(via_pincode, via_biometry);
    }
}

#[test]
fn import_select_pushes_link_phone_number_without_clearing_the_stack() {
    let transition = OnboardingFlow::next(ScreenId::ImportSelect, &fresh_account()).unwrap();
    assert_eq!(
        transition,
        Transition::Advance {
            screen: ScreenId::LinkPhoneNumber,
            params: None,
            stack: StackOp::Push,
            effects: vec![],
        }
    );
}

#[test]
fn sign_in_and_import_wallet_push_verification_start() {
    for screen in [ScreenId::SignInWithEmail, ScreenId::ImportWallet] {
        match OnboardingFlow::next(screen, &fresh_account()).unwrap() {
            Transition::Advance { screen: next, .. } => {
                assert_eq!(next, ScreenId::VerificationStart)
            }
            other => panic!("expected advance from {screen}, got {other:?}"),
        }
    }
}

#[test]
fn import_screens_finish_when_verification_is_moot() {
    let skip = UserStateSnapshot {
        skip_verification: true,
        ..fresh_account()
    };
    let verified = UserStateSnapshot {
        number_already_verified_centrally: true,
        ..fresh_account()
    };
    for snapshot in [skip, verified] {
        for screen in [
            ScreenId::ImportSelect,
            ScreenId::SignInWithEmail,
            ScreenId::ImportWallet,
        ] {
            assert_eq!(
                OnboardingFlow::next(screen, &snapshot).unwrap(),
                Transition::Finish {
                    screen: ScreenId::ChooseYourAdventure,
                    effects: vec![],
                },
                "{screen} should finish under {snapshot:?}"
            );
        }
    }
}

#[test]
fn protect_wallet_skips_verification_when_told_to() {
    // Scenario D.
    let snapshot = UserStateSnapshot {
        skip_verification: true,
        ..fresh_account()
    };
    assert_eq!(
        OnboardingFlow::next(ScreenId::ProtectWallet, &snapshot).unwrap(),
        Transition::Finish {
            screen: ScreenId::ChooseYourAdventure,
            effects: vec![],
        }
    );

    match OnboardingFlow::next(ScreenId::ProtectWallet, &fresh_account()).unwrap() {
        Transition::Advance { screen, .. } => assert_eq!(screen, ScreenId::VerificationStart),
        other => panic!("expected advance, got {other:?}"),
    }
}

#[test]
fn verification_screens_always_finish_without_reinitializing() {
    // Scenario E: regardless of snapshot, and with no effects attached
    // (account init already happened mid-verification).
    for snapshot in snapshot_grid() {
        for screen in [ScreenId::LinkPhoneNumber, ScreenId::VerificationStart] {
            assert_eq!(
                OnboardingFlow::next(screen, &snapshot).unwrap(),
                Transition::Finish {
                    screen: ScreenId::ChooseYourAdventure,
                    effects: vec![],
                }
            );
        }
    }
}

#[test]
fn first_screen_depends_on_store_wipe_recovery() {
    assert_eq!(
        OnboardingFlow::first_screen(&fresh_account()),
        ScreenId::PincodeSet
    );

    let wiped = UserStateSnapshot {
        recovering_from_store_wipe: true,
        ..fresh_account()
    };
    assert_eq!(OnboardingFlow::first_screen(&wiped), ScreenId::ImportWallet);

    let wiped_with_cloud = UserStateSnapshot {
        show_cloud_backup_restore: true,
        ..wiped
    };
    assert_eq!(
        OnboardingFlow::first_screen(&wiped_with_cloud),
        ScreenId::ImportSelect
    );
}

#[test]
fn every_flow_screen_has_a_rule_under_every_snapshot() {
    for snapshot in snapshot_grid() {
        for screen in flow_screens() {
            assert!(
                OnboardingFlow::next(screen, &snapshot).is_ok(),
                "missing rule for {screen} under {snapshot:?}"
            );
        }
    }
}

#[test]
fn screens_outside_the_flow_are_unhandled() {
    for screen in [
        ScreenId::Welcome,
        ScreenId::ChooseYourAdventure,
        ScreenId::TabHome,
    ] {
        assert_eq!(
            OnboardingFlow::next(screen, &fresh_account()),
            Err(FlowError::UnhandledScreen(screen))
        );
    }

    let err = OnboardingFlow::next(ScreenId::Welcome, &fresh_account()).unwrap_err();
    assert_eq!(err.to_string(), "no step info found for screen welcome");
}

#[test]
fn every_snapshot_terminates_within_the_bound() {
    for snapshot in snapshot_grid() {
        let sequence = walk(&snapshot);
        assert!(!sequence.is_empty());
        assert!(sequence.len() <= 6);
        // No screen repeats: the flow graph is acyclic.
        for (i, screen) in sequence.iter().enumerate() {
            assert!(
                !sequence[..i].contains(screen),
                "cycle through {screen} under {snapshot:?}"
            );
        }
    }
}
