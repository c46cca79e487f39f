//! Onboarding screen identifiers.

use serde::{Deserialize, Serialize};

/// Identifier for each screen reachable during onboarding.
///
/// `ChooseYourAdventure` and `TabHome` are terminal: arriving on either one
/// ends onboarding, so they are excluded from step counting.
/// `Welcome` sits below the flow on the navigation stack and is only used
/// as a pop-to anchor for the restore path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Welcome,
    PincodeSet,
    EnableBiometry,
    ImportSelect,
    SignInWithEmail,
    ImportWallet,
    LinkPhoneNumber,
    VerificationStart,
    ProtectWallet,
    ChooseYourAdventure,
    TabHome,
}

impl ScreenId {
    /// Whether this screen marks the end of onboarding.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ChooseYourAdventure | Self::TabHome)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::PincodeSet => "pincode_set",
            Self::EnableBiometry => "enable_biometry",
            Self::ImportSelect => "import_select",
            Self::SignInWithEmail => "sign_in_with_email",
            Self::ImportWallet => "import_wallet",
            Self::LinkPhoneNumber => "link_phone_number",
            Self::VerificationStart => "verification_start",
            Self::ProtectWallet => "protect_wallet",
            Self::ChooseYourAdventure => "choose_your_adventure",
            Self::TabHome => "tab_home",
        };
        write!(f, "{s}")
    }
}
