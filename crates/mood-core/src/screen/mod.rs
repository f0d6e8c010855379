//! Screen identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One full-page UI state. Exactly one is visible once the flow has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    Splash,
    Login,
    CreateAccount,
    LoginForm,
    MoodSelection,
    NoteEntry,
    TimeSelection,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Splash,
        ScreenId::Login,
        ScreenId::CreateAccount,
        ScreenId::LoginForm,
        ScreenId::MoodSelection,
        ScreenId::NoteEntry,
        ScreenId::TimeSelection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Login => "login",
            ScreenId::CreateAccount => "createAccount",
            ScreenId::LoginForm => "loginForm",
            ScreenId::MoodSelection => "moodSelection",
            ScreenId::NoteEntry => "noteEntry",
            ScreenId::TimeSelection => "timeSelection",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs the presentation layer can reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormId {
    CreateAccount,
    Login,
    /// Free-text mood field on the mood selection screen.
    MoodText,
}
