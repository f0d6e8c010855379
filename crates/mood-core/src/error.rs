//! Flow error taxonomy.
//!
//! Every variant except `Repository` and `Timer` is a user-input validation
//! failure. Its `Display` output is the message shown at the error slot;
//! `ScreenNotActive` has no slot and is only reported back to the caller.

use serde::{Deserialize, Serialize};

use crate::ports::errors::{TimerError, UserRepositoryError};
use crate::screen::ScreenId;
use crate::validation::PasswordCheck;

/// Where an error message is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorSlot {
    CreateAccount,
    Login,
    Mood,
    Note,
}

impl ErrorSlot {
    /// Identifier of the error sink in the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSlot::CreateAccount => "create-error",
            ErrorSlot::Login => "login-error",
            ErrorSlot::Mood => "mood-error",
            ErrorSlot::Note => "note-error",
        }
    }
}

/// Which form rejected an email; the wording differs per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailContext {
    CreateAccount,
    Login,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("{}", malformed_email_message(.context))]
    MalformedEmail { context: EmailContext },

    #[error("An account with this email already exists.")]
    DuplicateEmail,

    #[error("{}", weak_password_message(.0))]
    WeakPassword(PasswordCheck),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please state your current mood")]
    MissingMood,

    #[error("Please enter in a note")]
    MissingNote,

    #[error("Invalid email or password. Please check your credentials.")]
    InvalidCredentials,

    #[error("Not available here: this action belongs to the {expected} screen.")]
    ScreenNotActive {
        expected: ScreenId,
        current: Option<ScreenId>,
    },

    #[error("user store failure: {0}")]
    Repository(#[from] UserRepositoryError),

    #[error("timer failure: {0}")]
    Timer(#[from] TimerError),
}

impl FlowError {
    /// True for input validation failures the user can fix by resubmitting.
    pub fn is_validation(&self) -> bool {
        !matches!(self, FlowError::Repository(_) | FlowError::Timer(_))
    }
}

fn malformed_email_message(context: &EmailContext) -> &'static str {
    match context {
        EmailContext::CreateAccount => {
            "Email must contain an \"@\" character and a \".\" after the \"@\"."
        }
        EmailContext::Login => "Please enter a valid email address.",
    }
}

fn weak_password_message(check: &PasswordCheck) -> String {
    let reasons: Vec<&str> = check
        .failed_rules()
        .iter()
        .map(|rule| rule.requirement())
        .collect();
    format!("Password does not meet requirements: {}", reasons.join(" "))
}
