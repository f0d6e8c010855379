//! Input validation rules for account forms.
//!
//! Pure functions only. Callers decide what to do with a failed check.

use serde::{Deserialize, Serialize};

/// Characters that satisfy the "special character" password rule.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&'];

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 64;

/// Returns true iff `email` contains `@` and the text after the first `@`
/// contains a `.`.
///
/// This is a shape check, not RFC 5322 validation: `"@."` passes.
pub fn validate_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// Individual password requirements, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordRule {
    Capital,
    Number,
    SpecialChar,
    Length,
}

impl PasswordRule {
    /// Message shown to the user when this rule is not met.
    pub fn requirement(&self) -> &'static str {
        match self {
            PasswordRule::Capital => "Missing capital letter.",
            PasswordRule::Number => "Missing number.",
            PasswordRule::SpecialChar => "Missing special character (!@#$%^&).",
            PasswordRule::Length => "Must be 8-64 characters.",
        }
    }
}

/// Outcome of [`validate_password`], one flag per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheck {
    pub has_capital: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub correct_length: bool,
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        self.has_capital && self.has_number && self.has_special_char && self.correct_length
    }

    /// Rules that did not pass, ordered capital, number, special, length.
    pub fn failed_rules(&self) -> Vec<PasswordRule> {
        [
            (self.has_capital, PasswordRule::Capital),
            (self.has_number, PasswordRule::Number),
            (self.has_special_char, PasswordRule::SpecialChar),
            (self.correct_length, PasswordRule::Length),
        ]
        .into_iter()
        .filter_map(|(passed, rule)| (!passed).then_some(rule))
        .collect()
    }
}

/// Checks `password` against the four account password rules.
///
/// Length is counted in UTF-16 code units, so a character outside the
/// basic multilingual plane (most emoji) counts as two.
pub fn validate_password(password: &str) -> PasswordCheck {
    let length = password.encode_utf16().count();
    PasswordCheck {
        has_capital: password.chars().any(|c| c.is_ascii_uppercase()),
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        correct_length: (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&length),
    }
}
