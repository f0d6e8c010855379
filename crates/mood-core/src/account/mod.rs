//! Account domain model.

use std::fmt;

use zeroize::Zeroize;

/// A plaintext account password.
///
/// Stored and compared as-is. `Debug` and `Display` never print the value and
/// the buffer is cleared on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    inner: String,
}

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the raw password.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.inner == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

/// A registered user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    first_name: String,
    last_name: String,
    email: String,
    password: Password,
}

impl Account {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: Password,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn has_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.matches(password)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
