//! In-memory user store.
//!
//! Accounts live for the lifetime of the session and are lost on exit.

use std::sync::{RwLock, RwLockReadGuard};

use mood_core::ports::{UserRepositoryError, UserRepositoryPort};
use mood_core::Account;
use tracing::debug;

#[derive(Default)]
pub struct InMemoryUserStore {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Account>>, UserRepositoryError> {
        self.accounts
            .read()
            .map_err(|e| UserRepositoryError::Storage(format!("user store lock poisoned: {e}")))
    }
}

impl UserRepositoryPort for InMemoryUserStore {
    fn save(&self, account: Account) -> Result<(), UserRepositoryError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| UserRepositoryError::Storage(format!("user store lock poisoned: {e}")))?;
        debug!(email = %account.email(), "user saved");
        accounts.push(account);
        debug!(total = accounts.len(), "user store size");
        Ok(())
    }

    fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, UserRepositoryError> {
        Ok(self
            .read()?
            .iter()
            .find(|account| account.has_credentials(email, password))
            .cloned())
    }

    fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError> {
        Ok(self.read()?.iter().any(|account| account.email() == email))
    }

    fn count(&self) -> Result<usize, UserRepositoryError> {
        Ok(self.read()?.len())
    }
}
