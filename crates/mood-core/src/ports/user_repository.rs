use crate::account::Account;
use crate::ports::errors::UserRepositoryError;

/// Session-scoped collection of registered accounts.
///
/// The store does not enforce email uniqueness; callers check
/// [`exists_by_email`](UserRepositoryPort::exists_by_email) first.
pub trait UserRepositoryPort: Send + Sync {
    /// Append an account unconditionally.
    fn save(&self, account: Account) -> Result<(), UserRepositoryError>;

    /// First account whose email and password both match exactly.
    fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, UserRepositoryError>;

    fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError>;

    fn count(&self) -> Result<usize, UserRepositoryError>;
}
