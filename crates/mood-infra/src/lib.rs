//! Infrastructure adapters for the Mood AI onboarding flow.

pub mod time;
pub mod user;

pub use time::TokioTimer;
pub use user::InMemoryUserStore;
