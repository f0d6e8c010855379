//! Port interfaces for the application layer
//!
//! Ports define the contract between the flow use cases and the adapters
//! that implement them: the in-memory user store, the timer, and whatever
//! presentation layer renders the screens. The core never reaches into a
//! concrete rendering tree.
//!
//! All ports are synchronous. Handlers run to completion inside one input
//! event; the only deferred work is a scheduled timer, which reports back as
//! a new event.

pub mod errors;
mod presentation;
mod timer;
mod user_repository;

pub use errors::{TimerError, UserRepositoryError};
pub use presentation::{FormPort, MessagePort, ScreenPort};
pub use timer::TimerPort;
pub use user_repository::UserRepositoryPort;
