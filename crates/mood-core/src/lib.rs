//! # mood-core
//!
//! Core domain models and business rules for the Mood AI onboarding flow.
//!
//! This crate contains pure logic without any infrastructure dependencies.

pub mod account;
pub mod config;
pub mod error;
pub mod ids;
pub mod mood;
pub mod ports;
pub mod reminder;
pub mod screen;
pub mod splash;
pub mod validation;

// Re-export commonly used types at the crate root
pub use account::{Account, Password};
pub use config::FlowConfig;
pub use error::{ErrorSlot, FlowError};
pub use ids::SessionId;
pub use mood::{Mood, MoodEntry, MoodTag};
pub use reminder::{Period, ReminderTime};
pub use screen::{FormId, ScreenId};
pub use splash::{SplashAction, SplashEvent, SplashState, SplashStateMachine, TimerId};
