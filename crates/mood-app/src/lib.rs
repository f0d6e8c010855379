//! Mood AI application layer
//!
//! Use cases that drive the onboarding flow on top of the `mood-core` ports.

pub mod deps;
pub mod usecases;

pub use deps::FlowDeps;
pub use usecases::{
    CreateAccountForm, FlowOrchestrator, LoginForm, ScreenController, SplashSequencer, WizardState,
};
