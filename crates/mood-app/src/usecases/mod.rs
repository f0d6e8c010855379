//! Business logic use cases
//!
//! Leaf to root: `ScreenController` and `WizardState` hold session state,
//! `SplashSequencer` runs the startup splash, and `FlowOrchestrator` turns
//! user actions into validated transitions.

pub mod flow;
pub mod screen_controller;
pub mod splash_sequencer;
pub mod wizard_state;

pub use flow::{CreateAccountForm, FlowOrchestrator, LoginForm};
pub use screen_controller::ScreenController;
pub use splash_sequencer::SplashSequencer;
pub use wizard_state::WizardState;
