//! Mood AI
//!
//! Console front end for the mood tracking onboarding flow.

pub mod adapters;
pub mod bootstrap;

pub use bootstrap::{run_event_loop, wire_runtime, AppRuntime};
