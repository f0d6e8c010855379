//! Bootstrap: configuration, tracing, wiring and the event loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::{handle_line, run_event_loop, Control};
pub use wiring::{wire_runtime, AppRuntime};
