//! Flow orchestration: account forms and the wizard steps.

mod forms;
mod orchestrator;

pub use forms::{CreateAccountForm, LoginForm};
pub use orchestrator::FlowOrchestrator;
