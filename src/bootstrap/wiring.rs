//! # Dependency Injection
//!
//! Creates the infra adapters and the console presenter and injects them
//! into the flow orchestrator. Assembly only; no flow decisions are made here.

use std::sync::Arc;

use mood_app::{FlowDeps, FlowOrchestrator};
use mood_core::ports::UserRepositoryPort;
use mood_core::{FlowConfig, TimerId};
use mood_infra::{InMemoryUserStore, TokioTimer};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;

use crate::adapters::ConsolePresenter;

/// A fully assembled session, ready for the event loop.
pub struct AppRuntime {
    pub flow: FlowOrchestrator,
    pub console: Arc<ConsolePresenter>,
    pub users: Arc<dyn UserRepositoryPort>,
    pub timer_rx: UnboundedReceiver<TimerId>,
}

/// Wire one session around the given presenter.
///
/// Timers fire onto the returned runtime's `timer_rx`.
pub fn wire_runtime(config: &FlowConfig, console: Arc<ConsolePresenter>) -> AppRuntime {
    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    let users: Arc<dyn UserRepositoryPort> = Arc::new(InMemoryUserStore::new());

    let deps = FlowDeps {
        screens: console.clone(),
        messages: console.clone(),
        forms: console.clone(),
        timer: Arc::new(TokioTimer::new(timer_tx)),
        users: users.clone(),
    };
    let flow = FlowOrchestrator::new(deps, config);
    info!(session_id = %flow.session_id(), ?config, "flow wired");

    AppRuntime {
        flow,
        console,
        users,
        timer_rx,
    }
}
