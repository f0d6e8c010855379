use std::sync::Arc;

use anyhow::Context;
use moodai_lib::adapters::ConsolePresenter;
use moodai_lib::bootstrap::{self, run_event_loop, wire_runtime};
use tokio::io::BufReader;
use tracing::info;

fn main() -> anyhow::Result<()> {
    bootstrap::tracing::init_tracing_subscriber().context("Failed to initialize tracing")?;

    let config = bootstrap::resolve_config().context("Failed to load configuration")?;
    info!(?config, "configuration loaded");

    // Single-threaded: one loop owns the session
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(async {
        let mut runtime = wire_runtime(&config, Arc::new(ConsolePresenter::stdout()));
        run_event_loop(&mut runtime, BufReader::new(tokio::io::stdin())).await
    })
}
