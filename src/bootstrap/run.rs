//! Event loop.
//!
//! One task multiplexes console input and fired timers and hands each event
//! to the orchestrator synchronously.

use anyhow::Context;
use mood_core::{FlowError, ScreenId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info};

use crate::adapters::{parse_command, Command};
use crate::bootstrap::wiring::AppRuntime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Start the flow and process events until `quit` or end of input.
pub async fn run_event_loop<R>(runtime: &mut AppRuntime, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    runtime.flow.start().context("Failed to start the splash")?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read console input")? else {
                    info!("console input closed");
                    break;
                };
                if handle_line(runtime, &line) == Control::Quit {
                    break;
                }
            }
            Some(timer) = runtime.timer_rx.recv() => {
                if let Err(err) = runtime.flow.timer_fired(timer) {
                    error!(?timer, error = %err, "timer event failed");
                }
            }
        }
    }

    info!(session_id = %runtime.flow.session_id(), "session ended");
    Ok(())
}

/// Handle one console line. While the splash is current any line is a key press.
pub fn handle_line(runtime: &mut AppRuntime, line: &str) -> Control {
    if runtime.flow.current_screen() == Some(ScreenId::Splash) {
        if let Err(err) = runtime.flow.key_pressed() {
            error!(error = %err, "key press failed");
        }
        return Control::Continue;
    }

    let command = match parse_command(line) {
        Ok(command) => command,
        Err(err) => {
            debug!(error = %err, "unparsed input");
            runtime.console.line(&err.to_string());
            return Control::Continue;
        }
    };

    match dispatch(runtime, command) {
        Ok(control) => control,
        Err(err @ FlowError::ScreenNotActive { .. }) => {
            debug!(error = %err, "action on inactive screen");
            runtime.console.line(&err.to_string());
            Control::Continue
        }
        Err(err) => {
            // already shown at its error slot
            debug!(error = %err, "action rejected");
            Control::Continue
        }
    }
}

fn dispatch(runtime: &mut AppRuntime, command: Command) -> Result<Control, FlowError> {
    let flow = &mut runtime.flow;
    match command {
        Command::OpenCreateAccount => {
            flow.open_create_account();
        }
        Command::OpenLogin => {
            flow.open_login_form();
        }
        Command::Back => {
            flow.back_to_main();
        }
        Command::CreateAccount(form) => {
            flow.submit_create_account(form)?;
        }
        Command::Login(form) => {
            flow.submit_login(form)?;
        }
        Command::SelectMood(tag) => flow.select_mood_tag(tag)?,
        Command::FreeTextMood(text) => flow.enter_free_text_mood(&text)?,
        Command::Next => {
            flow.advance_from_mood()?;
        }
        Command::Note(note) => {
            flow.advance_from_note(&note)?;
        }
        Command::HourUp | Command::HourDown | Command::MinuteUp | Command::MinuteDown => {
            let time = match command {
                Command::HourUp => flow.hour_up()?,
                Command::HourDown => flow.hour_down()?,
                Command::MinuteUp => flow.minute_up()?,
                _ => flow.minute_down()?,
            };
            runtime.console.line(&format!("Reminder: {time}"));
        }
        Command::Confirm => {
            let entry = flow.confirm_reminder_time()?;
            match serde_json::to_string(&entry) {
                Ok(json) => runtime.console.line(&json),
                Err(err) => error!(error = %err, "failed to render mood entry"),
            }
        }
        Command::Users => match runtime.users.count() {
            Ok(count) => runtime.console.line(&format!("{count} account(s) stored")),
            Err(err) => error!(error = %err, "failed to count accounts"),
        },
        Command::Quit => return Ok(Control::Quit),
    }
    Ok(Control::Continue)
}
