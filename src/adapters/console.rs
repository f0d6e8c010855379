//! Console presentation adapter.
//!
//! Renders screens, error slots and announcements as plain text lines and
//! turns console input lines into [`Command`]s.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use mood_app::{CreateAccountForm, LoginForm};
use mood_core::mood::UnknownMoodTag;
use mood_core::ports::{FormPort, MessagePort, ScreenPort};
use mood_core::{ErrorSlot, FormId, MoodTag, ScreenId};
use tracing::{debug, warn};

/// Presentation ports implemented on a line-oriented writer (stdout in the binary).
pub struct ConsolePresenter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsolePresenter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Writes one line. Output failures are logged and otherwise ignored.
    pub fn line(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!(error = %err, "console write failed");
        }
    }

    fn lines(&self, texts: &[&str]) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = texts
            .iter()
            .try_for_each(|text| writeln!(out, "{text}"))
            .and_then(|_| out.flush());
        if let Err(err) = result {
            warn!(error = %err, "console write failed");
        }
    }
}

fn screen_banner(screen: ScreenId) -> Vec<String> {
    match screen {
        ScreenId::Splash => vec![
            "~~ Mood AI ~~".to_string(),
            "(press enter to continue)".to_string(),
        ],
        ScreenId::Login => vec![
            "== Welcome ==".to_string(),
            "open-create | open-login | quit".to_string(),
        ],
        ScreenId::CreateAccount => vec![
            "== Create account ==".to_string(),
            "create <first> <last> <email> <password> <confirm> | back".to_string(),
        ],
        ScreenId::LoginForm => vec![
            "== Log in ==".to_string(),
            "login <email> <password> | back".to_string(),
        ],
        ScreenId::MoodSelection => {
            let tags: Vec<&str> = MoodTag::ALL.iter().map(MoodTag::as_str).collect();
            vec![
                "== How are you feeling? ==".to_string(),
                format!("mood <{}> | feeling <text> | next", tags.join("|")),
            ]
        }
        ScreenId::NoteEntry => vec![
            "== Add a note ==".to_string(),
            "note <text>".to_string(),
        ],
        ScreenId::TimeSelection => vec![
            "== Daily reminder ==".to_string(),
            "hour+ | hour- | min+ | min- | confirm".to_string(),
        ],
    }
}

impl ScreenPort for ConsolePresenter {
    fn set_visible(&self, screen: ScreenId, visible: bool) {
        if !visible {
            return;
        }
        let banner = screen_banner(screen);
        let texts: Vec<&str> = banner.iter().map(String::as_str).collect();
        self.lines(&texts);
    }

    fn begin_exit_animation(&self, screen: ScreenId) {
        debug!(%screen, "exit animation started");
        self.line("...");
    }
}

impl MessagePort for ConsolePresenter {
    fn set_error(&self, slot: ErrorSlot, message: &str) {
        self.line(&format!("[{}] {message}", slot.as_str()));
    }

    fn clear_error(&self, slot: ErrorSlot) {
        debug!(slot = slot.as_str(), "error slot cleared");
    }

    fn announce(&self, message: &str) {
        self.line(&format!("* {message}"));
    }
}

impl FormPort for ConsolePresenter {
    fn reset_form(&self, form: FormId) {
        debug!(?form, "form reset");
    }

    fn highlight_mood_tag(&self, tag: Option<MoodTag>) {
        if let Some(tag) = tag {
            self.line(&format!("selected: {tag}"));
        }
    }
}

/// A parsed console input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateAccount(CreateAccountForm),
    Login(LoginForm),
    SelectMood(MoodTag),
    FreeTextMood(String),
    Next,
    Note(String),
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    Confirm,
    OpenCreateAccount,
    OpenLogin,
    Back,
    Users,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: mood <tag>")]
    MissingMoodTag,

    #[error(transparent)]
    MoodTag(#[from] UnknownMoodTag),
}

/// Parses one input line.
///
/// Form commands take whitespace-separated fields; missing fields are
/// submitted empty so the flow reports them. `feeling` and `note` take the
/// rest of the line verbatim.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    let command = match verb {
        "" => return Err(CommandError::Empty),
        "create" => {
            let mut fields = rest.split_whitespace().map(str::to_string);
            let mut field = || fields.next().unwrap_or_default();
            Command::CreateAccount(CreateAccountForm {
                first_name: field(),
                last_name: field(),
                email: field(),
                password: field(),
                confirm_password: field(),
            })
        }
        "login" => {
            let mut fields = rest.split_whitespace().map(str::to_string);
            let mut field = || fields.next().unwrap_or_default();
            Command::Login(LoginForm {
                email: field(),
                password: field(),
            })
        }
        "mood" => {
            if rest.is_empty() {
                return Err(CommandError::MissingMoodTag);
            }
            Command::SelectMood(rest.parse()?)
        }
        "feeling" => Command::FreeTextMood(rest.to_string()),
        "next" => Command::Next,
        "note" => Command::Note(rest.to_string()),
        "hour+" => Command::HourUp,
        "hour-" => Command::HourDown,
        "min+" => Command::MinuteUp,
        "min-" => Command::MinuteDown,
        "confirm" => Command::Confirm,
        "open-create" => Command::OpenCreateAccount,
        "open-login" => Command::OpenLogin,
        "back" => Command::Back,
        "users" => Command::Users,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}
