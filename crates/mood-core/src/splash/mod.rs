//! Splash screen state machine.
//!
//! Defines a pure state transition function for the startup splash: show it,
//! wait, fade out, then hand over to the main login page. A key press while
//! the splash is waiting skips the wait.

use serde::{Deserialize, Serialize};

/// Single-shot timers owned by the splash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// How long the splash stays on screen before fading.
    SplashDisplay,
    /// Length of the fade-out animation.
    SplashFade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashState {
    /// Flow not started yet.
    Idle,
    /// Splash visible, display timer pending.
    Showing,
    /// Fade-out animation running, fade timer pending.
    FadingOut,
    /// Login page shown. Terminal.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashEvent {
    Start,
    DisplayElapsed,
    FadeElapsed,
    KeyPressed,
}

/// Side-effects produced by splash transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplashAction {
    ShowSplash,
    BeginFadeOut,
    ShowLogin,
    Schedule(TimerId),
    Cancel(TimerId),
}

impl SplashEvent {
    /// The event a fired timer feeds back into the machine.
    pub fn from_timer(timer: TimerId) -> Self {
        match timer {
            TimerId::SplashDisplay => SplashEvent::DisplayElapsed,
            TimerId::SplashFade => SplashEvent::FadeElapsed,
        }
    }
}

/// Pure splash state machine: no side effects.
pub struct SplashStateMachine;

impl SplashStateMachine {
    pub fn transition(state: SplashState, event: SplashEvent) -> (SplashState, Vec<SplashAction>) {
        match (state, event) {
            (SplashState::Idle, SplashEvent::Start) => (
                SplashState::Showing,
                vec![
                    SplashAction::ShowSplash,
                    SplashAction::Schedule(TimerId::SplashDisplay),
                ],
            ),
            (SplashState::Showing, SplashEvent::DisplayElapsed) => (
                SplashState::FadingOut,
                vec![
                    SplashAction::BeginFadeOut,
                    SplashAction::Schedule(TimerId::SplashFade),
                ],
            ),
            (SplashState::Showing, SplashEvent::KeyPressed) => (
                SplashState::FadingOut,
                vec![
                    SplashAction::Cancel(TimerId::SplashDisplay),
                    SplashAction::BeginFadeOut,
                    SplashAction::Schedule(TimerId::SplashFade),
                ],
            ),
            (SplashState::FadingOut, SplashEvent::FadeElapsed) => {
                (SplashState::Finished, vec![SplashAction::ShowLogin])
            }
            (state, event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?state, ?event, "splash event ignored");
                #[cfg(not(feature = "tracing"))]
                let _ = event;
                (state, Vec::new())
            }
        }
    }
}
