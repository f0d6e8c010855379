//! Splash sequencer.
//!
//! Drives the pure splash state machine and executes its actions against
//! the screen controller and the timer port.

use std::sync::Arc;
use std::time::Duration;

use mood_core::ports::{TimerError, TimerPort};
use mood_core::{
    FlowConfig, ScreenId, SplashAction, SplashEvent, SplashState, SplashStateMachine, TimerId,
};
use tracing::{debug, info};

use crate::usecases::ScreenController;

pub struct SplashSequencer {
    state: SplashState,
    timer: Arc<dyn TimerPort>,
    display_delay: Duration,
    fade_delay: Duration,
}

impl SplashSequencer {
    pub fn new(timer: Arc<dyn TimerPort>, config: &FlowConfig) -> Self {
        Self {
            state: SplashState::Idle,
            timer,
            display_delay: config.splash_display(),
            fade_delay: config.splash_fade(),
        }
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    pub fn dispatch(
        &mut self,
        event: SplashEvent,
        screens: &mut ScreenController,
    ) -> Result<SplashState, TimerError> {
        let from = self.state;
        let (next, actions) = SplashStateMachine::transition(from, event);
        // state advances only after every action ran
        self.execute_actions(actions, screens)?;
        if next != from {
            info!(from = ?from, to = ?next, event = ?event, "splash state transition");
        }
        self.state = next;
        Ok(next)
    }

    fn execute_actions(
        &self,
        actions: Vec<SplashAction>,
        screens: &mut ScreenController,
    ) -> Result<(), TimerError> {
        for action in actions {
            debug!(?action, "splash executing action");
            match action {
                SplashAction::ShowSplash => screens.show(ScreenId::Splash),
                SplashAction::BeginFadeOut => screens.begin_exit(ScreenId::Splash),
                SplashAction::ShowLogin => screens.show(ScreenId::Login),
                SplashAction::Schedule(timer) => {
                    self.timer.schedule(timer, self.delay_for(timer))?;
                }
                SplashAction::Cancel(timer) => self.timer.cancel(timer),
            }
        }
        Ok(())
    }

    fn delay_for(&self, timer: TimerId) -> Duration {
        match timer {
            TimerId::SplashDisplay => self.display_delay,
            TimerId::SplashFade => self.fade_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq, Sequence};
    use mood_core::ports::ScreenPort;

    mock! {
        pub Timer {}
        impl TimerPort for Timer {
            fn schedule(&self, timer: TimerId, delay: Duration) -> Result<(), TimerError>;
            fn cancel(&self, timer: TimerId);
        }
    }

    mock! {
        pub Screens {}
        impl ScreenPort for Screens {
            fn set_visible(&self, screen: ScreenId, visible: bool);
            fn begin_exit_animation(&self, screen: ScreenId);
        }
    }

    fn config() -> FlowConfig {
        FlowConfig {
            splash_display_ms: 2000,
            splash_fade_ms: 500,
        }
    }

    fn quiet_screens() -> ScreenController {
        let mut screens = MockScreens::new();
        screens.expect_set_visible().return_const(());
        screens.expect_begin_exit_animation().return_const(());
        ScreenController::new(Arc::new(screens))
    }

    #[test]
    fn start_shows_splash_and_schedules_configured_delay() {
        let mut timer = MockTimer::new();
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashDisplay), eq(Duration::from_millis(2000)))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut screens = quiet_screens();
        let mut sequencer = SplashSequencer::new(Arc::new(timer), &config());

        let state = sequencer.dispatch(SplashEvent::Start, &mut screens).unwrap();

        assert_eq!(state, SplashState::Showing);
        assert_eq!(screens.current(), Some(ScreenId::Splash));
    }

    #[test]
    fn key_press_cancels_display_then_schedules_fade() {
        let mut seq = Sequence::new();
        let mut timer = MockTimer::new();
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashDisplay), eq(Duration::from_millis(2000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        timer
            .expect_cancel()
            .with(eq(TimerId::SplashDisplay))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashFade), eq(Duration::from_millis(500)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut screens = quiet_screens();
        let mut sequencer = SplashSequencer::new(Arc::new(timer), &config());
        sequencer.dispatch(SplashEvent::Start, &mut screens).unwrap();

        let state = sequencer
            .dispatch(SplashEvent::KeyPressed, &mut screens)
            .unwrap();
        assert_eq!(state, SplashState::FadingOut);

        // second press while fading touches no timer
        let state = sequencer
            .dispatch(SplashEvent::KeyPressed, &mut screens)
            .unwrap();
        assert_eq!(state, SplashState::FadingOut);
        assert_eq!(screens.current(), Some(ScreenId::Splash));
    }

    #[test]
    fn fade_elapsed_shows_login() {
        let mut timer = MockTimer::new();
        timer.expect_schedule().times(2).returning(|_, _| Ok(()));
        let mut screens = quiet_screens();
        let mut sequencer = SplashSequencer::new(Arc::new(timer), &config());

        sequencer.dispatch(SplashEvent::Start, &mut screens).unwrap();
        sequencer
            .dispatch(SplashEvent::DisplayElapsed, &mut screens)
            .unwrap();
        let state = sequencer
            .dispatch(SplashEvent::FadeElapsed, &mut screens)
            .unwrap();

        assert_eq!(state, SplashState::Finished);
        assert_eq!(screens.current(), Some(ScreenId::Login));
    }

    #[test]
    fn timer_failure_is_reported() {
        let mut timer = MockTimer::new();
        timer
            .expect_schedule()
            .returning(|_, _| Err(TimerError::NoRuntime));
        let mut screens = quiet_screens();
        let mut sequencer = SplashSequencer::new(Arc::new(timer), &config());

        let result = sequencer.dispatch(SplashEvent::Start, &mut screens);
        assert!(matches!(result, Err(TimerError::NoRuntime)));
        assert_eq!(sequencer.state(), SplashState::Idle);
    }

    #[test]
    fn failed_fade_schedule_keeps_splash_interruptible() {
        let mut seq = Sequence::new();
        let mut timer = MockTimer::new();
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashDisplay), eq(Duration::from_millis(2000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashFade), eq(Duration::from_millis(500)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(TimerError::NoRuntime));
        timer
            .expect_schedule()
            .with(eq(TimerId::SplashFade), eq(Duration::from_millis(500)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        timer.expect_cancel().return_const(());

        let mut screens = quiet_screens();
        let mut sequencer = SplashSequencer::new(Arc::new(timer), &config());
        sequencer.dispatch(SplashEvent::Start, &mut screens).unwrap();

        assert!(sequencer
            .dispatch(SplashEvent::KeyPressed, &mut screens)
            .is_err());
        assert_eq!(sequencer.state(), SplashState::Showing);

        let state = sequencer
            .dispatch(SplashEvent::KeyPressed, &mut screens)
            .unwrap();
        assert_eq!(state, SplashState::FadingOut);
    }
}
