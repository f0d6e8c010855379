#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mood_app::{FlowDeps, FlowOrchestrator};
use mood_core::ports::{FormPort, MessagePort, ScreenPort, TimerError, TimerPort};
use mood_core::{ErrorSlot, FlowConfig, FormId, MoodTag, ScreenId, TimerId};
use mood_infra::InMemoryUserStore;

/// Records everything the flow asks the presentation layer to do.
#[derive(Default)]
pub struct FakePresenter {
    visible: Mutex<HashMap<ScreenId, bool>>,
    exiting: Mutex<Vec<ScreenId>>,
    errors: Mutex<HashMap<ErrorSlot, String>>,
    announcements: Mutex<Vec<String>>,
    resets: Mutex<Vec<FormId>>,
    highlighted: Mutex<Option<MoodTag>>,
}

impl FakePresenter {
    pub fn visible_screens(&self) -> Vec<ScreenId> {
        let visible = self.visible.lock().unwrap();
        ScreenId::ALL
            .into_iter()
            .filter(|s| visible.get(s).copied().unwrap_or(false))
            .collect()
    }

    pub fn error(&self, slot: ErrorSlot) -> Option<String> {
        self.errors.lock().unwrap().get(&slot).cloned()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.announcements.lock().unwrap().clone()
    }

    pub fn resets(&self) -> Vec<FormId> {
        self.resets.lock().unwrap().clone()
    }

    pub fn exiting(&self) -> Vec<ScreenId> {
        self.exiting.lock().unwrap().clone()
    }

    pub fn highlighted(&self) -> Option<MoodTag> {
        *self.highlighted.lock().unwrap()
    }
}

impl ScreenPort for FakePresenter {
    fn set_visible(&self, screen: ScreenId, visible: bool) {
        self.visible.lock().unwrap().insert(screen, visible);
    }

    fn begin_exit_animation(&self, screen: ScreenId) {
        self.exiting.lock().unwrap().push(screen);
    }
}

impl MessagePort for FakePresenter {
    fn set_error(&self, slot: ErrorSlot, message: &str) {
        self.errors.lock().unwrap().insert(slot, message.to_string());
    }

    fn clear_error(&self, slot: ErrorSlot) {
        self.errors.lock().unwrap().remove(&slot);
    }

    fn announce(&self, message: &str) {
        self.announcements.lock().unwrap().push(message.to_string());
    }
}

impl FormPort for FakePresenter {
    fn reset_form(&self, form: FormId) {
        self.resets.lock().unwrap().push(form);
    }

    fn highlight_mood_tag(&self, tag: Option<MoodTag>) {
        *self.highlighted.lock().unwrap() = tag;
    }
}

/// Timer that only records; tests fire timers by hand.
#[derive(Default)]
pub struct ManualTimer {
    pending: Mutex<HashMap<TimerId, Duration>>,
}

impl ManualTimer {
    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.pending.lock().unwrap().contains_key(&timer)
    }

    pub fn delay(&self, timer: TimerId) -> Option<Duration> {
        self.pending.lock().unwrap().get(&timer).copied()
    }

    /// Removes the timer and reports whether it was pending.
    pub fn take(&self, timer: TimerId) -> bool {
        self.pending.lock().unwrap().remove(&timer).is_some()
    }
}

impl TimerPort for ManualTimer {
    fn schedule(&self, timer: TimerId, delay: Duration) -> Result<(), TimerError> {
        self.pending.lock().unwrap().insert(timer, delay);
        Ok(())
    }

    fn cancel(&self, timer: TimerId) {
        self.pending.lock().unwrap().remove(&timer);
    }
}

pub struct Harness {
    pub flow: FlowOrchestrator,
    pub presenter: Arc<FakePresenter>,
    pub timer: Arc<ManualTimer>,
    pub users: Arc<InMemoryUserStore>,
}

impl Harness {
    pub fn new() -> Self {
        let presenter = Arc::new(FakePresenter::default());
        let timer = Arc::new(ManualTimer::default());
        let users = Arc::new(InMemoryUserStore::new());
        let deps = FlowDeps {
            screens: presenter.clone(),
            messages: presenter.clone(),
            forms: presenter.clone(),
            timer: timer.clone(),
            users: users.clone(),
        };
        let flow = FlowOrchestrator::new(deps, &FlowConfig::default());
        Self {
            flow,
            presenter,
            timer,
            users,
        }
    }

    /// Fires a pending timer through the flow, as the event loop would.
    pub fn fire(&mut self, timer: TimerId) {
        assert!(self.timer.take(timer), "{timer:?} was not pending");
        self.flow.timer_fired(timer).unwrap();
    }
}
