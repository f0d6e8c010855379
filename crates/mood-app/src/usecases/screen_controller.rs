use std::sync::Arc;

use mood_core::ports::ScreenPort;
use mood_core::ScreenId;
use tracing::info;

/// Page-visibility state machine.
///
/// Starts uninitialized. [`show`](Self::show) hides every screen but the
/// requested one; there is no transition table, any screen may follow any
/// other.
pub struct ScreenController {
    screens: Arc<dyn ScreenPort>,
    current: Option<ScreenId>,
}

impl ScreenController {
    pub fn new(screens: Arc<dyn ScreenPort>) -> Self {
        Self {
            screens,
            current: None,
        }
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.current
    }

    pub fn is_current(&self, screen: ScreenId) -> bool {
        self.current == Some(screen)
    }

    pub fn show(&mut self, screen: ScreenId) {
        for candidate in ScreenId::ALL {
            self.screens.set_visible(candidate, candidate == screen);
        }
        info!(from = ?self.current, to = %screen, "screen transition");
        self.current = Some(screen);
    }

    /// Starts the exit animation without changing the current screen.
    pub fn begin_exit(&self, screen: ScreenId) {
        self.screens.begin_exit_animation(screen);
    }
}
