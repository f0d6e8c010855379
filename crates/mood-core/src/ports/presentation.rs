use crate::error::ErrorSlot;
use crate::mood::MoodTag;
use crate::screen::{FormId, ScreenId};

/// Per-screen visibility toggle.
pub trait ScreenPort: Send + Sync {
    fn set_visible(&self, screen: ScreenId, visible: bool);

    /// Start the exit animation of a screen that is still visible.
    fn begin_exit_animation(&self, screen: ScreenId);
}

/// Text sinks for validation errors and one-off notices.
pub trait MessagePort: Send + Sync {
    fn set_error(&self, slot: ErrorSlot, message: &str);

    fn clear_error(&self, slot: ErrorSlot);

    /// A transient notice such as a welcome message.
    fn announce(&self, message: &str);
}

pub trait FormPort: Send + Sync {
    /// Clear every input of the form.
    fn reset_form(&self, form: FormId);

    /// Mark one predefined mood button selected and all others unselected.
    /// `None` unselects every button.
    fn highlight_mood_tag(&self, tag: Option<MoodTag>);
}
