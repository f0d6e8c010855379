use mood_core::{Mood, MoodEntry, MoodTag, ReminderTime};

/// The in-progress mood entry for the current session.
#[derive(Debug, Default)]
pub struct WizardState {
    entry: MoodEntry,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop whatever was captured and start a fresh entry.
    pub fn reset(&mut self) {
        self.entry = MoodEntry::default();
    }

    pub fn entry(&self) -> &MoodEntry {
        &self.entry
    }

    pub fn mood(&self) -> Option<&Mood> {
        self.entry.mood.as_ref()
    }

    /// A predefined tag replaces any free-text mood.
    pub fn select_tag(&mut self, tag: MoodTag) {
        self.entry.mood = Some(Mood::Tag(tag));
    }

    /// Free text replaces any selected tag. Blank text clears the mood.
    ///
    /// Returns true when a mood is set afterwards.
    pub fn set_free_text(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.entry.mood = None;
            false
        } else {
            self.entry.mood = Some(Mood::FreeText(trimmed.to_string()));
            true
        }
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.entry.note = Some(note.into());
    }

    pub fn reminder_time(&self) -> ReminderTime {
        self.entry.reminder_time
    }

    pub fn reminder_time_mut(&mut self) -> &mut ReminderTime {
        &mut self.entry.reminder_time
    }
}
