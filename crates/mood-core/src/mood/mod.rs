//! Mood entry captured by the wizard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::reminder::ReminderTime;

/// Predefined mood buttons on the mood selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Happy,
    Calm,
    Sad,
    Anxious,
    Angry,
    Tired,
    Excited,
    Stressed,
}

impl MoodTag {
    pub const ALL: [MoodTag; 8] = [
        MoodTag::Happy,
        MoodTag::Calm,
        MoodTag::Sad,
        MoodTag::Anxious,
        MoodTag::Angry,
        MoodTag::Tired,
        MoodTag::Excited,
        MoodTag::Stressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Happy => "happy",
            MoodTag::Calm => "calm",
            MoodTag::Sad => "sad",
            MoodTag::Anxious => "anxious",
            MoodTag::Angry => "angry",
            MoodTag::Tired => "tired",
            MoodTag::Excited => "excited",
            MoodTag::Stressed => "stressed",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood tag: {0}")]
pub struct UnknownMoodTag(pub String);

impl FromStr for MoodTag {
    type Err = UnknownMoodTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        MoodTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == needle)
            .ok_or_else(|| UnknownMoodTag(s.to_string()))
    }
}

/// The active mood: a predefined tag or free text, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Tag(MoodTag),
    FreeText(String),
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Tag(tag) => tag.fmt(f),
            Mood::FreeText(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Option<Mood>,
    pub note: Option<String>,
    pub reminder_time: ReminderTime,
}

impl MoodEntry {
    /// The predefined tag currently selected, if the mood is not free text.
    pub fn selected_tag(&self) -> Option<MoodTag> {
        match self.mood {
            Some(Mood::Tag(tag)) => Some(tag),
            _ => None,
        }
    }
}
