//! Reminder time picker model.
//!
//! A 12-hour clock with quarter-hour minutes. Hour adjustments wrap and flip
//! the period; minute adjustments wrap without touching the hour.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub const MINUTE_STEP: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Period {
    pub fn flipped(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

/// Time of day for the daily mood reminder.
///
/// Invariant: `hour` is in `1..=12` and `minute` is one of 0, 15, 30, 45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
    period: Period,
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self {
            hour: 8,
            minute: 0,
            period: Period::Am,
        }
    }
}

impl ReminderTime {
    /// Returns `None` when `hour` or `minute` falls outside the picker's range.
    pub fn new(hour: u8, minute: u8, period: Period) -> Option<Self> {
        let hour_ok = (1..=12).contains(&hour);
        let minute_ok = minute < 60 && minute % MINUTE_STEP == 0;
        (hour_ok && minute_ok).then_some(Self {
            hour,
            minute,
            period,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn hour_up(&mut self) {
        if self.hour == 12 {
            self.hour = 1;
            self.period = self.period.flipped();
        } else {
            self.hour += 1;
        }
    }

    pub fn hour_down(&mut self) {
        if self.hour == 1 {
            self.hour = 12;
            self.period = self.period.flipped();
        } else {
            self.hour -= 1;
        }
    }

    pub fn minute_up(&mut self) {
        self.minute += MINUTE_STEP;
        if self.minute >= 60 {
            self.minute = 0;
        }
    }

    pub fn minute_down(&mut self) {
        self.minute = match self.minute.checked_sub(MINUTE_STEP) {
            Some(minute) => minute,
            None => 60 - MINUTE_STEP,
        };
    }

    /// 24-hour equivalent. 12 AM maps to 00:xx, 12 PM to 12:xx.
    pub fn to_naive_time(&self) -> NaiveTime {
        let hour12 = u32::from(self.hour % 12);
        let hour24 = match self.period {
            Period::Am => hour12,
            Period::Pm => hour12 + 12,
        };
        // invariant keeps hour24 < 24 and minute < 60
        NaiveTime::from_hms_opt(hour24, u32::from(self.minute), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}
