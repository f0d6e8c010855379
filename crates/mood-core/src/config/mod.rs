//! Flow configuration DTO.
//!
//! Data only. Values are read from TOML; anything missing keeps its default.

use std::time::Duration;

pub const DEFAULT_SPLASH_DISPLAY_MS: u64 = 2000;
pub const DEFAULT_SPLASH_FADE_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Time the splash stays up before fading.
    pub splash_display_ms: u64,
    /// Length of the splash fade-out.
    pub splash_fade_ms: u64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            splash_display_ms: DEFAULT_SPLASH_DISPLAY_MS,
            splash_fade_ms: DEFAULT_SPLASH_FADE_MS,
        }
    }
}

impl FlowConfig {
    /// Create FlowConfig from a TOML value.
    ///
    /// Reads `[splash] display_ms` and `[splash] fade_ms`. Negative or
    /// non-integer values are treated as missing.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let defaults = Self::default();
        let splash_ms = |key: &str| {
            toml_value
                .get("splash")
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
        };

        Self {
            splash_display_ms: splash_ms("display_ms").unwrap_or(defaults.splash_display_ms),
            splash_fade_ms: splash_ms("fade_ms").unwrap_or(defaults.splash_fade_ms),
        }
    }

    pub fn splash_display(&self) -> Duration {
        Duration::from_millis(self.splash_display_ms)
    }

    pub fn splash_fade(&self) -> Duration {
        Duration::from_millis(self.splash_fade_ms)
    }
}
