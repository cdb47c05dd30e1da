//! System configuration parameters
//!
//! Capacity is a build-time constant.  Timing parameters live in
//! [`SystemConfig`]; the defaults match the reference hardware and can be
//! overridden at build time by setting `OCCUPANCY_CONFIG_JSON` to a JSON
//! object with any subset of the fields below.  Nothing is persisted.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of occupants admitted at once.
pub const CAPACITY: u32 = 10;

/// Title shown on the first line of every display frame.
pub const SITE_TITLE: &str = "Library";

/// LEDC duty range for the buzzer (12-bit timer).
pub const BUZZER_DUTY_MAX: u32 = 4096;

/// How the refractory window is shared between the three buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebounceMode {
    /// One window for all buttons: an accepted press on any button
    /// suppresses presses on every button for the refractory period.
    #[default]
    Global,
    /// Each button has its own window.
    PerSource,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Input ---
    /// Minimum time between two accepted button edges (milliseconds).
    pub refractory_ms: u32,
    /// Global or per-button debounce window.
    pub debounce_mode: DebounceMode,

    // --- Feedback ---
    /// Beep played when an entry is refused (milliseconds).
    pub short_beep_ms: u32,
    /// Each of the two beeps played on reset (milliseconds).
    pub long_beep_ms: u32,
    /// Silence between the two reset beeps (milliseconds).
    pub inter_beep_pause_ms: u32,
    /// Buzzer PWM duty while sounding, out of [`BUZZER_DUTY_MAX`].
    pub buzzer_duty: u32,

    // --- Workers ---
    /// Pause after each completed worker cycle (milliseconds).
    pub cooldown_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Input
            refractory_ms: 200,
            debounce_mode: DebounceMode::Global,

            // Feedback
            short_beep_ms: 100,
            long_beep_ms: 250,
            inter_beep_pause_ms: 150,
            buzzer_duty: 300,

            // Workers
            cooldown_ms: 100,
        }
    }
}

impl SystemConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep
    /// their defaults.  The result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON override"))?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration baked in at build time, or the defaults.
    pub fn from_build_env() -> Result<Self> {
        match option_env!("OCCUPANCY_CONFIG_JSON") {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the workers cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.refractory_ms == 0 {
            return Err(Error::Config("refractory_ms must be > 0"));
        }
        if self.short_beep_ms == 0 || self.long_beep_ms == 0 {
            return Err(Error::Config("beep durations must be > 0"));
        }
        if self.buzzer_duty == 0 || self.buzzer_duty > BUZZER_DUTY_MAX {
            return Err(Error::Config("buzzer_duty out of range"));
        }
        Ok(())
    }

    pub fn short_beep(&self) -> Duration {
        Duration::from_millis(self.short_beep_ms as u64)
    }

    pub fn long_beep(&self) -> Duration {
        Duration::from_millis(self.long_beep_ms as u64)
    }

    pub fn inter_beep_pause(&self) -> Duration {
        Duration::from_millis(self.inter_beep_pause_ms as u64)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms as u64)
    }
}
