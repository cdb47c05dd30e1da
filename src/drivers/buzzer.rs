//! Passive piezo buzzer on an LEDC PWM channel.
//!
//! Sounding sets the configured duty; silence sets it back to zero.  The
//! driver never sleeps: beep timing belongs to the caller.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty register via hw_init.
//! On host/test: tracks state in-memory only.

use core::time::Duration;

use crate::app::ports::BuzzerPort;
use crate::drivers::hw_init;

pub struct BuzzerDriver {
    duty: u32,
    sounding: bool,
}

impl BuzzerDriver {
    /// `duty` is out of [`BUZZER_DUTY_MAX`](crate::config::BUZZER_DUTY_MAX).
    pub fn new(duty: u32) -> Self {
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
        Self { duty, sounding: false }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }
}

impl BuzzerPort for BuzzerDriver {
    fn sound(&mut self, duration: Duration) {
        log::trace!("buzzer on for {} ms", duration.as_millis());
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, self.duty);
        self.sounding = true;
    }

    fn silence(&mut self) {
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
        self.sounding = false;
    }
}

impl Drop for BuzzerDriver {
    fn drop(&mut self) {
        self.silence();
    }
}
