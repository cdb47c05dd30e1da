//! Beep sequencing on top of the [`BuzzerPort`].
//!
//! The buzzer lock is held for a whole sequence so a refused entry and a
//! concurrent reset never interleave their tones.  Waiting between tones is
//! a cooperative [`Timer`] sleep; other tasks keep running.

use core::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;

use super::ports::BuzzerPort;
use super::state::Feedback;
use crate::config::SystemConfig;

pub async fn play<B: BuzzerPort>(
    buzzer: &Mutex<CriticalSectionRawMutex, B>,
    feedback: Feedback,
    config: &SystemConfig,
) {
    match feedback {
        Feedback::Silent => {}
        Feedback::ShortBeep => {
            let mut b = buzzer.lock().await;
            beep(&mut *b, config.short_beep()).await;
        }
        Feedback::DoubleBeep => {
            let mut b = buzzer.lock().await;
            beep(&mut *b, config.long_beep()).await;
            sleep(config.inter_beep_pause()).await;
            beep(&mut *b, config.long_beep()).await;
        }
    }
}

async fn beep<B: BuzzerPort>(buzzer: &mut B, length: Duration) {
    buzzer.sound(length);
    sleep(length).await;
    buzzer.silence();
}

/// Cooperative sleep for a `core` duration.
pub async fn sleep(d: Duration) {
    if d.is_zero() {
        return;
    }
    Timer::after_millis(d.as_millis() as u64).await;
}
