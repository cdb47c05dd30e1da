//! Runtime symbol providers for third-party crates.
//!
//! `embassy-time` links against a driver exposing `_embassy_time_now` and
//! `_embassy_time_schedule_wake`.  The tick rate is the crate default of
//! 1 MHz, so both functions work in microseconds.
//!
//! - **`target_os = "espidf"`**: the ESP high-resolution timer.
//! - **host**: `std::time::Instant` relative to the first query.
//!
//! Wake-ups are served by a short-lived thread per scheduled timer.  The
//! workers sleep only for beeps and cooldowns, so at most a handful are in
//! flight at any time.

use core::task::Waker;
use core::time::Duration;

#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub fn _embassy_time_now() -> u64 {
    // SAFETY: reads a monotonic hardware counter; no preconditions.
    unsafe { esp_idf_svc::sys::esp_timer_get_time() as u64 }
}

#[cfg(not(target_os = "espidf"))]
#[unsafe(no_mangle)]
pub fn _embassy_time_now() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_micros() as u64
}

/// Wake `waker` once the clock reaches `at` (microseconds).
#[unsafe(no_mangle)]
pub fn _embassy_time_schedule_wake(at: u64, waker: &Waker) {
    let now = _embassy_time_now();
    if at <= now {
        waker.wake_by_ref();
        return;
    }

    let pending = waker.clone();
    let spawned = std::thread::Builder::new()
        .name("timer-wake".into())
        .stack_size(3072)
        .spawn(move || {
            std::thread::sleep(Duration::from_micros(at - _embassy_time_now().min(at)));
            pending.wake();
        });
    if spawned.is_err() {
        // Out of task memory: re-poll now so the timer re-arms.
        log::warn!("timer wake thread could not be spawned");
        waker.wake_by_ref();
    }
}
