//! ESP32 time adapter.
//!
//! Monotonic milliseconds since boot, the timestamp the button ISRs feed to
//! the debouncer.
//!
//! - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`**: the same clock the embassy time
//!   driver uses, so host tests see one consistent timeline.

/// Milliseconds since boot, wrapping after ~49.7 days.
#[cfg(target_os = "espidf")]
pub fn uptime_ms() -> u32 {
    // SAFETY: reads a monotonic hardware counter; no preconditions.
    ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
}

/// Milliseconds since boot, wrapping after ~49.7 days.
#[cfg(not(target_os = "espidf"))]
pub fn uptime_ms() -> u32 {
    (crate::esp_link_shims::_embassy_time_now() / 1_000) as u32
}
