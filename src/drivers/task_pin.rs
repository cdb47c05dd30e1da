//! Core-pinned thread spawning for ESP32-S3 dual-core.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task pinned to a specific CPU core with explicit priority
//! and stack size. On non-ESP targets, falls back to plain thread spawn.
//!
//! # ESP-IDF Threading Model
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks. `esp_pthread_set_cfg()` sets thread-local
//! configuration that applies to the *next* `pthread_create()` call from
//! the calling thread. This means the config→spawn pair must not be
//! interleaved with other thread creation on the same thread.

#[cfg(not(target_os = "espidf"))]
use std::cell::Cell;
use std::io;
use std::thread::JoinHandle;

/// CPU core identifiers for the ESP32-S3 Xtensa LX7 dual-core.  Core 0
/// (PRO_CPU) is left to the IDF system tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 1 (APP_CPU): gate workers.
    App = 1,
}

#[cfg(not(target_os = "espidf"))]
thread_local! {
    static SIM_PRIORITY: Cell<Option<u8>> = const { Cell::new(None) };
}

/// Priority of the calling task.
#[cfg(target_os = "espidf")]
pub fn current_priority() -> Option<u8> {
    // SAFETY: a null handle queries the calling task.
    let prio = unsafe { esp_idf_sys::uxTaskPriorityGet(core::ptr::null_mut()) };
    u8::try_from(prio).ok()
}

/// Priority the calling thread was spawned with, or `None` for threads not
/// created through [`spawn_on_core`].
#[cfg(not(target_os = "espidf"))]
pub fn current_priority() -> Option<u8> {
    SIM_PRIORITY.with(Cell::get)
}

/// Spawn a thread pinned to a specific core with explicit priority and stack.
///
/// On ESP-IDF, uses `esp_pthread_set_cfg()` to configure core affinity,
/// priority, and stack size before `std::thread::spawn`. The `name` parameter
/// must be a null-terminated string (e.g. `"reset\0"`).
///
/// On non-ESP targets, ignores `core`.  The priority is only recorded for
/// [`current_priority`]; the host scheduler does not see it.
#[cfg(target_os = "espidf")]
pub fn spawn_on_core(
    core: Core,
    priority: u8,
    stack_kb: usize,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> io::Result<JoinHandle<()>> {
    // SAFETY: the config struct is fully initialised by the IDF default
    // constructor and `name` is a 'static NUL-terminated string.
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = core as i32;
        cfg.prio = priority as i32;
        cfg.stack_size = (stack_kb * 1024) as _;
        cfg.thread_name = name.as_ptr() as *const _;
        let ret = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        if ret != esp_idf_sys::ESP_OK as i32 {
            return Err(io::Error::other(format!("esp_pthread_set_cfg failed: {ret}")));
        }
    }

    let display_name = name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        display_name,
        core,
        priority,
        stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .spawn(f)
}

/// Simulation fallback. Ignores core affinity.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_on_core(
    _core: Core,
    priority: u8,
    stack_kb: usize,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> io::Result<JoinHandle<()>> {
    let display_name = name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' (sim, no core pinning, pri={}, stack={}KB)",
        display_name,
        priority,
        stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .stack_size(stack_kb * 1024)
        .spawn(move || {
            SIM_PRIORITY.with(|p| p.set(Some(priority)));
            f();
        })
}
