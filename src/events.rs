//! Interrupt-driven event hand-off.
//!
//! Button edges arrive in interrupt context.  Each accepted edge rings a
//! single-slot doorbell owned by the worker that handles that event.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Entry ISR   │────▶│              │────▶│ entry bell ──▶│ Entry task
//! │ Exit ISR    │────▶│  Debouncer   │────▶│ exit bell  ──▶│ Exit task
//! │ Reset ISR   │────▶│  (lock-free) │────▶│ reset bell ──▶│ Reset task
//! └─────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! A doorbell coalesces: ringing it while a ring is still pending is a
//! no-op, so a burst of accepted edges wakes the worker at most once.
//!
//! On ESP-IDF the `critical-section` implementation is a FreeRTOS mutex,
//! which must not be taken from an ISR.  The doorbells therefore lock with
//! an interrupt-masking raw mutex on the device.

#[cfg(not(target_os = "espidf"))]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::config::DebounceMode;
use crate::drivers::button::Debouncer;

/// Logical events, one per physical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    /// One person enters.
    Entry = 0,
    /// One person leaves.
    Exit = 1,
    /// The room is cleared.
    Reset = 2,
}

impl Event {
    pub const COUNT: usize = 3;
    pub const ALL: [Event; Event::COUNT] = [Event::Entry, Event::Exit, Event::Reset];

    pub const fn index(self) -> usize {
        self as usize
    }
}

// ── Doorbell ──────────────────────────────────────────────────

/// Raw mutex guarding a doorbell: safe to take from interrupt context.
#[cfg(target_os = "espidf")]
pub type IsrMutex = esp_idf_svc::hal::interrupt::embassy_sync::IsrRawMutex;
#[cfg(not(target_os = "espidf"))]
pub type IsrMutex = CriticalSectionRawMutex;

/// One-shot, coalescing wake-up signal.
///
/// `ring` never blocks and may be called from interrupt context;
/// `wait` suspends the calling task until the bell has been rung and
/// consumes the ring.
pub struct Doorbell {
    signal: Signal<IsrMutex, ()>,
}

impl Doorbell {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    pub fn ring(&self) {
        self.signal.signal(());
    }

    pub async fn wait(&self) {
        self.signal.wait().await;
    }

    /// Whether a ring is waiting to be consumed.
    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }
}

impl Default for Doorbell {
    fn default() -> Self {
        Self::new()
    }
}

// ── Event source ──────────────────────────────────────────────

/// Debounced event source: the only object the ISRs touch.
pub struct EventSource {
    debouncer: Debouncer,
    bells: [Doorbell; Event::COUNT],
}

impl EventSource {
    pub const fn new(mode: DebounceMode, refractory_ms: u32) -> Self {
        Self {
            debouncer: Debouncer::new(mode, refractory_ms),
            bells: [Doorbell::new(), Doorbell::new(), Doorbell::new()],
        }
    }

    /// Feed one raw edge.  Safe to call from interrupt context: bounded,
    /// no blocking, no device I/O.  Returns `true` if the edge was
    /// accepted and the matching doorbell rung.
    pub fn on_edge(&self, source: Event, now_ms: u32) -> bool {
        if !self.debouncer.accept(source, now_ms) {
            return false;
        }
        self.bells[source.index()].ring();
        true
    }

    pub fn doorbell(&self, event: Event) -> &Doorbell {
        &self.bells[event.index()]
    }

    pub fn debounce_mode(&self) -> DebounceMode {
        self.debouncer.mode()
    }
}
