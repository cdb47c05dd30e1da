//! ISR-side debouncing for the three gate buttons.
//!
//! ## Hardware
//!
//! Active-low momentary switches with pull-ups.  Each GPIO fires on the
//! falling edge; the ISR stamps the edge with milliseconds since boot and
//! asks the [`Debouncer`] whether it is far enough from the last accepted
//! edge.
//!
//! ## Windows
//!
//! | Mode        | Clock slots | Effect of an accepted press             |
//! |-------------|-------------|-----------------------------------------|
//! | `Global`    | 1 (shared)  | suppresses every button for the window  |
//! | `PerSource` | 3           | suppresses only the same button         |
//!
//! The check is a compare-and-swap on an `AtomicU32`, so it is bounded,
//! lock-free, and safe to call from interrupt context on either core.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::DebounceMode;
use crate::events::Event;

/// Refractory-window filter for raw button edges.
pub struct Debouncer {
    mode: DebounceMode,
    refractory_ms: u32,
    /// Last accepted edge per clock slot (ms since boot, wrapping).
    /// Slot 0 doubles as the shared clock in `Global` mode.
    last_accepted_ms: [AtomicU32; Event::COUNT],
}

impl Debouncer {
    pub const fn new(mode: DebounceMode, refractory_ms: u32) -> Self {
        Self {
            mode,
            refractory_ms,
            last_accepted_ms: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
        }
    }

    pub fn mode(&self) -> DebounceMode {
        self.mode
    }

    /// Decide whether an edge from `source` at `now_ms` becomes a logical
    /// event.  Accepting records `now_ms` as the new reference point.
    ///
    /// An edge is accepted only when strictly more than the refractory
    /// period has elapsed since the last accepted edge on the same clock.
    pub fn accept(&self, source: Event, now_ms: u32) -> bool {
        let slot = match self.mode {
            DebounceMode::Global => &self.last_accepted_ms[0],
            DebounceMode::PerSource => &self.last_accepted_ms[source.index()],
        };

        let mut last = slot.load(Ordering::Acquire);
        loop {
            if now_ms.wrapping_sub(last) <= self.refractory_ms {
                return false;
            }
            match slot.compare_exchange_weak(last, now_ms, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => return true,
                // Another core accepted an edge in between; re-check against it.
                Err(actual) => last = actual,
            }
        }
    }
}
