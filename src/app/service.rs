//! Application service: the hexagonal core.
//!
//! [`OccupancyService`] owns the counter, the debounced event source, and
//! the locks around the two output ports.  It exposes one worker loop per
//! event kind; the runtime decides which thread and priority each loop runs
//! on.
//!
//! ```text
//!   ISR ──▶ EventSource ──doorbell──▶ ┌──────────────────────┐ ──▶ OutputSink
//!                                     │   OccupancyService   │
//!                                     │  counter · feedback  │ ──▶ BuzzerPort
//!                                     └──────────────────────┘
//! ```
//!
//! ## Locking
//!
//! The counter operation completes before any lock is taken.  Feedback
//! holds only the buzzer lock; rendering holds only the sink lock.  No task
//! ever holds two of them at once.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::events::{Event, EventSource};

use super::counter::OccupancyCounter;
use super::events::Outcome;
use super::feedback;
use super::ports::{BuzzerPort, OutputSink};
use super::render::{Message, RenderRequest};

// ───────────────────────────────────────────────────────────────
// OccupancyService
// ───────────────────────────────────────────────────────────────

/// Shared state of the gate.  Lives for the whole program (`&'static`)
/// and is touched concurrently by the ISRs and every worker.
pub struct OccupancyService<S, B> {
    counter: OccupancyCounter,
    events: EventSource,
    sink: Mutex<CriticalSectionRawMutex, S>,
    buzzer: Mutex<CriticalSectionRawMutex, B>,
    config: SystemConfig,
}

impl<S: OutputSink, B: BuzzerPort> OccupancyService<S, B> {
    /// Empty room.  `config` is expected to be validated already.
    pub fn new(capacity: u32, config: SystemConfig, sink: S, buzzer: B) -> Self {
        Self {
            counter: OccupancyCounter::new(capacity),
            events: EventSource::new(config.debounce_mode, config.refractory_ms),
            sink: Mutex::new(sink),
            buzzer: Mutex::new(buzzer),
            config,
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn counter(&self) -> &OccupancyCounter {
        &self.counter
    }

    /// The ISR-facing half of the service.
    pub fn events(&self) -> &EventSource {
        &self.events
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Render the boot splash.
    pub async fn show_welcome(&self) {
        info!(
            "Gate ready: capacity={}, debounce={:?} {}ms",
            self.counter.capacity(),
            self.config.debounce_mode,
            self.config.refractory_ms
        );
        self.render(Message::Welcome, None).await;
    }

    // ── Event handling ────────────────────────────────────────

    /// Apply one logical event: counter step, then feedback, then render.
    pub async fn handle(&self, event: Event) -> Outcome {
        let outcome = self.apply(event);
        feedback::play(&self.buzzer, outcome.feedback(), &self.config).await;
        if let Some(message) = outcome.message() {
            let pinned = outcome.pinned_count(self.counter.capacity());
            self.render(message, pinned).await;
        }
        outcome
    }

    /// Wait for the doorbell of `event`, then handle it.
    pub async fn next(&self, event: Event) -> Outcome {
        self.events.doorbell(event).wait().await;
        self.handle(event).await
    }

    /// Worker loop for one event kind.  Never returns.
    ///
    /// After each cycle the worker cools down; rings that arrive meanwhile
    /// stay pending on the doorbell and are served on the next cycle.
    pub async fn run(&self, event: Event) {
        info!("{} | worker started", tag(event));
        loop {
            self.next(event).await;
            feedback::sleep(self.config.cooldown()).await;
        }
    }

    fn apply(&self, event: Event) -> Outcome {
        let capacity = self.counter.capacity();
        match event {
            Event::Entry => {
                if self.counter.try_acquire() {
                    info!("ENTRY | admitted ({}/{})", self.counter.current(), capacity);
                    Outcome::Admitted
                } else {
                    warn!("ENTRY | refused, room full ({capacity}/{capacity})");
                    Outcome::Refused
                }
            }
            Event::Exit => {
                if self.counter.release() {
                    info!("EXIT | departed ({}/{})", self.counter.current(), capacity);
                    Outcome::Departed
                } else {
                    debug!("EXIT | ignored, room already empty");
                    Outcome::NoOneInside
                }
            }
            Event::Reset => {
                let previous = self.counter.drain_to_zero();
                info!("RESET | cleared {previous} occupant(s)");
                Outcome::Cleared { previous }
            }
        }
    }

    /// Render under the sink lock.  Unless the outcome pins the count, it is
    /// read inside the lock so the frame shows the latest value even if
    /// another worker changed it while this one was beeping.
    async fn render(&self, message: Message, pinned: Option<u32>) {
        let mut sink = self.sink.lock().await;
        let req = match pinned {
            Some(count) => RenderRequest::new(count, self.counter.capacity(), message),
            None => RenderRequest::snapshot(&self.counter, message),
        };
        if let Err(e) = sink.render(&req) {
            warn!("DISPLAY | render of {message:?} failed: {e}");
        }
    }
}

fn tag(event: Event) -> &'static str {
    match event {
        Event::Entry => "ENTRY",
        Event::Exit => "EXIT",
        Event::Reset => "RESET",
    }
}
