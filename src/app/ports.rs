//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OccupancyService (domain)
//! ```
//!
//! Driven adapters (panel, buzzer) implement these traits.  The
//! [`OccupancyService`](super::service::OccupancyService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! All three ports are synchronous and bounded.  The service serialises
//! access to each one behind its own lock; implementations need no internal
//! synchronisation.

use core::time::Duration;

use super::render::{Frame, RenderRequest};
use crate::error::RenderError;

// ───────────────────────────────────────────────────────────────
// Output sink (domain → display + lamp)
// ───────────────────────────────────────────────────────────────

/// Consumes one render request and updates every visible output.
///
/// A failure is transient: the caller logs it and moves on, and the old
/// content stays visible until the next successful render.
pub trait OutputSink {
    fn render(&mut self, req: &RenderRequest) -> Result<(), RenderError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (output sink → character display)
// ───────────────────────────────────────────────────────────────

/// Transmits a composed frame to a physical or simulated display.
pub trait DisplayPort {
    fn show(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

// ───────────────────────────────────────────────────────────────
// Buzzer port (domain → piezo)
// ───────────────────────────────────────────────────────────────

/// Tone output.  A beep is `sound`, a cooperative sleep, then `silence`;
/// the sleep is the caller's job so the driver never blocks.
pub trait BuzzerPort {
    /// Start the tone.  `duration` is advisory and lets recording or
    /// self-timed drivers know how long the tone is meant to last.
    fn sound(&mut self, duration: Duration);

    fn silence(&mut self);
}
