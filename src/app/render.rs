//! Render requests and text frame composition.
//!
//! A [`RenderRequest`] is what the workers hand to the output sink.  The
//! sink turns it into a four-line [`Frame`] with [`Frame::compose`], which
//! is pure and allocation-free so it can be unit-tested on the host.
//!
//! ```text
//!  ┌──────────────────────┐
//!  │ Library              │  title
//!  │ Entry OK!            │  headline
//!  │ Occupants: 3/10      │  occupancy
//!  │ Welcome!             │  footer
//!  └──────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;

use super::counter::OccupancyCounter;
use super::state::OccupancyState;
use crate::config::SITE_TITLE;

/// Capacity of the occupancy line, enough for `Occupants: 4294967295/4294967295`.
pub const OCCUPANCY_LINE_LEN: usize = 40;

/// Tagged message variant carried by every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Boot splash with the button legend.
    Welcome,
    EntryAccepted,
    /// Entry refused.
    Full,
    ExitAccepted,
    Reset,
}

impl Message {
    const fn headline(self) -> &'static str {
        match self {
            Self::Welcome => "Waiting for visitors",
            Self::EntryAccepted => "Entry OK!",
            Self::Full => "Room is full!",
            Self::ExitAccepted => "Exit OK!",
            Self::Reset => "RESET",
        }
    }

    const fn footer(self) -> &'static str {
        match self {
            Self::Welcome => "A+  B-  JOY=RESET",
            Self::EntryAccepted => "Welcome!",
            Self::Full => "Wait for exits",
            Self::ExitAccepted => "Come back soon!",
            Self::Reset => "Waiting...",
        }
    }
}

/// Everything the output sink needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub state: OccupancyState,
    pub count: u32,
    pub capacity: u32,
    pub message: Message,
}

impl RenderRequest {
    pub const fn new(count: u32, capacity: u32, message: Message) -> Self {
        Self {
            state: OccupancyState::of(count, capacity),
            count,
            capacity,
            message,
        }
    }

    /// Request reflecting the counter as it is right now.
    pub fn snapshot(counter: &OccupancyCounter, message: Message) -> Self {
        Self::new(counter.current(), counter.capacity(), message)
    }
}

/// Four-line text frame ready for a character display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: &'static str,
    pub headline: &'static str,
    pub occupancy: String<OCCUPANCY_LINE_LEN>,
    pub footer: &'static str,
}

impl Frame {
    pub fn compose(req: &RenderRequest) -> Self {
        let mut occupancy = String::new();
        // Cannot overflow: the buffer fits two full-width u32 values.
        let _ = write!(occupancy, "Occupants: {}/{}", req.count, req.capacity);
        Self {
            title: SITE_TITLE,
            headline: req.message.headline(),
            occupancy,
            footer: req.message.footer(),
        }
    }

    pub fn lines(&self) -> [&str; 4] {
        [self.title, self.headline, self.occupancy.as_str(), self.footer]
    }
}
