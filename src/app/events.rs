//! Outcomes of handled gate events.
//!
//! The [`OccupancyService`](super::service::OccupancyService) returns one of
//! these for every event it handles.  The outcome alone decides what the
//! visitor hears and which message the panel shows.

use super::render::Message;
use super::state::Feedback;

/// What happened when a worker acted on its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Entry accepted; count went up by one.
    Admitted,
    /// Entry refused because the room is full.
    Refused,
    /// Exit accepted; count went down by one.
    Departed,
    /// Exit on an empty room.  Nothing is shown or sounded.
    NoOneInside,
    /// Reset; `previous` occupants were cleared.
    Cleared { previous: u32 },
}

impl Outcome {
    pub const fn feedback(self) -> Feedback {
        match self {
            Self::Refused => Feedback::ShortBeep,
            Self::Cleared { .. } => Feedback::DoubleBeep,
            Self::Admitted | Self::Departed | Self::NoOneInside => Feedback::Silent,
        }
    }

    /// Message to render, or `None` when the panel must stay untouched.
    pub const fn message(self) -> Option<Message> {
        match self {
            Self::Admitted => Some(Message::EntryAccepted),
            Self::Refused => Some(Message::Full),
            Self::Departed => Some(Message::ExitAccepted),
            Self::NoOneInside => None,
            Self::Cleared { .. } => Some(Message::Reset),
        }
    }

    /// Count the frame for this outcome must show regardless of what other
    /// workers did since.  A refusal always shows a full room and a reset
    /// always shows an empty one; other outcomes show the live count.
    pub const fn pinned_count(self, capacity: u32) -> Option<u32> {
        match self {
            Self::Refused => Some(capacity),
            Self::Cleared { .. } => Some(0),
            Self::Admitted | Self::Departed | Self::NoOneInside => None,
        }
    }
}
