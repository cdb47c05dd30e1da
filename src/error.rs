//! Unified error types for the occupancy gate firmware.
//!
//! `Error` covers config and worker startup failures; peripheral bring-up
//! reports through `drivers::hw_init::HwInitError`.  All variants are `Copy`
//! so they can be passed around without allocation.
//!
//! Counter boundary conditions (entry at capacity, exit on an empty room)
//! are *not* errors; they are boolean outcomes of the counter operations.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Fatal startup errors raised by the firmware itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// A worker task could not be created.
    Spawn(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Spawn(task) => write!(f, "spawn: could not start task '{task}'"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Transient display transmission failures.  Logged and ignored by the
/// workers; the panel keeps its previous content until the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The display did not acknowledge the frame on the bus.
    Nack,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nack => write!(f, "display NACK"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
