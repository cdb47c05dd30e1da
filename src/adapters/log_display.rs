//! Log-based display adapter.
//!
//! Implements [`DisplayPort`] by writing each frame to the serial log
//! (UART / USB-CDC in production).  An SSD1306 driver would implement the
//! same trait over I²C.

use log::info;

use crate::app::ports::DisplayPort;
use crate::app::render::Frame;
use crate::error::RenderError;

/// Adapter that logs every [`Frame`] to the serial console.
#[derive(Default)]
pub struct LogDisplay {
    frames: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames shown so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl DisplayPort for LogDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let [title, headline, occupancy, footer] = frame.lines();
        info!("DISPLAY | {} | {} | {} | {}", title, headline, occupancy, footer);
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }
}
