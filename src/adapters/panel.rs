//! Panel adapter: the concrete output sink.
//!
//! Implements [`OutputSink`] by composing a [`Frame`], handing it to a
//! [`DisplayPort`], and driving the RGB lamp from the occupancy state.
//!
//! The lamp is updated even when the display transfer fails, so the
//! colour always matches the count.

use crate::app::ports::{DisplayPort, OutputSink};
use crate::app::render::{Frame, RenderRequest};
use crate::drivers::status_led::RgbLamp;
use crate::error::RenderError;

pub struct Panel<D> {
    display: D,
    lamp: RgbLamp,
}

impl<D: DisplayPort> Panel<D> {
    pub fn new(display: D, lamp: RgbLamp) -> Self {
        Self { display, lamp }
    }

    pub fn lamp(&self) -> &RgbLamp {
        &self.lamp
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

impl<D: DisplayPort> OutputSink for Panel<D> {
    fn render(&mut self, req: &RenderRequest) -> Result<(), RenderError> {
        let frame = Frame::compose(req);
        let shown = self.display.show(&frame);
        self.lamp.set(req.state.lamp());
        shown
    }
}
