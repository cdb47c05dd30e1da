//! RGB status lamp driver.
//!
//! Three discrete LEDs (active HIGH) on plain GPIO outputs.  Mixed colours
//! are produced by lighting more than one LED; yellow is red + green.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the three GPIOs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::state::Lamp;
use crate::drivers::hw_init;
use crate::pins;

pub struct RgbLamp {
    current: Lamp,
}

impl RgbLamp {
    pub fn new() -> Self {
        let mut lamp = Self { current: Lamp::OFF };
        lamp.set(Lamp::OFF);
        lamp
    }

    pub fn set(&mut self, lamp: Lamp) {
        hw_init::gpio_write(pins::LED_RED_GPIO, lamp.red);
        hw_init::gpio_write(pins::LED_GREEN_GPIO, lamp.green);
        hw_init::gpio_write(pins::LED_BLUE_GPIO, lamp.blue);
        self.current = lamp;
    }

    pub fn current(&self) -> Lamp {
        self.current
    }
}

impl Default for RgbLamp {
    fn default() -> Self {
        Self::new()
    }
}
