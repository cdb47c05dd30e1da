//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements   | Connects to                 |
//! |---------------|--------------|-----------------------------|
//! | `panel`       | OutputSink   | DisplayPort + RGB lamp      |
//! | `log_display` | DisplayPort  | Serial log output           |
//! | `time`        |:            | ESP32 system timer          |

pub mod log_display;
pub mod panel;
pub mod time;
