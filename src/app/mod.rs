//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules of the occupancy gate: the
//! bounded counter, the state mapping, frame composition, and the worker
//! loops.  All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod counter;
pub mod events;
pub mod feedback;
pub mod ports;
pub mod render;
pub mod service;
pub mod state;
