//! Worker threads and their executors.
//!
//! ```text
//!  ┌──────────── App core (1) ─────────────┐
//!  │  "reset" thread   pri 6               │
//!  │    block_on(run(Reset))               │
//!  │                                       │
//!  │  "gate" thread    pri 5               │
//!  │    LocalExecutor                      │
//!  │      ├─ run(Entry)                    │
//!  │      └─ run(Exit)                     │
//!  └───────────────────────────────────────┘
//! ```
//!
//! Reset gets its own FreeRTOS task one priority level above the gate
//! task, so a reset preempts entry/exit handling.  Entry and Exit share a
//! single-threaded executor whose run queue is FIFO in wake order, which
//! serves them in the order their doorbells were rung.

use std::thread::JoinHandle;

use edge_executor::LocalExecutor;
use log::{error, info};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::task::block_on;
#[cfg(not(target_os = "espidf"))]
use futures_lite::future::block_on;

use crate::app::ports::{BuzzerPort, OutputSink};
use crate::app::service::OccupancyService;
use crate::drivers::task_pin::{current_priority, spawn_on_core, Core};
use crate::error::{Error, Result};
use crate::events::Event;

pub const RESET_TASK_PRIORITY: u8 = 6;
pub const GATE_TASK_PRIORITY: u8 = 5;

const _: () = assert!(RESET_TASK_PRIORITY > GATE_TASK_PRIORITY);

const WORKER_STACK_KB: usize = 8;

/// Join handles of the running workers.  The workers never exit.
pub struct Workers {
    pub reset: JoinHandle<()>,
    pub gate: JoinHandle<()>,
}

/// Start the reset and gate threads.  Failure to create either is fatal.
pub fn spawn_workers<S, B>(service: &'static OccupancyService<S, B>) -> Result<Workers>
where
    S: OutputSink + Send + 'static,
    B: BuzzerPort + Send + 'static,
{
    let reset = spawn_on_core(
        Core::App,
        RESET_TASK_PRIORITY,
        WORKER_STACK_KB,
        "reset\0",
        move || {
            info!("reset thread up (pri={:?})", current_priority());
            block_on(service.run(Event::Reset));
        },
    )
    .map_err(|e| {
        error!("reset worker: {e}");
        Error::Spawn("reset")
    })?;

    let gate = spawn_on_core(
        Core::App,
        GATE_TASK_PRIORITY,
        WORKER_STACK_KB,
        "gate\0",
        move || run_gate(service),
    )
    .map_err(|e| {
        error!("gate worker: {e}");
        Error::Spawn("gate")
    })?;

    Ok(Workers { reset, gate })
}

fn run_gate<S: OutputSink, B: BuzzerPort>(service: &'static OccupancyService<S, B>) {
    info!("gate thread up (pri={:?})", current_priority());
    let executor: LocalExecutor<'_, 4> = LocalExecutor::new();
    executor.spawn(service.run(Event::Entry)).detach();
    executor.spawn(service.run(Event::Exit)).detach();
    block_on(executor.run(core::future::pending::<()>()));
}
