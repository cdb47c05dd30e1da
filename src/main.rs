//! Occupancy Gate Firmware: Main Entry Point
//!
//! Hexagonal architecture with interrupt-driven workers.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Panel<LogDisplay>   BuzzerDriver   button ISRs   uptime_ms    │
//! │  (OutputSink)        (BuzzerPort)   (EventSource)              │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            OccupancyService (pure logic)               │    │
//! │  │  counter · state mapping · feedback · render requests  │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Workers: reset (pri 6) · gate executor with entry/exit (pri 5)│
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::task::block_on;
use log::{error, info};

use occupancy_gate::adapters::log_display::LogDisplay;
use occupancy_gate::adapters::panel::Panel;
use occupancy_gate::app::service::OccupancyService;
use occupancy_gate::config::{SystemConfig, CAPACITY};
use occupancy_gate::drivers::buzzer::BuzzerDriver;
use occupancy_gate::drivers::hw_init;
use occupancy_gate::drivers::status_led::RgbLamp;
use occupancy_gate::runtime;

type GateService = OccupancyService<Panel<LogDisplay>, BuzzerDriver>;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Occupancy Gate v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (build-time, never persisted) ────────
    let config = SystemConfig::from_build_env().inspect_err(|e| {
        error!("Build-time config rejected: {}", e);
    })?;
    info!("Config: {:?}", config);

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().inspect_err(|e| {
        error!("HAL init failed: {}", e);
    })?;

    let panel = Panel::new(LogDisplay::new(), RgbLamp::new());
    let buzzer = BuzzerDriver::new(config.buzzer_duty);

    // The service is shared by the ISRs and both worker threads for the
    // rest of the program.
    let service: &'static GateService =
        Box::leak(Box::new(OccupancyService::new(CAPACITY, config, panel, buzzer)));

    // ── 4. Boot splash ────────────────────────────────────────
    block_on(service.show_welcome());

    // ── 5. Interrupts, then workers ───────────────────────────
    hw_init::init_isr_service(service.events()).inspect_err(|e| {
        error!("ISR service init failed: {}", e);
    })?;

    let workers = runtime::spawn_workers(service).inspect_err(|e| {
        error!("Worker startup failed: {}", e);
    })?;

    info!("System ready. Waiting for visitors.");

    // Workers never return; joining parks the main task for good.
    let _ = workers.reset.join();
    let _ = workers.gate.join();
    error!("Worker threads exited unexpectedly");
    Ok(())
}
