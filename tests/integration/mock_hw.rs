//! Mock output adapters for integration tests.
//!
//! Records every sink and buzzer call so tests can assert on the full
//! history without touching real GPIO/PWM registers.  The service owns its
//! ports, so each mock hands out a cloneable handle to its log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use occupancy_gate::app::ports::{BuzzerPort, DisplayPort, OutputSink};
use occupancy_gate::app::render::{Frame, RenderRequest};
use occupancy_gate::config::SystemConfig;
use occupancy_gate::error::RenderError;

// ── Shared call log ───────────────────────────────────────────

pub struct CallLog<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

#[allow(dead_code)]
impl<T: Clone> CallLog<T> {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn push(&self, item: T) {
        self.0.lock().unwrap().push(item);
    }

    pub fn all(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<T> {
        self.0.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

// ── MockSink ──────────────────────────────────────────────────

pub struct MockSink {
    renders: CallLog<RenderRequest>,
    fail: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSink {
    pub fn new() -> (Self, CallLog<RenderRequest>, Arc<AtomicBool>) {
        let renders = CallLog::new();
        let fail = Arc::new(AtomicBool::new(false));
        let sink = Self {
            renders: renders.clone(),
            fail: Arc::clone(&fail),
        };
        (sink, renders, fail)
    }
}

impl OutputSink for MockSink {
    fn render(&mut self, req: &RenderRequest) -> Result<(), RenderError> {
        self.renders.push(*req);
        if self.fail.load(Ordering::SeqCst) {
            Err(RenderError::Nack)
        } else {
            Ok(())
        }
    }
}

// ── MockBuzzer ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerCall {
    Sound(Duration),
    Silence,
}

pub struct MockBuzzer {
    calls: CallLog<BuzzerCall>,
}

impl MockBuzzer {
    pub fn new() -> (Self, CallLog<BuzzerCall>) {
        let calls = CallLog::new();
        (Self { calls: calls.clone() }, calls)
    }
}

impl BuzzerPort for MockBuzzer {
    fn sound(&mut self, duration: Duration) {
        self.calls.push(BuzzerCall::Sound(duration));
    }

    fn silence(&mut self) {
        self.calls.push(BuzzerCall::Silence);
    }
}

// ── Displays ──────────────────────────────────────────────────

/// Display that never acknowledges a frame.
pub struct FailingDisplay;

impl DisplayPort for FailingDisplay {
    fn show(&mut self, _frame: &Frame) -> Result<(), RenderError> {
        Err(RenderError::Nack)
    }
}

// ── Config ────────────────────────────────────────────────────

/// Millisecond beeps and no cooldown keep the tests fast.
pub fn fast_config() -> SystemConfig {
    SystemConfig {
        short_beep_ms: 1,
        long_beep_ms: 2,
        inter_beep_pause_ms: 1,
        cooldown_ms: 0,
        ..SystemConfig::default()
    }
}
