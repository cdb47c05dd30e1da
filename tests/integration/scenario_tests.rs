//! End-to-end scenarios for the edge → doorbell → worker → output pipeline.
//!
//! Each test drives `OccupancyService` directly on the test thread: edges
//! are injected through the event source exactly as the ISR does, and one
//! worker cycle is run with `next()`.

use std::time::Duration;

use futures_lite::future::{block_on, poll_once};

use occupancy_gate::adapters::panel::Panel;
use occupancy_gate::app::events::Outcome;
use occupancy_gate::app::render::{Message, RenderRequest};
use occupancy_gate::app::service::OccupancyService;
use occupancy_gate::app::state::OccupancyState;
use occupancy_gate::config::DebounceMode;
use occupancy_gate::drivers::status_led::RgbLamp;
use occupancy_gate::events::Event;

use crate::mock_hw::{fast_config, BuzzerCall, CallLog, FailingDisplay, MockBuzzer, MockSink};

type Service = OccupancyService<MockSink, MockBuzzer>;

struct Rig {
    svc: Service,
    renders: CallLog<RenderRequest>,
    beeps: CallLog<BuzzerCall>,
    fail: std::sync::Arc<std::sync::atomic::AtomicBool>,
    clock_ms: u32,
}

impl Rig {
    fn new(capacity: u32) -> Self {
        let (sink, renders, fail) = MockSink::new();
        let (buzzer, beeps) = MockBuzzer::new();
        Self {
            svc: OccupancyService::new(capacity, fast_config(), sink, buzzer),
            renders,
            beeps,
            fail,
            clock_ms: 1_000,
        }
    }

    /// Press a button well outside the refractory window and run one cycle
    /// of its worker.
    fn press(&mut self, event: Event) -> Outcome {
        self.clock_ms += 500;
        assert!(self.svc.events().on_edge(event, self.clock_ms));
        block_on(self.svc.next(event))
    }

    fn count(&self) -> u32 {
        self.svc.counter().current()
    }
}

// ── Capacity-8 walkthrough ────────────────────────────────────

#[test]
fn capacity_eight_walkthrough() {
    let mut rig = Rig::new(8);

    for n in 1..=8 {
        assert_eq!(rig.press(Event::Entry), Outcome::Admitted);
        assert_eq!(rig.count(), n);
    }
    let last = rig.renders.last().unwrap();
    assert_eq!(last.state, OccupancyState::Full);
    assert_eq!(last.message, Message::EntryAccepted);
    assert!(rig.beeps.all().is_empty(), "accepted entries are silent");

    // One more entry is refused with a short beep.
    assert_eq!(rig.press(Event::Entry), Outcome::Refused);
    assert_eq!(rig.count(), 8);
    assert_eq!(
        rig.beeps.all(),
        vec![BuzzerCall::Sound(Duration::from_millis(1)), BuzzerCall::Silence]
    );
    let last = rig.renders.last().unwrap();
    assert_eq!(last.message, Message::Full);
    assert_eq!(last.state, OccupancyState::Full);

    // One exit drops to near-full.
    assert_eq!(rig.press(Event::Exit), Outcome::Departed);
    assert_eq!(rig.count(), 7);
    assert_eq!(rig.renders.last().unwrap().state, OccupancyState::NearFull);

    // Reset clears everyone with a double beep.
    rig.beeps.clear();
    assert_eq!(rig.press(Event::Reset), Outcome::Cleared { previous: 7 });
    assert_eq!(rig.count(), 0);
    assert_eq!(
        rig.beeps.all(),
        vec![
            BuzzerCall::Sound(Duration::from_millis(2)),
            BuzzerCall::Silence,
            BuzzerCall::Sound(Duration::from_millis(2)),
            BuzzerCall::Silence,
        ]
    );
    let last = rig.renders.last().unwrap();
    assert_eq!(last.state, OccupancyState::Empty);
    assert_eq!(last.message, Message::Reset);
}

// ── Exit on empty ─────────────────────────────────────────────

#[test]
fn exit_on_empty_room_is_invisible() {
    let mut rig = Rig::new(8);
    assert_eq!(rig.press(Event::Exit), Outcome::NoOneInside);
    assert_eq!(rig.count(), 0);
    assert_eq!(rig.renders.len(), 0);
    assert!(rig.beeps.all().is_empty());
}

#[test]
fn reset_on_empty_room_still_beeps_and_renders() {
    let mut rig = Rig::new(8);
    assert_eq!(rig.press(Event::Reset), Outcome::Cleared { previous: 0 });
    assert_eq!(rig.beeps.len(), 4);
    assert_eq!(rig.renders.last().unwrap().message, Message::Reset);
}

// ── Render failures ───────────────────────────────────────────

#[test]
fn render_failure_does_not_stop_the_worker() {
    let mut rig = Rig::new(8);
    rig.fail.store(true, std::sync::atomic::Ordering::SeqCst);
    assert_eq!(rig.press(Event::Entry), Outcome::Admitted);
    assert_eq!(rig.press(Event::Entry), Outcome::Admitted);
    assert_eq!(rig.count(), 2);

    rig.fail.store(false, std::sync::atomic::Ordering::SeqCst);
    assert_eq!(rig.press(Event::Exit), Outcome::Departed);
    assert_eq!(rig.renders.len(), 3);
    assert_eq!(rig.renders.last().unwrap().count, 1);
}

#[test]
fn failing_display_keeps_the_counter_consistent() {
    let (buzzer, _) = MockBuzzer::new();
    let panel = Panel::new(FailingDisplay, RgbLamp::new());
    let svc = OccupancyService::new(2, fast_config(), panel, buzzer);
    assert_eq!(block_on(svc.handle(Event::Entry)), Outcome::Admitted);
    assert_eq!(block_on(svc.handle(Event::Entry)), Outcome::Admitted);
    assert_eq!(block_on(svc.handle(Event::Entry)), Outcome::Refused);
    assert_eq!(svc.counter().current(), 2);
}

// ── Doorbells and debounce ────────────────────────────────────

#[test]
fn worker_waits_for_its_doorbell() {
    let rig = Rig::new(8);
    block_on(async {
        assert!(poll_once(rig.svc.next(Event::Entry)).await.is_none());
    });
    assert_eq!(rig.count(), 0);
}

#[test]
fn pending_rings_coalesce_into_one_cycle() {
    let rig = Rig::new(8);
    let events = rig.svc.events();
    assert!(events.on_edge(Event::Entry, 1_000));
    assert!(events.on_edge(Event::Entry, 1_300));
    assert!(events.on_edge(Event::Entry, 1_600));

    assert_eq!(block_on(rig.svc.next(Event::Entry)), Outcome::Admitted);
    block_on(async {
        assert!(poll_once(rig.svc.next(Event::Entry)).await.is_none());
    });
    assert_eq!(rig.count(), 1);
}

#[test]
fn global_window_swallows_a_second_button() {
    let rig = Rig::new(8);
    let events = rig.svc.events();
    assert_eq!(events.debounce_mode(), DebounceMode::Global);
    assert!(events.on_edge(Event::Entry, 1_000));
    assert!(!events.on_edge(Event::Exit, 1_100));
    assert!(!events.doorbell(Event::Exit).is_pending());
}

#[test]
fn per_source_window_lets_other_buttons_through() {
    let (sink, renders, _) = MockSink::new();
    let (buzzer, _) = MockBuzzer::new();
    let config = occupancy_gate::config::SystemConfig {
        debounce_mode: DebounceMode::PerSource,
        ..fast_config()
    };
    let svc = OccupancyService::new(8, config, sink, buzzer);
    assert!(svc.events().on_edge(Event::Entry, 1_000));
    assert!(svc.events().on_edge(Event::Exit, 1_050));
    assert_eq!(block_on(svc.next(Event::Entry)), Outcome::Admitted);
    assert_eq!(block_on(svc.next(Event::Exit)), Outcome::Departed);
    assert_eq!(renders.len(), 2);
}

// ── Boot splash and snapshots ─────────────────────────────────

#[test]
fn welcome_splash_shows_empty_room() {
    let rig = Rig::new(10);
    block_on(rig.svc.show_welcome());
    let req = rig.renders.last().unwrap();
    assert_eq!(req.message, Message::Welcome);
    assert_eq!(req.state, OccupancyState::Empty);
    assert_eq!((req.count, req.capacity), (0, 10));
}

#[test]
fn render_shows_the_count_at_render_time() {
    let rig = Rig::new(10);
    // Counter moves before the worker gets to render.
    rig.svc.counter().try_acquire();
    rig.svc.counter().try_acquire();
    assert_eq!(block_on(rig.svc.handle(Event::Entry)), Outcome::Admitted);
    assert_eq!(rig.renders.last().unwrap().count, 3);
}
