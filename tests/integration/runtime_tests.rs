//! Threaded runtime tests: real worker threads, edges injected as the ISRs
//! would inject them.

use std::time::{Duration, Instant};

use occupancy_gate::app::ports::OutputSink;
use occupancy_gate::app::render::{Message, RenderRequest};
use occupancy_gate::app::service::OccupancyService;
use occupancy_gate::app::state::OccupancyState;
use occupancy_gate::drivers::task_pin::current_priority;
use occupancy_gate::error::RenderError;
use occupancy_gate::events::Event;
use occupancy_gate::runtime::{spawn_workers, GATE_TASK_PRIORITY, RESET_TASK_PRIORITY};

use crate::mock_hw::{fast_config, BuzzerCall, CallLog, MockBuzzer, MockSink};

type Service = OccupancyService<MockSink, MockBuzzer>;

fn start(capacity: u32) -> (&'static Service, CallLog<RenderRequest>, CallLog<BuzzerCall>) {
    let (sink, renders, _) = MockSink::new();
    let (buzzer, beeps) = MockBuzzer::new();
    let svc: &'static Service =
        Box::leak(Box::new(OccupancyService::new(capacity, fast_config(), sink, buzzer)));
    spawn_workers(svc).expect("workers start");
    (svc, renders, beeps)
}

fn wait_for(what: &str, mut cond: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !cond() {
        assert!(Instant::now() < deadline, "timed out waiting for {what}");
        std::thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn workers_serve_entries_and_reset() {
    let (svc, renders, beeps) = start(3);
    let mut now_ms = 1_000;

    for n in 1..=3 {
        now_ms += 300;
        assert!(svc.events().on_edge(Event::Entry, now_ms));
        wait_for("entry render", || renders.len() == n as usize);
        assert_eq!(svc.counter().current(), n);
    }
    assert_eq!(renders.last().unwrap().state, OccupancyState::Full);

    now_ms += 300;
    assert!(svc.events().on_edge(Event::Entry, now_ms));
    wait_for("refusal render", || renders.len() == 4);
    assert_eq!(renders.last().unwrap().message, Message::Full);
    assert_eq!(svc.counter().current(), 3);

    now_ms += 300;
    assert!(svc.events().on_edge(Event::Reset, now_ms));
    wait_for("reset render", || renders.len() == 5);
    assert_eq!(svc.counter().current(), 0);
    assert_eq!(renders.last().unwrap().message, Message::Reset);
    // short beep + double beep, each tone followed by silence
    assert_eq!(beeps.len(), 6);
}

#[test]
fn exit_worker_runs_alongside_entry_worker() {
    let (svc, renders, _) = start(5);

    assert!(svc.events().on_edge(Event::Entry, 1_000));
    wait_for("entry", || svc.counter().current() == 1);

    assert!(svc.events().on_edge(Event::Exit, 1_300));
    wait_for("exit render", || renders.len() == 2);
    let last = renders.last().unwrap();
    assert_eq!(last.message, Message::ExitAccepted);
    assert_eq!(last.state, OccupancyState::Empty);
}

/// Records which task priority each frame was rendered from.
struct PrioritySink(CallLog<(Message, Option<u8>)>);

impl OutputSink for PrioritySink {
    fn render(&mut self, req: &RenderRequest) -> Result<(), RenderError> {
        self.0.push((req.message, current_priority()));
        Ok(())
    }
}

#[test]
fn reset_runs_above_entry_and_exit() {
    let seen = CallLog::new();
    let (buzzer, _) = MockBuzzer::new();
    let svc: &'static OccupancyService<PrioritySink, MockBuzzer> = Box::leak(Box::new(
        OccupancyService::new(5, fast_config(), PrioritySink(seen.clone()), buzzer),
    ));
    spawn_workers(svc).expect("workers start");

    assert!(svc.events().on_edge(Event::Entry, 1_000));
    wait_for("entry render", || seen.len() == 1);
    assert!(svc.events().on_edge(Event::Exit, 1_300));
    wait_for("exit render", || seen.len() == 2);
    assert!(svc.events().on_edge(Event::Reset, 1_600));
    wait_for("reset render", || seen.len() == 3);

    assert_eq!(
        seen.all(),
        vec![
            (Message::EntryAccepted, Some(GATE_TASK_PRIORITY)),
            (Message::ExitAccepted, Some(GATE_TASK_PRIORITY)),
            (Message::Reset, Some(RESET_TASK_PRIORITY)),
        ]
    );
}
