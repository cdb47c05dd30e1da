//! Bounded occupancy counter.
//!
//! A single `AtomicU32` guarded by compare-and-swap.  Every operation is
//! one indivisible read-modify-write, so the value observed by any reader
//! is always in `[0, capacity]` and the check-then-increment of an entry
//! cannot overshoot the capacity even with both cores racing.
//!
//! None of the operations block, so the counter is safe to touch from any
//! task while another task holds the display or buzzer lock.

use core::sync::atomic::{AtomicU32, Ordering};

/// Counted resource with a fixed upper bound.
#[derive(Debug)]
pub struct OccupancyCounter {
    count: AtomicU32,
    capacity: u32,
}

impl OccupancyCounter {
    /// Empty counter.  Panics at compile time (in const context) or at
    /// startup if `capacity` is zero.
    pub const fn new(capacity: u32) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            count: AtomicU32::new(0),
            capacity,
        }
    }

    /// Admit one occupant if there is room.
    pub fn try_acquire(&self) -> bool {
        let cap = self.capacity;
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < cap).then_some(n + 1)
            })
            .is_ok()
    }

    /// Let one occupant leave.  No-op returning `false` on an empty room.
    pub fn release(&self) -> bool {
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Set the count to zero in one step; returns how many were inside.
    pub fn drain_to_zero(&self) -> u32 {
        self.count.swap(0, Ordering::AcqRel)
    }

    pub fn current(&self) -> u32 {
        self.count.load(Ordering::Acquire)
    }

    pub const fn capacity(&self) -> u32 {
        self.capacity
    }
}
