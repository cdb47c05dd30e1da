//! Occupancy state mapping and the feedback each state calls for.
//!
//! Everything here is a pure function of `(count, capacity)`.  The state is
//! recomputed on every render and never stored.
//!
//! | count            | state      | lamp          |
//! |------------------|------------|---------------|
//! | 0                | `Empty`    | blue          |
//! | 1 ..= cap-2      | `Normal`   | green         |
//! | cap-1            | `NearFull` | green + red   |
//! | cap              | `Full`     | red           |

/// Coarse occupancy level shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyState {
    Empty,
    Normal,
    NearFull,
    Full,
}

impl OccupancyState {
    /// Map a count to its state.  Counts above the capacity cannot occur
    /// but map to `Full`.
    ///
    /// With a capacity of 1 the single admitted occupant is `Full`, never
    /// `NearFull`.
    pub const fn of(count: u32, capacity: u32) -> Self {
        if count == 0 {
            Self::Empty
        } else if count >= capacity {
            Self::Full
        } else if count == capacity - 1 {
            Self::NearFull
        } else {
            Self::Normal
        }
    }

    pub const fn lamp(self) -> Lamp {
        match self {
            Self::Empty => Lamp::BLUE,
            Self::Normal => Lamp::GREEN,
            Self::NearFull => Lamp::YELLOW,
            Self::Full => Lamp::RED,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Normal => "normal",
            Self::NearFull => "near-full",
            Self::Full => "full",
        }
    }
}

/// On/off state of the three discrete status LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lamp {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Lamp {
    pub const OFF: Self = Self::rgb(false, false, false);
    pub const RED: Self = Self::rgb(true, false, false);
    pub const GREEN: Self = Self::rgb(false, true, false);
    pub const BLUE: Self = Self::rgb(false, false, true);
    pub const YELLOW: Self = Self::rgb(true, true, false);

    const fn rgb(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

/// Audible response to a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Silent,
    /// One short beep: entry refused.
    ShortBeep,
    /// Two long beeps with a pause between them: room reset.
    DoubleBeep,
}
