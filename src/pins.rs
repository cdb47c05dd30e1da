//! GPIO / peripheral pin assignments for the gate controller board.
//!
//! Single source of truth. Every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Buttons (active-low, internal pull-up, falling-edge interrupt)
// ---------------------------------------------------------------------------

/// Button A: one person enters.
pub const ENTRY_BUTTON_GPIO: i32 = 5;
/// Button B: one person leaves.
pub const EXIT_BUTTON_GPIO: i32 = 6;
/// Joystick push: clear the room.
pub const RESET_BUTTON_GPIO: i32 = 22;

// ---------------------------------------------------------------------------
// RGB status lamp (discrete LEDs, active HIGH)
// ---------------------------------------------------------------------------

pub const LED_GREEN_GPIO: i32 = 11;
pub const LED_BLUE_GPIO: i32 = 12;
pub const LED_RED_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Buzzer (passive piezo on LEDC PWM)
// ---------------------------------------------------------------------------

pub const BUZZER_GPIO: i32 = 21;
/// Tone frequency.  ~2 kHz matches the reference hardware.
pub const BUZZER_PWM_FREQ_HZ: u32 = 2_000;
