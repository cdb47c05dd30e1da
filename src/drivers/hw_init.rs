//! One-shot hardware peripheral initialization.
//!
//! Configures the button inputs, the status lamp outputs, and the buzzer
//! LEDC timer/channel using raw ESP-IDF sys calls.  Called once from
//! `main()` before the workers start.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::events::EventSource;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
    IsrInstallFailed(i32),
    IsrHandlerFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc)   => write!(f, "LEDC timer/channel config failed (rc={})", rc),
            Self::IsrInstallFailed(rc) => write!(f, "GPIO ISR service install failed (rc={})", rc),
            Self::IsrHandlerFailed(rc) => write!(f, "GPIO ISR handler registration failed (rc={})", rc),
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before any worker exists; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_gpio_outputs()?;
        init_ledc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
fn check(ret: esp_err_t, err: fn(i32) -> HwInitError) -> Result<(), HwInitError> {
    if ret == ESP_OK as i32 { Ok(()) } else { Err(err(ret)) }
}

// ── GPIO Inputs ───────────────────────────────────────────────

/// Buttons: active-low with pull-up, falling-edge interrupt.
#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: (1u64 << pins::ENTRY_BUTTON_GPIO)
            | (1u64 << pins::EXIT_BUTTON_GPIO)
            | (1u64 << pins::RESET_BUTTON_GPIO),
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_NEGEDGE,
    };
    check(unsafe { gpio_config(&cfg) }, HwInitError::GpioConfigFailed)?;

    info!("hw_init: buttons configured (entry={}, exit={}, reset={})",
        pins::ENTRY_BUTTON_GPIO, pins::EXIT_BUTTON_GPIO, pins::RESET_BUTTON_GPIO);
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [
        pins::LED_RED_GPIO,
        pins::LED_GREEN_GPIO,
        pins::LED_BLUE_GPIO,
    ];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        check(unsafe { gpio_config(&cfg) }, HwInitError::GpioConfigFailed)?;
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: lamp outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an output pin configured in
    // init_gpio_outputs(); callers serialise through the sink lock.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── LEDC PWM ─────────────────────────────────────────────────

pub const LEDC_CH_BUZZER: u32 = 0;

#[cfg(target_os = "espidf")]
unsafe fn init_ledc() -> Result<(), HwInitError> {
    // Timer 0: buzzer tone, 12-bit duty so the range matches BUZZER_DUTY_MAX.
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_12_BIT,
        freq_hz: pins::BUZZER_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    check(unsafe { ledc_timer_config(&timer0) }, HwInitError::LedcInitFailed)?;

    check(
        unsafe {
            ledc_channel_config(&ledc_channel_config_t {
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel: LEDC_CH_BUZZER,
                timer_sel: ledc_timer_t_LEDC_TIMER_0,
                gpio_num: pins::BUZZER_GPIO,
                duty: 0,
                hpoint: 0,
                ..Default::default()
            })
        },
        HwInitError::LedcInitFailed,
    )?;

    info!("hw_init: LEDC configured (buzzer=CH0 @ {} Hz)", pins::BUZZER_PWM_FREQ_HZ);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u32) {
    // SAFETY: LEDC channel was configured in init_ledc(); callers serialise
    // through the buzzer lock.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, duty);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u32) {}

// ── GPIO ISR Service ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
use core::sync::atomic::{AtomicPtr, Ordering};

#[cfg(target_os = "espidf")]
use crate::events::Event;

/// Event source the button ISRs feed.  Set once by `init_isr_service`.
#[cfg(target_os = "espidf")]
static EVENT_SOURCE: AtomicPtr<EventSource> = AtomicPtr::new(core::ptr::null_mut());

/// Shared handler for all three buttons; `arg` carries the event index.
#[cfg(target_os = "espidf")]
unsafe extern "C" fn button_gpio_isr(arg: *mut core::ffi::c_void) {
    let src = EVENT_SOURCE.load(Ordering::Acquire);
    if src.is_null() {
        return;
    }
    let event = match arg as usize {
        0 => Event::Entry,
        1 => Event::Exit,
        _ => Event::Reset,
    };
    let now_ms = crate::adapters::time::uptime_ms();
    // SAFETY: the pointer comes from a `&'static EventSource`.
    unsafe { &*src }.on_edge(event, now_ms);
}

/// Install the per-pin GPIO ISR service and register the button handlers.
/// Call after `init_peripherals()` and before the workers start.
#[cfg(target_os = "espidf")]
pub fn init_isr_service(source: &'static EventSource) -> Result<(), HwInitError> {
    EVENT_SOURCE.store(core::ptr::from_ref(source).cast_mut(), Ordering::Release);

    let buttons = [
        (pins::ENTRY_BUTTON_GPIO, Event::Entry),
        (pins::EXIT_BUTTON_GPIO, Event::Exit),
        (pins::RESET_BUTTON_GPIO, Event::Reset),
    ];

    // SAFETY: gpio_install_isr_service is idempotent; ESP_ERR_INVALID_STATE
    // means it was already installed (acceptable). The handler registered
    // below only runs the debounce check and rings a doorbell.
    unsafe {
        let ret = gpio_install_isr_service(0);
        if ret != ESP_OK as i32 && ret != ESP_ERR_INVALID_STATE as i32 {
            return Err(HwInitError::IsrInstallFailed(ret));
        }

        for (pin, event) in buttons {
            gpio_set_intr_type(pin, gpio_int_type_t_GPIO_INTR_NEGEDGE);
            check(
                gpio_isr_handler_add(pin, Some(button_gpio_isr), event.index() as *mut _),
                HwInitError::IsrHandlerFailed,
            )?;
            gpio_intr_enable(pin);
        }
    }

    info!("hw_init: ISR service installed (entry, exit, reset)");
    Ok(())
}

/// Simulation: edges are injected by calling
/// [`EventSource::on_edge`] directly.
#[cfg(not(target_os = "espidf"))]
pub fn init_isr_service(_source: &'static EventSource) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ISR service skipped");
    Ok(())
}
