//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments and timing parameters live here so they can
//! be tuned in one place.

use crate::debounce::DebouncePolicy;

// Keypad polling

/// Sleep after a sample taken while no key is held (ms).
pub const POLL_INTERVAL_MS: u32 = 50;

/// Sleep between samples while waiting for the held key to be released (ms).
pub const RELEASE_POLL_INTERVAL_MS: u32 = 10;

/// Fixed cadence of the repeat policy (ms). Coarser than the one-shot
/// cadence so a held key fires about five times per second.
pub const REPEAT_POLL_INTERVAL_MS: u32 = 200;

/// How held keys are reported. `OneShot` fires once per press,
/// `Repeat` fires on every tick the key is down.
pub const DEBOUNCE_POLICY: DebouncePolicy = DebouncePolicy::OneShot;

// Outputs

/// How long the buzzer sounds when `B` is pressed (ms).
/// The scan loop is blocked for the whole pulse.
pub const BUZZER_PULSE_MS: u32 = 2000;

// GPIO pin assignments (nRF52840-DK, external keypad + LEDs)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your wiring.
//
//   Row 1..4     → P0.03, P0.04, P0.28, P0.29   (push-pull outputs, active-low)
//   Column 1..4  → P0.30, P0.31, P1.14, P1.15   (inputs, internal pull-up)
//   LED red      → P1.01
//   LED green    → P1.02
//   LED blue     → P1.03
//   Buzzer       → P1.04
