//! Unified error type for keypad-rgb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The nRF GPIO drivers are infallible, so on target none of these are ever
//! produced. They exist because the `embedded-hal` pin traits are fallible
//! in signature and other HALs (or test doubles) may fail.

use crate::outputs::Led;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Keypad
    /// Driving row line `n` to a level failed.
    Row(u8),

    /// Reading column line `n` failed.
    Column(u8),

    // Outputs
    /// Switching an LED line failed.
    Led(Led),

    /// Switching the buzzer line failed.
    Buzzer,
}
