//! 4×4 matrix keypad scanning and debouncing for a GPIO demo board.
//!
//! The scanner and debouncer are written against the `embedded-hal` 1.0
//! traits, so everything here builds and tests on the host. The nRF52840
//! firmware in `main.rs` plugs in the embassy GPIO drivers.
//!
//! Usage: `cargo test` (host), `cargo run --release --features embedded`
//! (target, through probe-rs).

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod debounce;
pub mod error;
pub mod handler;
pub mod keymap;
pub mod outputs;
pub mod scanner;

pub use debounce::{DebouncePolicy, DebounceState, Debouncer, KeyEventDebouncer};
pub use error::Error;
pub use handler::{action_for, Action, DeviceController, KeyHandler, LedController};
pub use keymap::{Key, KEYMAP};
pub use outputs::{Buzzer, Led, RgbLeds};
pub use scanner::{KeySource, RowColumnScanner};
