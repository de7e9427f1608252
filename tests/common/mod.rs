//! Host-side stand-ins for the board: a pull-up keypad matrix, recording
//! output lines and a virtual clock.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use keypad_rgb::keymap::{self, COLS, ROWS};
use keypad_rgb::{Error, Key, KeySource, RowColumnScanner};

// Keypad matrix

#[derive(Default)]
struct MatrixState {
    row_low: [bool; ROWS],
    pressed: [[bool; COLS]; ROWS],
}

/// A 4×4 membrane keypad with pull-ups on the columns.
///
/// A column reads low only when a pressed key connects it to a row that is
/// currently driven low.
#[derive(Clone, Default)]
pub struct Matrix(Rc<RefCell<MatrixState>>);

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pins(&self) -> ([RowPin; ROWS], [ColumnPin; COLS]) {
        let rows = core::array::from_fn(|row| RowPin {
            row,
            matrix: self.clone(),
        });
        let cols = core::array::from_fn(|col| ColumnPin {
            col,
            matrix: self.clone(),
        });
        (rows, cols)
    }

    pub fn scanner(&self) -> RowColumnScanner<RowPin, ColumnPin> {
        let (rows, cols) = self.pins();
        RowColumnScanner::new(rows, cols)
    }

    pub fn press_at(&self, row: usize, col: usize) {
        self.0.borrow_mut().pressed[row][col] = true;
    }

    pub fn press(&self, key: Key) {
        let (row, col) = keymap::position(key);
        self.press_at(row, col);
    }

    pub fn release(&self, key: Key) {
        let (row, col) = keymap::position(key);
        self.0.borrow_mut().pressed[row][col] = false;
    }

    pub fn release_all(&self) {
        self.0.borrow_mut().pressed = [[false; COLS]; ROWS];
    }

    /// Which rows are currently driven low.
    pub fn rows_low(&self) -> [bool; ROWS] {
        self.0.borrow().row_low
    }
}

pub struct RowPin {
    row: usize,
    matrix: Matrix,
}

impl ErrorType for RowPin {
    type Error = Infallible;
}

impl OutputPin for RowPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.matrix.0.borrow_mut().row_low[self.row] = true;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.matrix.0.borrow_mut().row_low[self.row] = false;
        Ok(())
    }
}

pub struct ColumnPin {
    col: usize,
    matrix: Matrix,
}

impl ColumnPin {
    fn pulled_low(&self) -> bool {
        let state = self.matrix.0.borrow();
        (0..ROWS).any(|row| state.row_low[row] && state.pressed[row][self.col])
    }
}

impl ErrorType for ColumnPin {
    type Error = Infallible;
}

impl InputPin for ColumnPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pulled_low())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pulled_low())
    }
}

// Output lines

/// An output line that remembers its level and how often it went high.
#[derive(Clone, Default)]
pub struct Line {
    high: Rc<Cell<bool>>,
    rises: Rc<Cell<u32>>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_high(&self) -> bool {
        self.high.get()
    }

    pub fn rises(&self) -> u32 {
        self.rises.get()
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high.get() {
            self.rises.set(self.rises.get() + 1);
        }
        self.high.set(true);
        Ok(())
    }
}

/// An output line whose driver always reports a fault.
pub struct BrokenLine;

impl ErrorType for BrokenLine {
    type Error = ErrorKind;
}

impl OutputPin for BrokenLine {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

// Time

/// Virtual clock. Delays complete on their first poll, advancing the clock
/// and logging the duration in ms.
#[derive(Clone, Default)]
pub struct Clock {
    now_ns: Rc<Cell<u64>>,
    log_ms: Rc<RefCell<Vec<u32>>>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.clone())
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.now_ns.get() / 1_000_000
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.log_ms.borrow().clone()
    }
}

pub struct SimDelay(Clock);

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        let clock = &self.0;
        clock.now_ns.set(clock.now_ns.get() + u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        let clock = &self.0;
        clock.now_ns.set(clock.now_ns.get() + u64::from(ms) * 1_000_000);
        clock.log_ms.borrow_mut().push(ms);
    }
}

// Scripted samples

/// Replays a fixed list of scan samples, then reports no key forever.
pub struct Script(VecDeque<Result<Option<Key>, Error>>);

impl Script {
    pub fn new(samples: &[Option<Key>]) -> Self {
        Self(samples.iter().copied().map(Ok).collect())
    }

    pub fn from_chars(samples: &str) -> Self {
        Self(
            samples
                .chars()
                .map(|c| Ok(if c == '.' { None } else { Key::from_char(c) }))
                .collect(),
        )
    }

    pub fn push_err(&mut self, err: Error) {
        self.0.push_back(Err(err));
    }
}

impl KeySource for Script {
    fn scan(&mut self) -> Result<Option<Key>, Error> {
        self.0.pop_front().unwrap_or(Ok(None))
    }
}
