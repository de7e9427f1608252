//! Row/column matrix scanner.
//!
//! The four row lines are push-pull outputs; the four column lines are inputs
//! held high by pull-up resistors. Pressing a key bridges its row to its
//! column, so a column reads low only while its row is driven low.
//!
//! Each scan selects one row at a time (row low, the other three high) and
//! reads the columns in order. The first low column wins and the scan stops
//! there, so with several keys down the lowest row, then the lowest column,
//! is reported. Only one key is observable per tick.
//!
//! The last selected row stays driven low after a scan returns. Nothing
//! should read meaning into the row levels between scans.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::Error;
use crate::keymap::{Key, COLS, KEYMAP, ROWS};

/// Something that can be sampled once per polling tick for the key that is
/// currently down.
pub trait KeySource {
    /// Take one sample. `Ok(None)` means no key is down.
    fn scan(&mut self) -> Result<Option<Key>, Error>;
}

/// Scans a 4×4 matrix over GPIO lines.
pub struct RowColumnScanner<R, C> {
    rows: [R; ROWS],
    cols: [C; COLS],
}

impl<R, C> RowColumnScanner<R, C>
where
    R: OutputPin,
    C: InputPin,
{
    /// Take ownership of the row outputs and column inputs.
    ///
    /// Pin direction and pull-ups must already be configured.
    pub fn new(rows: [R; ROWS], cols: [C; COLS]) -> Self {
        Self { rows, cols }
    }

    /// Drive every row to the inactive (high) level.
    pub fn deselect_all(&mut self) -> Result<(), Error> {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_high().map_err(|_| Error::Row(i as u8))?;
        }
        Ok(())
    }

    fn select_row(&mut self, active: usize) -> Result<(), Error> {
        for (i, row) in self.rows.iter_mut().enumerate() {
            let res = if i == active {
                row.set_low()
            } else {
                row.set_high()
            };
            res.map_err(|_| Error::Row(i as u8))?;
        }
        Ok(())
    }

    fn first_active_column(&mut self) -> Result<Option<usize>, Error> {
        for (i, col) in self.cols.iter_mut().enumerate() {
            if col.is_low().map_err(|_| Error::Column(i as u8))? {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }
}

impl<R, C> KeySource for RowColumnScanner<R, C>
where
    R: OutputPin,
    C: InputPin,
{
    fn scan(&mut self) -> Result<Option<Key>, Error> {
        for row in 0..ROWS {
            self.select_row(row)?;
            if let Some(col) = self.first_active_column()? {
                return Ok(Some(KEYMAP[row][col]));
            }
        }
        Ok(None)
    }
}
