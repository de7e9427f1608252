//! LED and buzzer output lines.
//!
//! All outputs are active-high: driving a line high turns the LED or buzzer
//! on.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::error::Error;

/// One of the three single-color LEDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Red,
    Green,
    Blue,
}

/// Three LEDs of which at most one is lit.
///
/// The lit LED is remembered so switching to another one only touches the
/// two lines involved.
pub struct RgbLeds<R, G, B> {
    red: R,
    green: G,
    blue: B,
    active: Option<Led>,
}

impl<R, G, B> RgbLeds<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Take the three LED lines and switch them all off.
    pub fn new(red: R, green: G, blue: B) -> Result<Self, Error> {
        let mut leds = Self {
            red,
            green,
            blue,
            active: None,
        };
        for led in [Led::Red, Led::Green, Led::Blue] {
            leds.set(led, false)?;
        }
        Ok(leds)
    }

    /// The LED currently lit, if any.
    pub fn active(&self) -> Option<Led> {
        self.active
    }

    /// Light `led`, switching off whichever one was lit before.
    pub fn latch(&mut self, led: Led) -> Result<(), Error> {
        self.clear()?;
        self.set(led, true)?;
        self.active = Some(led);
        Ok(())
    }

    /// Switch off the lit LED, if any.
    pub fn clear(&mut self) -> Result<(), Error> {
        if let Some(led) = self.active.take() {
            self.set(led, false)?;
        }
        Ok(())
    }

    fn set(&mut self, led: Led, on: bool) -> Result<(), Error> {
        let res = match (led, on) {
            (Led::Red, true) => self.red.set_high().map_err(drop),
            (Led::Red, false) => self.red.set_low().map_err(drop),
            (Led::Green, true) => self.green.set_high().map_err(drop),
            (Led::Green, false) => self.green.set_low().map_err(drop),
            (Led::Blue, true) => self.blue.set_high().map_err(drop),
            (Led::Blue, false) => self.blue.set_low().map_err(drop),
        };
        res.map_err(|_| Error::Led(led))
    }
}

/// A buzzer that sounds for a fixed time per pulse.
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Buzzer<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take the buzzer line and make sure it is silent.
    pub fn new(mut pin: P, delay: D) -> Result<Self, Error> {
        pin.set_low().map_err(|_| Error::Buzzer)?;
        Ok(Self { pin, delay })
    }

    /// Sound the buzzer for `duration_ms`, returning once it is off again.
    pub async fn pulse(&mut self, duration_ms: u32) -> Result<(), Error> {
        self.pin.set_high().map_err(|_| Error::Buzzer)?;
        self.delay.delay_ms(duration_ms).await;
        self.pin.set_low().map_err(|_| Error::Buzzer)
    }
}
