//! What each key press does.
//!
//! Two controllers are provided:
//!
//! - [`DeviceController`]: `1`/`2`/`3` light red/green/blue, `B` sounds the
//!   buzzer, anything else switches the LEDs off.
//! - [`LedController`]: the same without a buzzer; `B` behaves like any
//!   other unmapped key.
//!
//! Both switch off the lit LED before acting on any key, so pressing `B`
//! also darkens the LEDs.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::BUZZER_PULSE_MS;
use crate::error::Error;
use crate::keymap::Key;
use crate::outputs::{Buzzer, Led, RgbLeds};

/// Receives one call per debounced key press.
///
/// Implementations may take a while (the buzzer pulse does); the scan loop
/// awaits them before sampling again.
#[allow(async_fn_in_trait)]
pub trait KeyHandler {
    async fn on_press(&mut self, key: Key) -> Result<(), Error>;
}

impl<F> KeyHandler for F
where
    F: FnMut(Key) -> Result<(), Error>,
{
    async fn on_press(&mut self, key: Key) -> Result<(), Error> {
        self(key)
    }
}

/// The output action mapped to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Light this LED exclusively.
    Latch(Led),
    /// Pulse the buzzer.
    Beep,
    /// Switch all LEDs off.
    Clear,
}

/// Map a key to its action.
pub fn action_for(key: Key) -> Action {
    match key {
        Key::Num1 => Action::Latch(Led::Red),
        Key::Num2 => Action::Latch(Led::Green),
        Key::Num3 => Action::Latch(Led::Blue),
        Key::B => Action::Beep,
        _ => Action::Clear,
    }
}

/// Log the usage instructions shown at startup.
pub fn announce() {
    info!("4x4 keypad drives the RGB LEDs and a buzzer.");
    info!("Press these keys to control the devices:");
    info!("  - Key '1': red LED on.");
    info!("  - Key '2': green LED on.");
    info!("  - Key '3': blue LED on.");
    info!("  - Key 'B': sound the buzzer.");
    info!("Any other key turns all LEDs off.");
}

fn led_name(led: Led) -> &'static str {
    match led {
        Led::Red => "red",
        Led::Green => "green",
        Led::Blue => "blue",
    }
}

fn apply_led_action<R, G, B>(
    leds: &mut RgbLeds<R, G, B>,
    key: Key,
    action: Action,
) -> Result<(), Error>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    leds.clear()?;
    match action {
        Action::Latch(led) => {
            leds.latch(led)?;
            info!("Key {} pressed, {} LED on.", key, led_name(led));
        }
        Action::Beep | Action::Clear => {
            info!("Key {} pressed, all LEDs off.", key);
        }
    }
    Ok(())
}

/// LEDs plus buzzer.
pub struct DeviceController<R, G, B, Z, D> {
    leds: RgbLeds<R, G, B>,
    buzzer: Buzzer<Z, D>,
    pulse_ms: u32,
}

impl<R, G, B, Z, D> DeviceController<R, G, B, Z, D>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    Z: OutputPin,
    D: DelayNs,
{
    pub fn new(leds: RgbLeds<R, G, B>, buzzer: Buzzer<Z, D>) -> Self {
        Self {
            leds,
            buzzer,
            pulse_ms: BUZZER_PULSE_MS,
        }
    }

    /// Override the buzzer pulse length.
    pub fn with_pulse_ms(mut self, pulse_ms: u32) -> Self {
        self.pulse_ms = pulse_ms;
        self
    }

    pub fn active_led(&self) -> Option<Led> {
        self.leds.active()
    }
}

impl<R, G, B, Z, D> KeyHandler for DeviceController<R, G, B, Z, D>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
    Z: OutputPin,
    D: DelayNs,
{
    async fn on_press(&mut self, key: Key) -> Result<(), Error> {
        match action_for(key) {
            Action::Beep => {
                self.leds.clear()?;
                info!("Key {} pressed, buzzer on.", key);
                self.buzzer.pulse(self.pulse_ms).await?;
                info!("Buzzer off.");
                Ok(())
            }
            action => apply_led_action(&mut self.leds, key, action),
        }
    }
}

/// LEDs only.
pub struct LedController<R, G, B> {
    leds: RgbLeds<R, G, B>,
}

impl<R, G, B> LedController<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(leds: RgbLeds<R, G, B>) -> Self {
        Self { leds }
    }

    pub fn active_led(&self) -> Option<Led> {
        self.leds.active()
    }
}

impl<R, G, B> KeyHandler for LedController<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    async fn on_press(&mut self, key: Key) -> Result<(), Error> {
        let action = match action_for(key) {
            Action::Beep => Action::Clear,
            action => action,
        };
        apply_led_action(&mut self.leds, key, action)
    }
}
