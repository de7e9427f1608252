//! keypad-rgb firmware for nRF52840.
//!
//! Scans a 4×4 membrane keypad and mirrors key presses onto three LEDs and a
//! buzzer. See `config.rs` for the wiring.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_time::Delay;
use panic_probe as _;

use keypad_rgb::{config, handler, Buzzer, DeviceController, KeyEventDebouncer, RgbLeds, RowColumnScanner};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("keypad-rgb starting");

    // Rows idle high; the scanner pulls one low at a time.
    let rows = [
        Output::new(p.P0_03, Level::High, OutputDrive::Standard),
        Output::new(p.P0_04, Level::High, OutputDrive::Standard),
        Output::new(p.P0_28, Level::High, OutputDrive::Standard),
        Output::new(p.P0_29, Level::High, OutputDrive::Standard),
    ];
    let cols = [
        Input::new(p.P0_30, Pull::Up),
        Input::new(p.P0_31, Pull::Up),
        Input::new(p.P1_14, Pull::Up),
        Input::new(p.P1_15, Pull::Up),
    ];
    let scanner = RowColumnScanner::new(rows, cols);

    let red = Output::new(p.P1_01, Level::Low, OutputDrive::Standard);
    let green = Output::new(p.P1_02, Level::Low, OutputDrive::Standard);
    let blue = Output::new(p.P1_03, Level::Low, OutputDrive::Standard);
    let buzzer = Output::new(p.P1_04, Level::Low, OutputDrive::Standard);

    // nRF GPIO is infallible, so these constructors cannot fail.
    let (Ok(leds), Ok(buzzer)) = (RgbLeds::new(red, green, blue), Buzzer::new(buzzer, Delay)) else {
        defmt::panic!("output init failed");
    };
    let mut controller = DeviceController::new(leds, buzzer);

    handler::announce();

    // Delays are awaited, so the executor sleeps the core between scans.
    let mut keypad = KeyEventDebouncer::new(scanner, Delay, config::DEBOUNCE_POLICY);
    keypad.run(&mut controller).await
}
