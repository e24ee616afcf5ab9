//! ST77916 QSPI meter demo
//! ========================================
//! needs to be run in WSL2 terminal
//! source ~/export-esp.sh
//! ========================================
//!
//! Brings the panel up through its full power-on sequence, then sweeps the
//! gauge needle 0..100 and back, one step per ~30 ms tick.

//% CHIPS: esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

// Module imports
use esp32s3_meter::{display::setup_display, ui::MeterUi, wiring::init_board_pins};

use esp_backtrace as _;

// ESP-HAL imports
use esp_hal::{delay::Delay, main, psram, Config};

// Println macro
use esp_println::println;

// Allocator for PSRAM
extern crate alloc;

// Needle step cadence, matching a ~33 Hz gauge update.
const STEP_MS: u32 = 30;

#[main]
fn main() -> ! {
    // Initialize peripherals
    let peripherals = esp_hal::init(Config::default());

    // Frame buffer and flush scratch live in PSRAM.
    esp_alloc::psram_allocator!(&peripherals.PSRAM, psram);

    println!("ST77916 meter demo");

    let pins = init_board_pins(peripherals);
    let mut display = setup_display(pins);
    println!(
        "panel up: {}x{}",
        display.width(),
        display.height()
    );

    let mut ui = MeterUi::new();
    let delay = Delay::new();

    // Sweep the needle up and down forever.
    let mut value = 0i32;
    let mut dir = 1i32;
    loop {
        ui.set_meter_value(value);
        if let Err(e) = ui.render(&mut display) {
            // A failed transfer leaves the panel content undefined; log and
            // keep going, the next frame repaints everything.
            println!("render failed: {:?}", e);
        }

        value += dir;
        if value >= 100 {
            dir = -1;
        }
        if value <= 0 {
            dir = 1;
        }

        delay.delay_millis(STEP_MS);
    }
}
