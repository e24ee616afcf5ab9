// This module handles board-specific pin mappings and initialization.
//! The following wiring is assumed (Waveshare ESP32-S3 Touch LCD 1.46"):
//! - LCD CS  => GPIO5 (hardware CS, driven by the SPI peripheral)
//! - LCD SCK => GPIO6
//! - LCD RST => GPIO7
//! - LCD D0..D3 => GPIO8..GPIO11 (quad data lines)
//! - LCD BL  => GPIO4
//!
//! SCK/CS/D0..D3 are handed over as raw pin peripherals so the SPI driver can
//! claim them; only RST and BL are plain GPIO outputs.

use esp_backtrace as _;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{
    Peripherals, DMA_CH0, GPIO10, GPIO11, GPIO5, GPIO6, GPIO8, GPIO9, SPI2,
};

pub struct DisplayPins<'a> {
    pub spi2: SPI2<'a>,
    pub cs: GPIO5<'a>,
    pub sclk: GPIO6<'a>,
    pub d0: GPIO8<'a>,
    pub d1: GPIO9<'a>,
    pub d2: GPIO10<'a>,
    pub d3: GPIO11<'a>,
    pub rst: Output<'a>,
    pub bl: Output<'a>,
    pub dma_ch0: DMA_CH0<'a>,
}

pub fn init_board_pins<'a>(p: Peripherals) -> DisplayPins<'a> {
    // Reset idles high; backlight stays dark until the panel is initialized
    // so the power-on garbage never reaches the eye.
    let rst = Output::new(p.GPIO7, Level::High, OutputConfig::default());
    let bl = Output::new(p.GPIO4, Level::Low, OutputConfig::default());

    DisplayPins {
        spi2: p.SPI2,
        cs: p.GPIO5,
        sclk: p.GPIO6,
        d0: p.GPIO8,
        d1: p.GPIO9,
        d2: p.GPIO10,
        d3: p.GPIO11,
        rst,
        bl,
        dma_ch0: p.DMA_CH0,
    }
}
