//! Display setup and initialization module.
//
// - `setup_display` builds the quad-line DMA SPI bus and brings the ST77916
//   out of reset through its full power-on sequence.
// - Reuses SpinDelay and the DisplayPins wiring.
// - Bus parameters follow the panel's limits: 20 MHz, SPI mode 3, one
//   transaction in flight at a time.

use esp_backtrace as _;

use esp_hal::{
    dma::{DmaRxBuf, DmaTxBuf},
    dma_buffers,
    gpio::Output,
    spi::master::{Config, Spi, SpiDmaBus},
    spi::Mode,
    time::Rate,
    Blocking,
};

use crate::qspi::SpiQspiBus;
use crate::st77916::{St77916Display, ST77916_HEIGHT, ST77916_WIDTH};
use crate::wiring::DisplayPins;

/// Largest single pixel transaction: 80 panel rows of RGB565. Flush callers
/// must tile below this.
pub const MAX_TRANSFER: usize = (ST77916_WIDTH as usize) * 80 * 2;

// A tiny busy-wait delay that satisfies embedded-hal 1.0 DelayNs.
pub struct SpinDelay;
impl embedded_hal::delay::DelayNs for SpinDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        let mut n = ns / 50 + 1;
        while n != 0 {
            core::hint::spin_loop();
            n -= 1;
        }
    }
    #[inline]
    fn delay_us(&mut self, us: u32) {
        for _ in 0..us {
            self.delay_ns(1_000);
        }
    }
    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

// Expose a ready-to-use display type (shares lifetime with the SPI bus)
pub type DisplayType<'a> = St77916Display<SpiQspiBus<'a>, Output<'a>>;

pub fn setup_display<'a>(pins: DisplayPins<'a>) -> DisplayType<'a> {
    let DisplayPins {
        spi2,
        cs,
        sclk,
        d0,
        d1,
        d2,
        d3,
        rst,
        mut bl,
        dma_ch0,
    } = pins;

    let mut delay = SpinDelay;

    // QSPI @ 20 MHz, Mode 3. Hardware CS keeps the command, address and data
    // phases of one transaction inside a single CS assertion.
    let spi = Spi::new(
        spi2,
        Config::default()
            .with_frequency(Rate::from_mhz(20))
            .with_mode(Mode::_3),
    )
    .unwrap()
    .with_sck(sclk)
    .with_cs(cs)
    .with_sio0(d0)
    .with_sio1(d1)
    .with_sio2(d2)
    .with_sio3(d3)
    .with_dma(dma_ch0);

    let (rx_buf, rx_desc, tx_buf, tx_desc) = dma_buffers!(4096, MAX_TRANSFER);
    let rx = DmaRxBuf::new(rx_desc, rx_buf).unwrap();
    let tx = DmaTxBuf::new(tx_desc, tx_buf).unwrap();

    let spi_bus: SpiDmaBus<'_, Blocking> = spi.with_buffers(rx, tx);
    let bus = SpiQspiBus::new(spi_bus, MAX_TRANSFER);

    let display = St77916Display::new(bus, Some(rst), &mut delay, ST77916_WIDTH, ST77916_HEIGHT)
        .expect("ST77916 init failed");

    // Panel is awake and showing black; now it is safe to light it up.
    bl.set_high();

    display
}
