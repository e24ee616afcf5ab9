// ST77916 QSPI panel driver (no D/C pin, 0x02/0x32 framing).
// Works with esp-hal (no_std); the bus seam is the `QspiBus` trait.
//
// Wiring on Waveshare ESP32-S3 Touch LCD 1.46" (ST77916):
//   CS  = GPIO5 (hardware CS)
//   SCK = GPIO6
//   D0..D3 = GPIO8..GPIO11
//   RST = GPIO7
//   BL  = GPIO4
//
// Protocol:
//   Register writes go out as [0x02, 0x00, CMD, 0x00] on one line, then the
//   parameter bytes on one line.
//   Pixel writes go out as [0x32, 0x00, 0x2C, 0x00] on one line, then the
//   pixel bytes on four lines.
// Geometry: panel is 360 x 360 pixels.
//
// The panel wiring rotates color channels; every outgoing pixel is
// pre-rotated (see `color`) so the glass shows what the caller drew.

use core::fmt;

use alloc::vec::Vec;

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::color::rotate_rgb565;
use crate::init_cmd::LCD_INIT_CMD;
use crate::qspi::QspiBus;

// Public constants so the rest of the code can adopt 360x360 easily.
pub const ST77916_WIDTH: u16 = 360;
pub const ST77916_HEIGHT: u16 = 360;

const CASET_OPCODE: u8 = 0x2A;
const RASET_OPCODE: u8 = 0x2B;
pub const RAMWR_OPCODE: u8 = 0x2C;
pub const RAMWRC_OPCODE: u8 = 0x3C;

// Reset line hold times. The panel ignores commands sent earlier than this.
const RESET_LOW_MS: u32 = 10;
const RESET_SETTLE_MS: u32 = 120;

/// Error type that wraps bus and GPIO errors.
#[derive(Debug, PartialEq, Eq)]
pub enum St77916Error<BusE, PinE> {
    Bus(BusE),
    Pin(PinE),
    /// The power-on sequence aborted at this table step. The panel is left in
    /// an undefined state; re-run from hardware reset.
    Init {
        index: usize,
        opcode: u8,
        source: BusE,
    },
    OutOfBounds,
    /// Pixel buffer length does not match the window area.
    BufferMismatch {
        expected: usize,
        actual: usize,
    },
    /// The window's byte count exceeds the transport's single-transaction
    /// limit; the caller must tile.
    TransferTooLarge {
        bytes: usize,
        max: usize,
    },
    AllocFailed,
}

impl<BusE: fmt::Debug, PinE: fmt::Debug> From<BusE> for St77916Error<BusE, PinE> {
    fn from(e: BusE) -> Self {
        Self::Bus(e)
    }
}

/// Rectangular pixel region; `x1`/`y1` are exclusive.
///
/// The panel wants inclusive big-endian bounds on the wire, so the payload
/// helpers send `x1 - 1`/`y1 - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn width(&self) -> u16 {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> u16 {
        self.y1 - self.y0
    }

    pub const fn pixel_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Non-empty and inside the panel.
    pub const fn fits(&self, width: u16, height: u16) -> bool {
        self.x0 < self.x1 && self.x1 <= width && self.y0 < self.y1 && self.y1 <= height
    }

    /// CASET payload: `[x0 hi, x0 lo, x1-1 hi, x1-1 lo]`. Only valid for
    /// non-empty windows.
    pub const fn column_payload(&self) -> [u8; 4] {
        let end = self.x1 - 1;
        [
            (self.x0 >> 8) as u8,
            (self.x0 & 0xFF) as u8,
            (end >> 8) as u8,
            (end & 0xFF) as u8,
        ]
    }

    /// RASET payload, same layout as `column_payload`.
    pub const fn row_payload(&self) -> [u8; 4] {
        let end = self.y1 - 1;
        [
            (self.y0 >> 8) as u8,
            (self.y0 & 0xFF) as u8,
            (end >> 8) as u8,
            (end & 0xFF) as u8,
        ]
    }
}

/// ST77916 panel driver.
///
/// Owns the bus and the optional reset line for its whole lifetime; exactly
/// one caller may hold it, which is what makes the single-in-flight-transfer
/// rule hold. The two operations collaborators get are construction
/// (initialize) and [`St77916Display::flush`].
pub struct St77916Display<BUS, RST> {
    pub bus: BUS,
    rst: Option<RST>,
    w: u16,
    h: u16,
    pixel_cmd: u8,
}

impl<BUS, RST> St77916Display<BUS, RST>
where
    BUS: QspiBus,
    RST: OutputPin,
    BUS::Error: fmt::Debug,
    RST::Error: fmt::Debug,
{
    /// Create + init the panel. Call once at startup.
    ///
    /// * `bus` - the QSPI transport (e.g. `SpiQspiBus`)
    /// * `rst` - optional reset pin (recommended to wire)
    /// * `delay` - any `DelayNs` impl (spin delay is fine)
    /// * `width`, `height` - normally 360x360 for this panel
    ///
    /// Drives the reset line low for 10 ms and high for 120 ms, then replays
    /// the full power-on table. If any step fails the error names the step
    /// and nothing further is sent; the panel must be re-reset before
    /// retrying.
    pub fn new(
        bus: BUS,
        rst: Option<RST>,
        delay: &mut impl DelayNs,
        width: u16,
        height: u16,
    ) -> Result<Self, St77916Error<BUS::Error, RST::Error>> {
        let mut this = Self {
            bus,
            rst,
            w: width,
            h: height,
            pixel_cmd: RAMWR_OPCODE,
        };

        // Hard reset sequence
        if let Some(r) = this.rst.as_mut() {
            r.set_low().map_err(St77916Error::Pin)?;
            delay.delay_ms(RESET_LOW_MS);
            r.set_high().map_err(St77916Error::Pin)?;
            delay.delay_ms(RESET_SETTLE_MS);
        }

        // Power-on table, top to bottom, no branching. Later entries assume
        // earlier ones took (bank unlocks, gamma loads), so the first failure
        // aborts the whole sequence.
        for (index, cmd) in LCD_INIT_CMD.iter().enumerate() {
            this.bus
                .write_command(cmd.opcode, cmd.params)
                .map_err(|source| St77916Error::Init {
                    index,
                    opcode: cmd.opcode,
                    source,
                })?;
            if cmd.delay_ms > 0 {
                delay.delay_ms(cmd.delay_ms as u32);
            }
        }

        Ok(this)
    }

    /// Select the pixel-write opcode: RAMWR (0x2C, default) or RAMWRC (0x3C).
    pub fn with_pixel_cmd(mut self, opcode: u8) -> Self {
        self.pixel_cmd = opcode;
        self
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.w
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.h
    }

    pub fn size(&self) -> (u16, u16) {
        (self.w, self.h)
    }

    // CASET + RASET pair. The panel keeps no window state across unrelated
    // commands, so this runs before every pixel burst, and the pair is never
    // split or reordered.
    fn set_window(&mut self, window: Window) -> Result<(), St77916Error<BUS::Error, RST::Error>> {
        if !window.fits(self.w, self.h) {
            return Err(St77916Error::OutOfBounds);
        }
        self.bus.write_command(CASET_OPCODE, &window.column_payload())?;
        self.bus.write_command(RASET_OPCODE, &window.row_payload())?;
        Ok(())
    }

    /// Push one rendered tile to the glass.
    ///
    /// `pixels` is row-major RGB565, exactly `window` sized. The window is
    /// re-addressed, every pixel channel-rotated into a scratch buffer that
    /// lives for this one transfer, and a single quad write carries it out.
    /// Returns only once the transport confirms the transfer completed, so
    /// the caller may start rendering its next tile immediately after.
    ///
    /// Windows bigger than the transport's transaction limit are refused;
    /// the caller picks the tile geometry.
    pub fn flush(
        &mut self,
        window: Window,
        pixels: &[u16],
    ) -> Result<(), St77916Error<BUS::Error, RST::Error>> {
        // All argument checks happen before any bus traffic.
        if !window.fits(self.w, self.h) {
            return Err(St77916Error::OutOfBounds);
        }
        let expected = window.pixel_count();
        if pixels.len() != expected {
            return Err(St77916Error::BufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let bytes = expected * 2;
        let max = self.bus.max_transfer_bytes();
        if bytes > max {
            return Err(St77916Error::TransferTooLarge { bytes, max });
        }

        self.set_window(window)?;

        // Scratch buffer in wire order: rotated, big-endian. Allocated per
        // transfer and dropped only after write_pixels returns, which the
        // QspiBus contract ties to physical completion.
        let mut scratch: Vec<u16> = Vec::new();
        if scratch.try_reserve_exact(expected).is_err() {
            return Err(St77916Error::AllocFailed);
        }
        scratch.extend(pixels.iter().map(|&px| rotate_rgb565(px).to_be()));

        self.bus.write_pixels(self.pixel_cmd, bytemuck::cast_slice(&scratch))?;
        Ok(())
    }
}
