//! Gauge meter screen.
//!
//! This is the rendering collaborator sitting on top of the panel driver: it
//! owns the frame buffer, draws the dial and needle with embedded-graphics,
//! and pushes the result through `St77916Display::flush` in row bands. The
//! driver below it only ever sees "initialize" and "flush a tile".

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt::Write as _;

use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Alignment, Text},
    Pixel,
};
use embedded_hal::digital::OutputPin;
use libm::{cosf, sinf};

use crate::qspi::QspiBus;
use crate::st77916::{St77916Display, St77916Error, Window, ST77916_HEIGHT, ST77916_WIDTH};

pub const METER_MIN: i32 = 0;
pub const METER_MAX: i32 = 100;

// Dial geometry, (0,0) is top-left corner
const CENTER: i32 = ST77916_WIDTH as i32 / 2;
const DIAL_RADIUS: i32 = 150;
const TICK_INNER: i32 = 130;
const NEEDLE_LEN: i32 = 120;
const HUB_RADIUS: u32 = 12;

// Needle sweep: value 0 points lower-left, full scale lower-right.
const SWEEP_START_DEG: f32 = 135.0;
const SWEEP_DEG: f32 = 270.0;

// Rows per flush; 40 rows of 360 px keeps one transfer at 28.8 KB, well
// under the transport's transaction limit.
const TILE_ROWS: u16 = 40;

/// RGB565 frame buffer the gauge renders into.
///
/// Row-major, so any horizontal band is one contiguous slice and can go to
/// `flush` without copying.
pub struct FrameBuffer {
    w: u16,
    h: u16,
    px: Vec<u16>,
}

impl FrameBuffer {
    pub fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            px: vec![0; (w as usize) * (h as usize)],
        }
    }

    /// Rows `y0..y1` as one slice.
    pub fn rows(&self, y0: u16, y1: u16) -> &[u16] {
        let w = self.w as usize;
        &self.px[(y0 as usize) * w..(y1 as usize) * w]
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(p, c) in pixels {
            if p.x < 0 || p.y < 0 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= self.w || y >= self.h {
                continue;
            }
            self.px[(y as usize) * (self.w as usize) + (x as usize)] = c.into_storage();
        }
        Ok(())
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.px.fill(color.into_storage());
        Ok(())
    }
}

/// The meter screen: a dial with ticks, a needle and a numeric readout.
/// `set_meter_value` is the only mutation surface; `render` repaints and
/// flushes the frame.
pub struct MeterUi {
    value: i32,
    fb: FrameBuffer,
}

impl Default for MeterUi {
    fn default() -> Self {
        Self::new()
    }
}

impl MeterUi {
    pub fn new() -> Self {
        Self {
            value: METER_MIN,
            fb: FrameBuffer::new(ST77916_WIDTH, ST77916_HEIGHT),
        }
    }

    /// Move the needle. Values outside the scale are clamped.
    pub fn set_meter_value(&mut self, value: i32) {
        self.value = value.clamp(METER_MIN, METER_MAX);
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Needle angle in radians for a scale value.
    fn angle_rad(value: i32) -> f32 {
        let t = (value - METER_MIN) as f32 / (METER_MAX - METER_MIN) as f32;
        (SWEEP_START_DEG + t * SWEEP_DEG) * core::f32::consts::PI / 180.0
    }

    fn polar(radius: i32, angle: f32) -> Point {
        Point::new(
            CENTER + (cosf(angle) * radius as f32) as i32,
            CENTER + (sinf(angle) * radius as f32) as i32,
        )
    }

    fn draw_scene(&mut self) {
        let _ = self.fb.clear(Rgb565::BLACK);

        // Dial ring
        let ring = PrimitiveStyle::with_stroke(Rgb565::WHITE, 2);
        let _ = Circle::with_center(Point::new(CENTER, CENTER), (DIAL_RADIUS as u32) * 2)
            .into_styled(ring)
            .draw(&mut self.fb);

        // Major ticks every 10 units
        let tick = PrimitiveStyle::with_stroke(Rgb565::WHITE, 2);
        let mut v = METER_MIN;
        while v <= METER_MAX {
            let a = Self::angle_rad(v);
            let _ = Line::new(Self::polar(TICK_INNER, a), Self::polar(DIAL_RADIUS, a))
                .into_styled(tick)
                .draw(&mut self.fb);
            v += 10;
        }

        // Needle + hub
        let a = Self::angle_rad(self.value);
        let needle = PrimitiveStyle::with_stroke(Rgb565::RED, 3);
        let _ = Line::new(Point::new(CENTER, CENTER), Self::polar(NEEDLE_LEN, a))
            .into_styled(needle)
            .draw(&mut self.fb);
        let _ = Circle::with_center(Point::new(CENTER, CENTER), HUB_RADIUS * 2)
            .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(&mut self.fb);

        // Numeric readout under the hub
        let mut label: heapless::String<8> = heapless::String::new();
        let _ = write!(label, "{}", self.value);
        let style = MonoTextStyle::new(&FONT_10X20, Rgb565::WHITE);
        let _ = Text::with_alignment(
            &label,
            Point::new(CENTER, CENTER + DIAL_RADIUS / 2),
            style,
            Alignment::Center,
        )
        .draw(&mut self.fb);
    }

    /// Repaint the scene and push it to the panel in `TILE_ROWS` bands.
    ///
    /// Each band is one flush; the next band only starts once the previous
    /// transfer completed, which `flush` guarantees.
    pub fn render<BUS, RST>(
        &mut self,
        display: &mut St77916Display<BUS, RST>,
    ) -> Result<(), St77916Error<BUS::Error, RST::Error>>
    where
        BUS: QspiBus,
        RST: OutputPin,
        BUS::Error: core::fmt::Debug,
        RST::Error: core::fmt::Debug,
    {
        self.draw_scene();

        let (w, h) = (self.fb.w, self.fb.h);
        let mut y = 0u16;
        while y < h {
            let y1 = (y + TILE_ROWS).min(h);
            display.flush(Window::new(0, y, w, y1), self.fb.rows(y, y1))?;
            y = y1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_set_meter_value_clamps_to_scale() {
        let mut ui = MeterUi::new();
        ui.set_meter_value(250);
        assert_eq!(ui.value(), METER_MAX);
        ui.set_meter_value(-3);
        assert_eq!(ui.value(), METER_MIN);
        ui.set_meter_value(42);
        assert_eq!(ui.value(), 42);
    }

    #[test]
    fn test_needle_sweep_endpoints() {
        let a0 = MeterUi::angle_rad(METER_MIN);
        let a1 = MeterUi::angle_rad(METER_MAX);
        let deg = 180.0 / core::f32::consts::PI;
        assert!(libm::fabsf(a0 * deg - 135.0) < 1e-3);
        assert!(libm::fabsf(a1 * deg - 405.0) < 1e-3);
    }

    #[test]
    fn test_framebuffer_ignores_out_of_bounds_pixels() {
        let mut fb = FrameBuffer::new(8, 8);
        let _ = fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(8, 0), Rgb565::WHITE),
            Pixel(Point::new(3, 2), Rgb565::WHITE),
        ]);
        let row2 = fb.rows(2, 3);
        assert_eq!(row2[3], Rgb565::WHITE.into_storage());
        assert_eq!(fb.rows(0, 1).iter().filter(|&&p| p != 0).count(), 0);
    }

    #[test]
    fn test_rows_are_contiguous_bands() {
        let fb = FrameBuffer::new(360, 360);
        assert_eq!(fb.rows(0, 40).len(), 360 * 40);
        assert_eq!(fb.rows(320, 360).len(), 360 * 40);
        // Full cover in TILE_ROWS bands with no remainder rows lost.
        let mut total = 0;
        let mut y = 0u16;
        while y < 360 {
            let y1 = (y + TILE_ROWS).min(360);
            total += fb.rows(y, y1).len();
            y = y1;
        }
        assert_eq!(total, 360 * 360);
    }
}
