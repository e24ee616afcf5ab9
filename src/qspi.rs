// QSPI transaction framing for the ST77916 panel.
//
// Every transaction starts with a marker byte on a single line, followed by a
// 24-bit address whose middle byte carries the panel-level command:
//
//   [marker 8-bit] [0x00] [cmd] [0x00]  ->  marker << 24 | cmd << 8
//
// Command-class transactions (marker 0x02) keep the data phase on one line;
// pixel-class transactions (marker 0x32) move the data phase to all four lines.

/// Marker byte for register/command writes (single-line data phase).
pub const OPCODE_WRITE_CMD: u8 = 0x02;
/// Marker byte for pixel writes (quad-line data phase).
pub const OPCODE_WRITE_COLOR: u8 = 0x32;

/// 24-bit address field for a panel command: bits [15:8] carry the opcode,
/// bits [23:16] and [7:0] stay zero.
#[inline]
pub const fn command_address(cmd: u8) -> u32 {
    (cmd as u32) << 8
}

/// The full 32-bit header as it appears on the wire, MSB first.
#[inline]
pub const fn frame_header(marker: u8, cmd: u8) -> [u8; 4] {
    [marker, 0x00, cmd, 0x00]
}

/// Transport seam for the panel driver.
///
/// One implementation drives the real QSPI peripheral; tests substitute a
/// recording mock. Implementations must not buffer: when a write returns
/// `Ok`, the bytes have physically left the controller (DMA drained), so the
/// caller may release the buffer it passed in. Transport refusals are returned
/// verbatim; no retry happens at this layer.
pub trait QspiBus {
    type Error;

    /// Command write: marker `0x02`, `cmd` in the address field, parameter
    /// bytes (possibly none) on a single data line.
    fn write_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error>;

    /// Pixel write: marker `0x32`, `cmd` in the address field, data bytes on
    /// four lines. Blocks until the transfer has completed.
    fn write_pixels(&mut self, cmd: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Largest data phase a single transaction may carry, in bytes.
    fn max_transfer_bytes(&self) -> usize;
}

#[cfg(feature = "esp32s3-lcd146")]
mod esp32s3 {
    use super::{command_address, QspiBus, OPCODE_WRITE_CMD, OPCODE_WRITE_COLOR};
    use esp_hal::spi::master::{Address, Command, SpiDmaBus};
    use esp_hal::spi::DataMode;
    use esp_hal::Blocking;

    /// `QspiBus` over an esp-hal half-duplex DMA SPI bus.
    ///
    /// CS is hardware-controlled (`with_cs`), so a whole transaction —
    /// command, address and data phase — stays inside one CS assertion.
    /// `half_duplex_write` on the blocking bus returns only once the DMA
    /// transfer has drained, which is exactly the completion contract
    /// `QspiBus` requires.
    pub struct SpiQspiBus<'a> {
        spi: SpiDmaBus<'a, Blocking>,
        max_transfer: usize,
    }

    impl<'a> SpiQspiBus<'a> {
        /// `max_transfer` must not exceed the DMA buffer handed to the bus.
        pub fn new(spi: SpiDmaBus<'a, Blocking>, max_transfer: usize) -> Self {
            Self { spi, max_transfer }
        }
    }

    impl QspiBus for SpiQspiBus<'_> {
        type Error = esp_hal::spi::Error;

        fn write_command(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
            self.spi.half_duplex_write(
                DataMode::Single,
                Command::_8Bit(OPCODE_WRITE_CMD as u16, DataMode::Single),
                Address::_24Bit(command_address(cmd), DataMode::Single),
                0,
                params,
            )
        }

        fn write_pixels(&mut self, cmd: u8, data: &[u8]) -> Result<(), Self::Error> {
            self.spi.half_duplex_write(
                DataMode::Quad,
                Command::_8Bit(OPCODE_WRITE_COLOR as u16, DataMode::Single),
                Address::_24Bit(command_address(cmd), DataMode::Single),
                0,
                data,
            )
        }

        fn max_transfer_bytes(&self) -> usize {
            self.max_transfer
        }
    }
}

#[cfg(feature = "esp32s3-lcd146")]
pub use esp32s3::SpiQspiBus;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_command_address_places_opcode_in_middle_byte() {
        assert_eq!(command_address(0x2A), 0x00_2A_00);
        assert_eq!(command_address(0x11), 0x00_11_00);
        assert_eq!(command_address(0x00), 0x00_00_00);
    }

    #[test]
    fn test_frame_header_layout() {
        // Command class: 0x02 marker, opcode in byte 2.
        assert_eq!(frame_header(OPCODE_WRITE_CMD, 0x2A), [0x02, 0x00, 0x2A, 0x00]);
        // Pixel class: 0x32 marker.
        assert_eq!(frame_header(OPCODE_WRITE_COLOR, 0x2C), [0x32, 0x00, 0x2C, 0x00]);
    }

    #[test]
    fn test_frame_header_matches_address_field() {
        // The header is the marker byte followed by the 24-bit address,
        // MSB first; the two encodings must agree.
        for cmd in [0x2Au8, 0x2B, 0x2C, 0x3C, 0x36, 0xF0] {
            let hdr = frame_header(OPCODE_WRITE_CMD, cmd);
            let addr = command_address(cmd);
            assert_eq!(
                &hdr[1..],
                &addr.to_be_bytes()[1..],
                "header and address field disagree for 0x{cmd:02X}"
            );
        }
    }
}
