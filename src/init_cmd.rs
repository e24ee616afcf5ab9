// ST77916 power-on command table.
//
// This is the manufacturer's full initialization sequence, replayed verbatim,
// top to bottom, exactly once per power-on. Most entries poke bank-switched
// vendor registers (the 0xF0/0xF1/0xF2 writes select banks, so the same
// opcode can appear with different meanings); only the terminal block uses
// documented MIPI-DCS commands. Order matters throughout: later entries
// assume the banks earlier entries unlocked.

/// One step of the power-on sequence.
pub struct InitCommand {
    pub opcode: u8,
    pub params: &'static [u8],
    /// Settle time after the write; only sleep-exit needs one.
    pub delay_ms: u16,
}

/// Longest parameter run the panel accepts in one command write.
pub const MAX_PARAM_LEN: usize = 36;

pub static LCD_INIT_CMD: &[InitCommand] = &[
    // Command set unlock + analog/power configuration
    InitCommand { opcode: 0xF0, params: &[0x28], delay_ms: 0 },
    InitCommand { opcode: 0xF2, params: &[0x28], delay_ms: 0 },
    InitCommand { opcode: 0x73, params: &[0xF0], delay_ms: 0 },
    InitCommand { opcode: 0x7C, params: &[0xD1], delay_ms: 0 },
    InitCommand { opcode: 0x83, params: &[0xE0], delay_ms: 0 },
    InitCommand { opcode: 0x84, params: &[0x61], delay_ms: 0 },
    InitCommand { opcode: 0xF2, params: &[0x82], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xF1, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xB0, params: &[0x69], delay_ms: 0 },
    InitCommand { opcode: 0xB1, params: &[0x4A], delay_ms: 0 },
    InitCommand { opcode: 0xB2, params: &[0x2F], delay_ms: 0 },
    InitCommand { opcode: 0xB3, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xB4, params: &[0x69], delay_ms: 0 },
    InitCommand { opcode: 0xB5, params: &[0x45], delay_ms: 0 },
    InitCommand { opcode: 0xB6, params: &[0xAB], delay_ms: 0 },
    InitCommand { opcode: 0xB7, params: &[0x41], delay_ms: 0 },
    InitCommand { opcode: 0xB8, params: &[0x86], delay_ms: 0 },
    InitCommand { opcode: 0xB9, params: &[0x15], delay_ms: 0 },
    InitCommand { opcode: 0xBA, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xBB, params: &[0x08], delay_ms: 0 },
    InitCommand { opcode: 0xBC, params: &[0x08], delay_ms: 0 },
    InitCommand { opcode: 0xBD, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xBE, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xBF, params: &[0x07], delay_ms: 0 },
    InitCommand { opcode: 0xC0, params: &[0x80], delay_ms: 0 },
    InitCommand { opcode: 0xC1, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xC2, params: &[0x37], delay_ms: 0 },
    InitCommand { opcode: 0xC3, params: &[0x80], delay_ms: 0 },
    InitCommand { opcode: 0xC4, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xC5, params: &[0x37], delay_ms: 0 },
    InitCommand { opcode: 0xC6, params: &[0xA9], delay_ms: 0 },
    InitCommand { opcode: 0xC7, params: &[0x41], delay_ms: 0 },
    InitCommand { opcode: 0xC8, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xC9, params: &[0xA9], delay_ms: 0 },
    InitCommand { opcode: 0xCA, params: &[0x41], delay_ms: 0 },
    InitCommand { opcode: 0xCB, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xCC, params: &[0x7F], delay_ms: 0 },
    InitCommand { opcode: 0xCD, params: &[0x7F], delay_ms: 0 },
    InitCommand { opcode: 0xCE, params: &[0xFF], delay_ms: 0 },
    InitCommand { opcode: 0xD0, params: &[0x91], delay_ms: 0 },
    InitCommand { opcode: 0xD1, params: &[0x68], delay_ms: 0 },
    InitCommand { opcode: 0xD2, params: &[0x68], delay_ms: 0 },
    InitCommand { opcode: 0xF5, params: &[0x00, 0xA5], delay_ms: 0 },
    InitCommand { opcode: 0xF1, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x02], delay_ms: 0 },

    // Positive / negative gamma curves
    InitCommand { opcode: 0xE0, params: &[0xF0, 0x10, 0x18, 0x0D, 0x0C, 0x38, 0x3E, 0x44, 0x51, 0x39, 0x15, 0x15, 0x30, 0x34], delay_ms: 0 },
    InitCommand { opcode: 0xE1, params: &[0xF0, 0x0F, 0x17, 0x0D, 0x0B, 0x07, 0x3E, 0x33, 0x51, 0x39, 0x15, 0x15, 0x30, 0x34], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xF3, params: &[0x10], delay_ms: 0 },

    // Source/VCOM trim bank
    InitCommand { opcode: 0xE0, params: &[0x08], delay_ms: 0 },
    InitCommand { opcode: 0xE1, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xE2, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xE3, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xE4, params: &[0xE0], delay_ms: 0 },
    InitCommand { opcode: 0xE5, params: &[0x06], delay_ms: 0 },
    InitCommand { opcode: 0xE6, params: &[0x21], delay_ms: 0 },
    InitCommand { opcode: 0xE7, params: &[0x03], delay_ms: 0 },
    InitCommand { opcode: 0xE8, params: &[0x05], delay_ms: 0 },
    InitCommand { opcode: 0xE9, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0xEA, params: &[0xE9], delay_ms: 0 },
    InitCommand { opcode: 0xEB, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xEC, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xED, params: &[0x14], delay_ms: 0 },
    InitCommand { opcode: 0xEE, params: &[0xFF], delay_ms: 0 },
    InitCommand { opcode: 0xEF, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xF8, params: &[0xFF], delay_ms: 0 },
    InitCommand { opcode: 0xF9, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xFA, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xFB, params: &[0x30], delay_ms: 0 },
    InitCommand { opcode: 0xFC, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xFD, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xFE, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xFF, params: &[0x00], delay_ms: 0 },

    // Gate driver bank A
    InitCommand { opcode: 0x60, params: &[0x40], delay_ms: 0 },
    InitCommand { opcode: 0x61, params: &[0x05], delay_ms: 0 },
    InitCommand { opcode: 0x62, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x63, params: &[0x42], delay_ms: 0 },
    InitCommand { opcode: 0x64, params: &[0xDA], delay_ms: 0 },
    InitCommand { opcode: 0x65, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x66, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x67, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x68, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x69, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x6A, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x6B, params: &[0x00], delay_ms: 0 },

    // Gate driver bank B
    InitCommand { opcode: 0x70, params: &[0x40], delay_ms: 0 },
    InitCommand { opcode: 0x71, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0x72, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x73, params: &[0x42], delay_ms: 0 },
    InitCommand { opcode: 0x74, params: &[0xD9], delay_ms: 0 },
    InitCommand { opcode: 0x75, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x76, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x77, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x78, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x79, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x7A, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x7B, params: &[0x00], delay_ms: 0 },

    // Gate output mapping
    InitCommand { opcode: 0x80, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0x81, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x82, params: &[0x07], delay_ms: 0 },
    InitCommand { opcode: 0x83, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0x84, params: &[0xD7], delay_ms: 0 },
    InitCommand { opcode: 0x85, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0x86, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x87, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x88, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0x89, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x8A, params: &[0x09], delay_ms: 0 },
    InitCommand { opcode: 0x8B, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0x8C, params: &[0xD9], delay_ms: 0 },
    InitCommand { opcode: 0x8D, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0x8E, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x8F, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x90, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0x91, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x92, params: &[0x0B], delay_ms: 0 },
    InitCommand { opcode: 0x93, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0x94, params: &[0xDB], delay_ms: 0 },
    InitCommand { opcode: 0x95, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0x96, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x97, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x98, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0x99, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x9A, params: &[0x0D], delay_ms: 0 },
    InitCommand { opcode: 0x9B, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0x9C, params: &[0xDD], delay_ms: 0 },
    InitCommand { opcode: 0x9D, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0x9E, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x9F, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xA0, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0xA1, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xA2, params: &[0x06], delay_ms: 0 },
    InitCommand { opcode: 0xA3, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0xA4, params: &[0xD6], delay_ms: 0 },
    InitCommand { opcode: 0xA5, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0xA6, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xA7, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xA8, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0xA9, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xAA, params: &[0x08], delay_ms: 0 },
    InitCommand { opcode: 0xAB, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0xAC, params: &[0xD8], delay_ms: 0 },
    InitCommand { opcode: 0xAD, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0xAE, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xAF, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xB0, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0xB1, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xB2, params: &[0x0A], delay_ms: 0 },
    InitCommand { opcode: 0xB3, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0xB4, params: &[0xDA], delay_ms: 0 },
    InitCommand { opcode: 0xB5, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0xB6, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xB7, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xB8, params: &[0x48], delay_ms: 0 },
    InitCommand { opcode: 0xB9, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xBA, params: &[0x0C], delay_ms: 0 },
    InitCommand { opcode: 0xBB, params: &[0x02], delay_ms: 0 },
    InitCommand { opcode: 0xBC, params: &[0xDC], delay_ms: 0 },
    InitCommand { opcode: 0xBD, params: &[0x04], delay_ms: 0 },
    InitCommand { opcode: 0xBE, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0xBF, params: &[0x00], delay_ms: 0 },

    // Gate timing banks
    InitCommand { opcode: 0xC0, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xC1, params: &[0x47], delay_ms: 0 },
    InitCommand { opcode: 0xC2, params: &[0x56], delay_ms: 0 },
    InitCommand { opcode: 0xC3, params: &[0x65], delay_ms: 0 },
    InitCommand { opcode: 0xC4, params: &[0x74], delay_ms: 0 },
    InitCommand { opcode: 0xC5, params: &[0x88], delay_ms: 0 },
    InitCommand { opcode: 0xC6, params: &[0x99], delay_ms: 0 },
    InitCommand { opcode: 0xC7, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xC8, params: &[0xBB], delay_ms: 0 },
    InitCommand { opcode: 0xC9, params: &[0xAA], delay_ms: 0 },
    InitCommand { opcode: 0xD0, params: &[0x10], delay_ms: 0 },
    InitCommand { opcode: 0xD1, params: &[0x47], delay_ms: 0 },
    InitCommand { opcode: 0xD2, params: &[0x56], delay_ms: 0 },
    InitCommand { opcode: 0xD3, params: &[0x65], delay_ms: 0 },
    InitCommand { opcode: 0xD4, params: &[0x74], delay_ms: 0 },
    InitCommand { opcode: 0xD5, params: &[0x88], delay_ms: 0 },
    InitCommand { opcode: 0xD6, params: &[0x99], delay_ms: 0 },
    InitCommand { opcode: 0xD7, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xD8, params: &[0xBB], delay_ms: 0 },
    InitCommand { opcode: 0xD9, params: &[0xAA], delay_ms: 0 },

    // Back to command set 0
    InitCommand { opcode: 0xF3, params: &[0x01], delay_ms: 0 },
    InitCommand { opcode: 0xF0, params: &[0x00], delay_ms: 0 },

    // Pixel format, scan order, tearing, inversion, wake, display on
    InitCommand { opcode: 0x36, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x3A, params: &[0x05], delay_ms: 0 },
    InitCommand { opcode: 0x35, params: &[0x00], delay_ms: 0 },
    InitCommand { opcode: 0x21, params: &[], delay_ms: 0 },
    InitCommand { opcode: 0x11, params: &[], delay_ms: 120 },
    InitCommand { opcode: 0x29, params: &[], delay_ms: 0 },
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_table_length() {
        assert_eq!(LCD_INIT_CMD.len(), 192);
    }

    #[test]
    fn test_params_within_hardware_limit() {
        for (i, cmd) in LCD_INIT_CMD.iter().enumerate() {
            assert!(
                cmd.params.len() <= MAX_PARAM_LEN,
                "entry {i} (0x{:02X}) carries {} parameter bytes",
                cmd.opcode,
                cmd.params.len()
            );
        }
    }

    #[test]
    fn test_terminal_block_order() {
        // Scan order, pixel format, tearing, inversion, wake, display on --
        // the panel only accepts these after the vendor banks are programmed,
        // and sleep-exit must come right before display-on.
        let tail: std::vec::Vec<u8> = LCD_INIT_CMD
            .iter()
            .rev()
            .take(6)
            .rev()
            .map(|c| c.opcode)
            .collect();
        assert_eq!(tail, [0x36, 0x3A, 0x35, 0x21, 0x11, 0x29]);
    }

    #[test]
    fn test_sleep_exit_settle_time() {
        let slpout = LCD_INIT_CMD.iter().find(|c| c.opcode == 0x11).unwrap();
        assert!(slpout.delay_ms >= 120, "sleep-exit needs at least 120 ms");
        assert!(slpout.params.is_empty());
    }

    #[test]
    fn test_only_sleep_exit_delays() {
        for cmd in LCD_INIT_CMD {
            if cmd.opcode != 0x11 {
                assert_eq!(cmd.delay_ms, 0, "unexpected delay on 0x{:02X}", cmd.opcode);
            }
        }
    }

    #[test]
    fn test_pixel_format_is_rgb565() {
        let colmod = LCD_INIT_CMD.iter().find(|c| c.opcode == 0x3A).unwrap();
        assert_eq!(colmod.params, &[0x05]);
    }

    #[test]
    fn test_gamma_curves_fully_specified() {
        // The two 14-byte gamma tables are the longest entries.
        let longest = LCD_INIT_CMD.iter().map(|c| c.params.len()).max().unwrap();
        assert_eq!(longest, 14);
        let gamma: std::vec::Vec<_> = LCD_INIT_CMD
            .iter()
            .filter(|c| c.params.len() == 14)
            .collect();
        assert_eq!(gamma.len(), 2);
        assert_eq!(gamma[0].opcode, 0xE0);
        assert_eq!(gamma[1].opcode, 0xE1);
    }
}
