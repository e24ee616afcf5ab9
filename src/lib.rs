#![no_std]

extern crate alloc;

pub mod color;
pub mod init_cmd;
pub mod qspi;
pub mod st77916;
pub mod ui;

#[cfg(feature = "esp32s3-lcd146")]
pub mod display;
#[cfg(feature = "esp32s3-lcd146")]
pub mod wiring;
