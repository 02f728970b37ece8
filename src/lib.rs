// pin maps for the MSP3218 display/touch/SD module (ILI9341 + XPT2046)
//
// One constant table per board; the board is picked with a Cargo feature.
// Display, touch and SD card share one SPI bus and differ only in CS line
// and clock cap.

#![cfg_attr(not(test), no_std)]

pub mod board;

pub use board::{
    AuxPins, Board, BoardProfile, ConfigError, DisplayPins, NO_PIN, Peripheral, Pin, PinRole,
    SdPins, SpiBusPins, TouchPins, optional_pin,
};

#[cfg(any(feature = "uno-r3", feature = "esp32s3-devkitc"))]
pub use board::active::*;

#[cfg(any(feature = "uno-r3", feature = "esp32s3-devkitc"))]
pub use board::ACTIVE;
