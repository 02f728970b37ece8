//! ESP32-S3-DevKitC-1 (ESP32-S3-N16R8)
//!
//! The bus sits on the default FSPI (SPI2) pins so the IO MUX can route it
//! without the GPIO matrix.
//!
//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  2   | SD CS           | SD card chip select
//!  4   | TS CS           | Touch panel chip select
//!  5   | TFT LED         | Backlight (LEDC PWM)
//!  6   | TFT RST         | MSP3218 needs reset
//!  7   | TFT DC          | Data/Command select
//!  8   | I2C SDA         |
//!  9   | I2C SCL         |
//! 10   | TFT CS          | FSPI SS
//! 11   | SPI MOSI        | Shared (FSPI)
//! 12   | SPI SCK         | Shared (FSPI)
//! 13   | SPI MISO        | Shared (FSPI)
//! 19   | UART0 TX        | USB serial
//! 20   | UART0 RX        | USB serial

use super::profile::{AuxPins, BoardProfile, DisplayPins, SdPins, SpiBusPins, TouchPins};
use super::{Board, NO_PIN, Pin, optional_pin};

const MIB: u32 = 1024 * 1024;

// ----- ILI9341 TFT -----
pub const TFT_CLK: Pin = 12;
pub const TFT_MISO: Pin = 13;
pub const TFT_MOSI: Pin = 11;
pub const TFT_CS: Pin = 10;
pub const TFT_DC: Pin = 7;
pub const TFT_RST: Pin = 6;
pub const TFT_LED: Pin = 5;

// The extra capacitance of touch + SD on the same lines (and breadboard
// wiring) caps the display clock below what it manages alone on a PCB.
pub const TFT_SPI_SPD: u32 = 35 * MIB;
pub const TFT_SPI_SPD_SOLO: u32 = 40 * MIB;

// ----- XPT2046 Touch (shares TFT bus) -----
pub const TS_CLK: Pin = TFT_CLK;
pub const TS_MISO: Pin = TFT_MISO;
pub const TS_MOSI: Pin = TFT_MOSI;
pub const TS_CS: Pin = 4;
pub const TS_IRQ: i8 = NO_PIN; // not wired, panel is polled
pub const TS_SPI_SPD: u32 = 2 * MIB;

// ----- SD Card (shares TFT bus) -----
pub const SD_CLK: Pin = TFT_CLK;
pub const SD_MISO: Pin = TFT_MISO;
pub const SD_MOSI: Pin = TFT_MOSI;
pub const SD_CS: Pin = 2;
pub const SD_SPI_SPD: u32 = 40 * MIB;

// ----- Board defaults -----
pub const I2C_SDA: Pin = 8;
pub const I2C_SCL: Pin = 9;
pub const UART0_RX: Pin = 20;
pub const UART0_TX: Pin = 19;

pub const PROFILE: BoardProfile = BoardProfile {
    board: Board::Esp32S3DevKitC,
    display: DisplayPins {
        bus: SpiBusPins {
            clk: TFT_CLK,
            miso: TFT_MISO,
            mosi: TFT_MOSI,
        },
        cs: TFT_CS,
        dc: TFT_DC,
        rst: TFT_RST,
        led: TFT_LED,
        spi_hz: TFT_SPI_SPD,
    },
    touch: TouchPins {
        bus: SpiBusPins {
            clk: TS_CLK,
            miso: TS_MISO,
            mosi: TS_MOSI,
        },
        cs: TS_CS,
        irq: optional_pin(TS_IRQ),
        spi_hz: TS_SPI_SPD,
    },
    sd: SdPins {
        bus: SpiBusPins {
            clk: SD_CLK,
            miso: SD_MISO,
            mosi: SD_MOSI,
        },
        cs: SD_CS,
        spi_hz: SD_SPI_SPD,
    },
    aux: AuxPins {
        i2c_sda: I2C_SDA,
        i2c_scl: I2C_SCL,
        uart0_rx: UART0_RX,
        uart0_tx: UART0_TX,
    },
};

const _: () = assert!(PROFILE.validate().is_ok(), "invalid ESP32-S3-DevKitC pin map");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_wiring() {
        assert_eq!(TFT_CLK, 12);
        assert_eq!(TFT_CS, 10);
        assert_eq!(TS_CS, 4);
        assert_eq!(SD_CS, 2);
        assert_eq!(SD_SPI_SPD, 41_943_040);
        assert_eq!(TFT_SPI_SPD, 36_700_160);
    }

    #[test]
    fn solo_display_clock_still_fits() {
        let mut p = PROFILE;
        p.display.spi_hz = TFT_SPI_SPD_SOLO;
        assert!(TFT_SPI_SPD_SOLO > TFT_SPI_SPD);
        assert_eq!(p.validate(), Ok(()));
    }
}
