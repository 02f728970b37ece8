//! Arduino Uno R3 (ATmega328P)
//!
//! Pin |     Function    |      Notes
//! ----+-----------------+----------------------------------
//!  0  | UART0 RX        | USB serial
//!  1  | UART0 TX        | USB serial
//!  5  | SD CS           | SD card chip select
//!  6  | TS CS           | Touch panel chip select
//!  7  | TFT RST         | MSP3218 needs reset
//!  8  | TFT DC          | Data/Command select
//!  9  | TFT LED         | Backlight (PWM)
//! 10  | TFT CS          | Standard SS (PB2)
//! 11  | SPI MOSI        | Shared (PB3)
//! 12  | SPI MISO        | Shared (PB4)
//! 13  | SPI SCK         | Shared (PB5)
//! A4  | I2C SDA         |
//! A5  | I2C SCL         |

use super::profile::{AuxPins, BoardProfile, DisplayPins, SdPins, SpiBusPins, TouchPins};
use super::{Board, NO_PIN, Pin, optional_pin};

const MIB: u32 = 1024 * 1024;

// Analog header, numbered after D13
pub const A4: Pin = 18;
pub const A5: Pin = 19;

// ----- ILI9341 TFT -----
pub const TFT_CLK: Pin = 13;
pub const TFT_MISO: Pin = 12;
pub const TFT_MOSI: Pin = 11;
pub const TFT_CS: Pin = 10;
pub const TFT_DC: Pin = 8;
pub const TFT_RST: Pin = 7;
pub const TFT_LED: Pin = 9;
pub const TFT_SPI_SPD: u32 = 4 * MIB;

// ----- XPT2046 Touch (shares TFT bus) -----
pub const TS_CLK: Pin = TFT_CLK;
pub const TS_MISO: Pin = TFT_MISO;
pub const TS_MOSI: Pin = TFT_MOSI;
pub const TS_CS: Pin = 6;
pub const TS_IRQ: i8 = NO_PIN; // not wired, panel is polled
pub const TS_SPI_SPD: u32 = 2 * MIB;

// ----- SD Card (shares TFT bus) -----
pub const SD_CLK: Pin = TFT_CLK;
pub const SD_MISO: Pin = TFT_MISO;
pub const SD_MOSI: Pin = TFT_MOSI;
pub const SD_CS: Pin = 5;
pub const SD_SPI_SPD: u32 = 4 * MIB;

// ----- Board defaults -----
pub const I2C_SDA: Pin = A4;
pub const I2C_SCL: Pin = A5;
pub const UART0_RX: Pin = 0;
pub const UART0_TX: Pin = 1;

pub const PROFILE: BoardProfile = BoardProfile {
    board: Board::UnoR3,
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

const _: () = assert!(PROFILE.validate().is_ok(), "invalid Uno R3 pin map");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_wiring() {
        assert_eq!(TFT_CLK, 13);
        assert_eq!(TFT_CS, 10);
        assert_eq!(TS_CS, 6);
        assert_eq!(SD_CS, 5);
        assert_eq!(TFT_SPI_SPD, 4_194_304);
        assert_eq!(TS_SPI_SPD, 2_097_152);
        assert_eq!(PROFILE.touch.irq, None);
    }
}
