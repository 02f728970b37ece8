//! MSP3218 Board Support
//!
//! Maps the MSP3218 module (ILI9341 TFT, XPT2046 touch panel, SD socket)
//! onto the GPIOs of each supported MCU board. All three systems sit on
//! the same SPI bus, so a profile needs 9 GPIO pins instead of the 16
//! the module documentation suggests.
//!
//! Both board tables are always compiled; the `uno-r3` or
//! `esp32s3-devkitc` feature selects which one is re-exported as
//! [`active`].

pub mod error;
pub mod esp32s3_devkitc;
#[cfg(feature = "esp-hal")]
pub mod hal;
pub mod profile;
pub mod uno_r3;

pub use error::ConfigError;
pub use profile::{
    AuxPins, BoardProfile, DisplayPins, Peripheral, PinRole, SdPins, SpiBusPins, TouchPins,
};

#[cfg(all(feature = "uno-r3", feature = "esp32s3-devkitc"))]
compile_error!("features `uno-r3` and `esp32s3-devkitc` are mutually exclusive");

#[cfg(all(feature = "uno-r3", not(feature = "esp32s3-devkitc")))]
pub use uno_r3 as active;

#[cfg(all(feature = "esp32s3-devkitc", not(feature = "uno-r3")))]
pub use esp32s3_devkitc as active;

/// Profile selected at build time.
#[cfg(any(feature = "uno-r3", feature = "esp32s3-devkitc"))]
pub const ACTIVE: BoardProfile = active::PROFILE;

/// GPIO number as the Arduino core and esp-hal count them.
pub type Pin = u8;

/// Raw pin value meaning "not connected".
pub const NO_PIN: i8 = -1;

/// Convert a raw pin constant that may carry the [`NO_PIN`] sentinel.
pub const fn optional_pin(raw: i8) -> Option<Pin> {
    if raw < 0 { None } else { Some(raw as Pin) }
}

const MHZ: u32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    UnoR3,
    Esp32S3DevKitC,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::UnoR3, Board::Esp32S3DevKitC];

    pub const fn name(self) -> &'static str {
        match self {
            Board::UnoR3 => "uno-r3",
            Board::Esp32S3DevKitC => "esp32s3-devkitc",
        }
    }

    pub const fn mcu(self) -> &'static str {
        match self {
            Board::UnoR3 => "ATmega328P",
            Board::Esp32S3DevKitC => "ESP32-S3-N16R8",
        }
    }

    /// Highest SPI clock the MCU can drive (Uno: F_CPU / 2).
    pub const fn max_spi_hz(self) -> u32 {
        match self {
            Board::UnoR3 => 8 * MHZ,
            Board::Esp32S3DevKitC => 80 * MHZ,
        }
    }

    /// Whether `pin` is a usable GPIO on this board.
    ///
    /// On the Uno the analog header A0..A5 continues the digital numbering
    /// at 14..19. The ESP32-S3 has no GPIO22..25, and on the N16R8 module
    /// GPIO26..32 carry the SPI flash and GPIO33..37 the octal PSRAM.
    pub const fn is_valid_gpio(self, pin: Pin) -> bool {
        match self {
            Board::UnoR3 => pin <= 19,
            Board::Esp32S3DevKitC => pin <= 21 || (pin >= 38 && pin <= 48),
        }
    }

    /// Whether `pin` can drive a variable-duty output (backlight dimming).
    pub const fn is_pwm_capable(self, pin: Pin) -> bool {
        match self {
            Board::UnoR3 => matches!(pin, 3 | 5 | 6 | 9 | 10 | 11),
            // LEDC can be routed to any output through the GPIO matrix
            Board::Esp32S3DevKitC => self.is_valid_gpio(pin),
        }
    }

    pub const fn profile(self) -> BoardProfile {
        match self {
            Board::UnoR3 => uno_r3::PROFILE,
            Board::Esp32S3DevKitC => esp32s3_devkitc::PROFILE,
        }
    }
}

impl core::fmt::Display for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Board {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("uno-r3") || s.eq_ignore_ascii_case("uno") {
            Ok(Board::UnoR3)
        } else if s.eq_ignore_ascii_case("esp32s3-devkitc")
            || s.eq_ignore_ascii_case("esp32s3")
            || s.eq_ignore_ascii_case("esp32-s3")
        {
            Ok(Board::Esp32S3DevKitC)
        } else {
            Err(ConfigError::UnknownBoard)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_unused() {
        assert_eq!(optional_pin(NO_PIN), None);
        assert_eq!(optional_pin(-7), None);
        assert_eq!(optional_pin(0), Some(0));
        assert_eq!(optional_pin(21), Some(21));
    }

    #[test]
    fn board_names_parse_back() {
        for board in Board::ALL {
            assert_eq!(board.name().parse::<Board>(), Ok(board));
            assert_eq!(board.to_string(), board.name());
        }
        assert_eq!("UNO".parse::<Board>(), Ok(Board::UnoR3));
        assert_eq!(" ESP32-S3 ".parse::<Board>(), Ok(Board::Esp32S3DevKitC));
        assert_eq!("rp2040".parse::<Board>(), Err(ConfigError::UnknownBoard));
    }

    #[test]
    fn uno_gpio_range() {
        assert!(Board::UnoR3.is_valid_gpio(0));
        assert!(Board::UnoR3.is_valid_gpio(19));
        assert!(!Board::UnoR3.is_valid_gpio(20));
        assert!(Board::UnoR3.is_pwm_capable(9));
        assert!(!Board::UnoR3.is_pwm_capable(8));
    }

    #[test]
    fn esp32s3_gpio_gap() {
        let b = Board::Esp32S3DevKitC;
        assert!(b.is_valid_gpio(21));
        for pin in 22..=37 {
            assert!(!b.is_valid_gpio(pin), "GPIO{pin}");
            assert!(!b.is_pwm_capable(pin), "GPIO{pin}");
        }
        assert!(b.is_valid_gpio(38));
        assert!(b.is_valid_gpio(48));
        assert!(!b.is_valid_gpio(49));
        assert!(b.is_pwm_capable(5));
    }

    #[test]
    fn profile_lookup_matches_board() {
        for board in Board::ALL {
            assert_eq!(board.profile().board, board);
        }
    }

    #[cfg(any(feature = "uno-r3", feature = "esp32s3-devkitc"))]
    #[test]
    fn active_profile_is_one_of_the_boards() {
        assert!(Board::ALL.iter().any(|b| b.profile() == ACTIVE));
        assert_eq!(active::PROFILE, ACTIVE);
    }
}
