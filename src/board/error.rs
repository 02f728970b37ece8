// Misconfiguration of a pin profile.
//
// Every variant is detectable from the constant tables alone, so the board
// modules check them in a const context and a bad table fails the build.

use super::Pin;
use super::profile::{Peripheral, PinRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A peripheral's CLK/MISO/MOSI differ from the display's.
    BusMismatch { peripheral: Peripheral },
    /// Two roles that need their own line were given the same pin.
    PinConflict { first: PinRole, second: PinRole, pin: Pin },
    /// The pin does not exist on the board.
    InvalidPin { role: PinRole, pin: Pin },
    /// Backlight pin cannot do PWM.
    NotPwmCapable { pin: Pin },
    ZeroClock { peripheral: Peripheral },
    ClockTooHigh { peripheral: Peripheral, hz: u32, max_hz: u32 },
    UnknownBoard,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            ConfigError::BusMismatch { peripheral } => {
                write!(f, "{peripheral} is not on the shared SPI bus")
            }
            ConfigError::PinConflict { first, second, pin } => {
                write!(f, "{first} and {second} both use pin {pin}")
            }
            ConfigError::InvalidPin { role, pin } => {
                write!(f, "{role}: pin {pin} does not exist on this board")
            }
            ConfigError::NotPwmCapable { pin } => {
                write!(f, "TFT_LED: pin {pin} is not PWM capable")
            }
            ConfigError::ZeroClock { peripheral } => {
                write!(f, "{peripheral} SPI clock is zero")
            }
            ConfigError::ClockTooHigh { peripheral, hz, max_hz } => {
                write!(f, "{peripheral} SPI clock {hz} Hz exceeds {max_hz} Hz")
            }
            ConfigError::UnknownBoard => f.write_str("unknown board"),
        }
    }
}

impl core::error::Error for ConfigError {}
