// esp-hal SPI settings for the ESP32-S3 profile
//
// The three devices share SPI2 but not a clock rate; whoever owns the bus
// applies the right config before asserting a CS line.

use esp_hal::spi::{Mode, master::Config};
use esp_hal::time::Rate;

use super::esp32s3_devkitc::PROFILE;
use super::profile::{BoardProfile, Peripheral};

/// Bus config capped at `peripheral`'s clock, SPI mode 0 (all three parts).
pub fn spi_config(profile: &BoardProfile, peripheral: Peripheral) -> Config {
    Config::default()
        .with_frequency(Rate::from_hz(profile.spi_hz(peripheral)))
        .with_mode(Mode::_0)
}

pub fn display_config() -> Config {
    spi_config(&PROFILE, Peripheral::Display)
}

pub fn touch_config() -> Config {
    spi_config(&PROFILE, Peripheral::Touch)
}

pub fn sd_config() -> Config {
    spi_config(&PROFILE, Peripheral::SdCard)
}
