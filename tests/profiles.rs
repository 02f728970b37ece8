// Static wiring rules, checked per board.

use msp3218_pins::board::{esp32s3_devkitc as esp, uno_r3 as uno};
use msp3218_pins::{Board, BoardProfile, NO_PIN, Peripheral, optional_pin};

fn all_distinct(pins: &[u8]) -> bool {
    pins.iter()
        .enumerate()
        .all(|(i, a)| pins[i + 1..].iter().all(|b| a != b))
}

#[test]
fn uno_shares_one_bus() {
    assert!(uno::TFT_CLK == uno::TS_CLK && uno::TS_CLK == uno::SD_CLK);
    assert!(uno::TFT_MISO == uno::TS_MISO && uno::TS_MISO == uno::SD_MISO);
    assert!(uno::TFT_MOSI == uno::TS_MOSI && uno::TS_MOSI == uno::SD_MOSI);
}

#[test]
fn esp32s3_shares_one_bus() {
    assert!(esp::TFT_CLK == esp::TS_CLK && esp::TS_CLK == esp::SD_CLK);
    assert!(esp::TFT_MISO == esp::TS_MISO && esp::TS_MISO == esp::SD_MISO);
    assert!(esp::TFT_MOSI == esp::TS_MOSI && esp::TS_MOSI == esp::SD_MOSI);
}

#[test]
fn chip_selects_stay_off_the_bus() {
    assert!(all_distinct(&[
        uno::TFT_CS,
        uno::TS_CS,
        uno::SD_CS,
        uno::TFT_CLK,
        uno::TFT_MISO,
        uno::TFT_MOSI,
    ]));
    assert!(all_distinct(&[
        esp::TFT_CS,
        esp::TS_CS,
        esp::SD_CS,
        esp::TFT_CLK,
        esp::TFT_MISO,
        esp::TFT_MOSI,
    ]));
}

#[test]
fn clocks_are_positive() {
    for board in Board::ALL {
        let profile = board.profile();
        for peripheral in Peripheral::ALL {
            assert!(profile.spi_hz(peripheral) > 0, "{board} {peripheral}");
        }
    }
}

#[test]
fn touch_interrupt_is_unused() {
    assert_eq!(uno::TS_IRQ, -1);
    assert_eq!(esp::TS_IRQ, NO_PIN);
    assert_eq!(optional_pin(uno::TS_IRQ), None);
    assert_eq!(esp::PROFILE.touch.irq, None);
}

#[test]
fn uno_reference_values() {
    assert_eq!(uno::TFT_CLK, 13);
    assert_eq!(uno::TS_CS, 6);
    assert_eq!(uno::SD_CS, 5);
    assert_eq!(uno::TFT_CS, 10);
    assert_eq!(uno::TFT_SPI_SPD, 4_194_304);
    assert_eq!((uno::I2C_SDA, uno::I2C_SCL), (uno::A4, uno::A5));
    assert_eq!((uno::UART0_RX, uno::UART0_TX), (0, 1));
}

#[test]
fn esp32s3_reference_values() {
    assert_eq!(esp::TFT_CLK, 12);
    assert_eq!(esp::TS_CS, 4);
    assert_eq!(esp::SD_CS, 2);
    assert_eq!(esp::TFT_CS, 10);
    assert_eq!(esp::SD_SPI_SPD, 41_943_040);
    assert_eq!((esp::I2C_SDA, esp::I2C_SCL), (8, 9));
    assert_eq!((esp::UART0_RX, esp::UART0_TX), (20, 19));
}

#[test]
fn every_profile_validates() {
    for board in Board::ALL {
        let profile: BoardProfile = board.profile();
        assert_eq!(profile.validate(), Ok(()), "{board}");
        assert_eq!(profile.spi_gpio_count(), 9, "{board}");
    }
}

#[test]
fn profiles_are_independent() {
    assert_ne!(uno::PROFILE, esp::PROFILE);
    assert_ne!(uno::PROFILE.bus(), esp::PROFILE.bus());
}

#[cfg(all(feature = "esp32s3-devkitc", not(feature = "uno-r3")))]
#[test]
fn esp32s3_build_selects_esp32s3() {
    assert_eq!(msp3218_pins::ACTIVE.board, Board::Esp32S3DevKitC);
    assert_eq!(msp3218_pins::TFT_CLK, esp::TFT_CLK);
    assert_eq!(msp3218_pins::SD_SPI_SPD, esp::SD_SPI_SPD);
}

#[cfg(all(feature = "uno-r3", not(feature = "esp32s3-devkitc")))]
#[test]
fn uno_build_selects_uno() {
    assert_eq!(msp3218_pins::ACTIVE.board, Board::UnoR3);
    assert_eq!(msp3218_pins::TFT_CLK, uno::TFT_CLK);
}
