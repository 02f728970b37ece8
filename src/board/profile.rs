//! Typed view over a board's pin constants.
//!
//! The raw `TFT_*` / `TS_*` / `SD_*` constants stay the source of truth;
//! [`BoardProfile`] groups them per peripheral so the shared-bus and
//! distinct-CS rules can be checked in one place, at compile time.

use log::info;

use super::{Board, ConfigError, Pin};

// `?` is not available in const fn
macro_rules! const_try {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => return Err(e),
        }
    };
}

/// The three SPI devices on the MSP3218.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peripheral {
    Display,
    Touch,
    SdCard,
}

impl Peripheral {
    pub const ALL: [Peripheral; 3] = [Peripheral::Display, Peripheral::Touch, Peripheral::SdCard];

    /// Constant prefix used for this device.
    pub const fn name(self) -> &'static str {
        match self {
            Peripheral::Display => "TFT",
            Peripheral::Touch => "TS",
            Peripheral::SdCard => "SD",
        }
    }

    pub const fn controller(self) -> &'static str {
        match self {
            Peripheral::Display => "ILI9341",
            Peripheral::Touch => "XPT2046",
            Peripheral::SdCard => "SDHC",
        }
    }
}

impl core::fmt::Display for Peripheral {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinRole {
    TftClk,
    TftMiso,
    TftMosi,
    TftCs,
    TftDc,
    TftRst,
    TftLed,
    TsClk,
    TsMiso,
    TsMosi,
    TsCs,
    TsIrq,
    SdClk,
    SdMiso,
    SdMosi,
    SdCs,
    I2cSda,
    I2cScl,
    Uart0Rx,
    Uart0Tx,
}

impl PinRole {
    pub const fn name(self) -> &'static str {
        match self {
            PinRole::TftClk => "TFT_CLK",
            PinRole::TftMiso => "TFT_MISO",
            PinRole::TftMosi => "TFT_MOSI",
            PinRole::TftCs => "TFT_CS",
            PinRole::TftDc => "TFT_DC",
            PinRole::TftRst => "TFT_RST",
            PinRole::TftLed => "TFT_LED",
            PinRole::TsClk => "TS_CLK",
            PinRole::TsMiso => "TS_MISO",
            PinRole::TsMosi => "TS_MOSI",
            PinRole::TsCs => "TS_CS",
            PinRole::TsIrq => "TS_IRQ",
            PinRole::SdClk => "SD_CLK",
            PinRole::SdMiso => "SD_MISO",
            PinRole::SdMosi => "SD_MOSI",
            PinRole::SdCs => "SD_CS",
            PinRole::I2cSda => "I2C_SDA",
            PinRole::I2cScl => "I2C_SCL",
            PinRole::Uart0Rx => "UART0_RX",
            PinRole::Uart0Tx => "UART0_TX",
        }
    }
}

impl core::fmt::Display for PinRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiBusPins {
    pub clk: Pin,
    pub miso: Pin,
    pub mosi: Pin,
}

impl SpiBusPins {
    /// Const equality, usable from the compile-time checks.
    pub const fn same_as(&self, other: &SpiBusPins) -> bool {
        self.clk == other.clk && self.miso == other.miso && self.mosi == other.mosi
    }
}

/// ILI9341 TFT controller lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPins {
    pub bus: SpiBusPins,
    pub cs: Pin,
    pub dc: Pin,
    /// The MSP3218 needs a real reset line; drivers reject "no pin" here.
    pub rst: Pin,
    /// Backlight, driven with PWM.
    pub led: Pin,
    pub spi_hz: u32,
}

/// XPT2046 touch controller lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPins {
    pub bus: SpiBusPins,
    pub cs: Pin,
    /// `None` means the pen interrupt is not wired and the panel is polled.
    pub irq: Option<Pin>,
    pub spi_hz: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdPins {
    pub bus: SpiBusPins,
    pub cs: Pin,
    pub spi_hz: u32,
}

/// Board-default I2C and UART0 pins, listed so nothing above collides with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxPins {
    pub i2c_sda: Pin,
    pub i2c_scl: Pin,
    pub uart0_rx: Pin,
    pub uart0_tx: Pin,
}

pub const MAX_ASSIGNMENTS: usize = 14;

/// Every pin a profile claims, shared bus lines listed once.
#[derive(Debug, Clone, Copy)]
pub struct Assignments {
    items: [(PinRole, Pin); MAX_ASSIGNMENTS],
    len: usize,
}

impl Assignments {
    const fn new() -> Self {
        Self {
            items: [(PinRole::TftClk, 0); MAX_ASSIGNMENTS],
            len: 0,
        }
    }

    const fn push(&mut self, role: PinRole, pin: Pin) {
        self.items[self.len] = (role, pin);
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[(PinRole, Pin)] {
        &self.items[..self.len]
    }

    pub fn find(&self, role: PinRole) -> Option<Pin> {
        self.iter().find(|(r, _)| *r == role).map(|&(_, pin)| pin)
    }
}

impl core::ops::Deref for Assignments {
    type Target = [(PinRole, Pin)];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardProfile {
    pub board: Board,
    pub display: DisplayPins,
    pub touch: TouchPins,
    pub sd: SdPins,
    pub aux: AuxPins,
}

impl BoardProfile {
    pub const fn spi_hz(&self, peripheral: Peripheral) -> u32 {
        match peripheral {
            Peripheral::Display => self.display.spi_hz,
            Peripheral::Touch => self.touch.spi_hz,
            Peripheral::SdCard => self.sd.spi_hz,
        }
    }

    pub const fn cs(&self, peripheral: Peripheral) -> Pin {
        match peripheral {
            Peripheral::Display => self.display.cs,
            Peripheral::Touch => self.touch.cs,
            Peripheral::SdCard => self.sd.cs,
        }
    }

    /// The shared SPI bus (taken from the display, which owns it).
    pub const fn bus(&self) -> SpiBusPins {
        self.display.bus
    }

    pub const fn assignments(&self) -> Assignments {
        let d = &self.display;
        let mut out = Assignments::new();
        out.push(PinRole::TftClk, d.bus.clk);
        out.push(PinRole::TftMiso, d.bus.miso);
        out.push(PinRole::TftMosi, d.bus.mosi);
        out.push(PinRole::TftCs, d.cs);
        out.push(PinRole::TftDc, d.dc);
        out.push(PinRole::TftRst, d.rst);
        out.push(PinRole::TftLed, d.led);
        out.push(PinRole::TsCs, self.touch.cs);
        if let Some(irq) = self.touch.irq {
            out.push(PinRole::TsIrq, irq);
        }
        out.push(PinRole::SdCs, self.sd.cs);
        out.push(PinRole::I2cSda, self.aux.i2c_sda);
        out.push(PinRole::I2cScl, self.aux.i2c_scl);
        out.push(PinRole::Uart0Rx, self.aux.uart0_rx);
        out.push(PinRole::Uart0Tx, self.aux.uart0_tx);
        out
    }

    /// Distinct GPIOs used by the display, touch and SD systems together.
    pub const fn spi_gpio_count(&self) -> usize {
        let d = &self.display;
        let t = &self.touch;
        let s = &self.sd;

        let mut pins = [0 as Pin; 16];
        let mut len = 0;
        let mut candidates = [
            Some(d.bus.clk),
            Some(d.bus.miso),
            Some(d.bus.mosi),
            Some(d.cs),
            Some(d.dc),
            Some(d.rst),
            Some(d.led),
            Some(t.bus.clk),
            Some(t.bus.miso),
            Some(t.bus.mosi),
            Some(t.cs),
            t.irq,
            Some(s.bus.clk),
            Some(s.bus.miso),
            Some(s.bus.mosi),
            Some(s.cs),
        ];

        let mut i = 0;
        while i < candidates.len() {
            if let Some(pin) = candidates[i].take() {
                let mut seen = false;
                let mut j = 0;
                while j < len {
                    if pins[j] == pin {
                        seen = true;
                    }
                    j += 1;
                }
                if !seen {
                    pins[len] = pin;
                    len += 1;
                }
            }
            i += 1;
        }
        len
    }

    /// Check the wiring rules; the first violation found is returned.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        const_try!(self.check_shared_bus());
        const_try!(self.check_clocks());

        let pins = self.assignments();
        const_try!(self.check_gpios(&pins));

        if !self.board.is_pwm_capable(self.display.led) {
            return Err(ConfigError::NotPwmCapable {
                pin: self.display.led,
            });
        }

        check_distinct(&pins)
    }

    const fn check_shared_bus(&self) -> Result<(), ConfigError> {
        let bus = &self.display.bus;
        if !self.touch.bus.same_as(bus) {
            return Err(ConfigError::BusMismatch {
                peripheral: Peripheral::Touch,
            });
        }
        if !self.sd.bus.same_as(bus) {
            return Err(ConfigError::BusMismatch {
                peripheral: Peripheral::SdCard,
            });
        }
        Ok(())
    }

    const fn check_clocks(&self) -> Result<(), ConfigError> {
        let max_hz = self.board.max_spi_hz();
        let mut i = 0;
        while i < Peripheral::ALL.len() {
            let peripheral = Peripheral::ALL[i];
            let hz = self.spi_hz(peripheral);
            if hz == 0 {
                return Err(ConfigError::ZeroClock { peripheral });
            }
            if hz > max_hz {
                return Err(ConfigError::ClockTooHigh {
                    peripheral,
                    hz,
                    max_hz,
                });
            }
            i += 1;
        }
        Ok(())
    }

    const fn check_gpios(&self, pins: &Assignments) -> Result<(), ConfigError> {
        let mut i = 0;
        while i < pins.len {
            let (role, pin) = pins.items[i];
            if !self.board.is_valid_gpio(pin) {
                return Err(ConfigError::InvalidPin { role, pin });
            }
            i += 1;
        }
        Ok(())
    }

    /// Print the pin map through `log`, one line per peripheral.
    pub fn log_summary(&self) {
        let bus = self.bus();
        info!("board: {} ({})", self.board, self.board.mcu());
        info!(
            "spi bus: CLK={} MISO={} MOSI={}",
            bus.clk, bus.miso, bus.mosi
        );
        info!(
            "TFT ({}): CS={} DC={} RST={} LED={} @ {} Hz",
            Peripheral::Display.controller(),
            self.display.cs,
            self.display.dc,
            self.display.rst,
            self.display.led,
            self.display.spi_hz
        );
        match self.touch.irq {
            Some(irq) => info!(
                "TS ({}): CS={} IRQ={} @ {} Hz",
                Peripheral::Touch.controller(),
                self.touch.cs,
                irq,
                self.touch.spi_hz
            ),
            None => info!(
                "TS ({}): CS={} IRQ=none (polled) @ {} Hz",
                Peripheral::Touch.controller(),
                self.touch.cs,
                self.touch.spi_hz
            ),
        }
        info!("SD: CS={} @ {} Hz", self.sd.cs, self.sd.spi_hz);
        info!(
            "aux: SDA={} SCL={} RX={} TX={}",
            self.aux.i2c_sda, self.aux.i2c_scl, self.aux.uart0_rx, self.aux.uart0_tx
        );
        info!("{} GPIOs on the SPI systems", self.spi_gpio_count());
    }
}

const fn check_distinct(pins: &Assignments) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < pins.len {
        let (first, pin) = pins.items[i];
        let mut j = i + 1;
        while j < pins.len {
            let (second, other) = pins.items[j];
            if pin == other {
                return Err(ConfigError::PinConflict { first, second, pin });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}
