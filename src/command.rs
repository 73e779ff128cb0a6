//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! OLED display controller, plus the control bytes that frame each I2C
//! transaction.
//!
//! ## Transaction Structure
//!
//! Every I2C transaction starts with a control byte that encodes the
//! Co (continuation) bit as b7 and the D/C# (data/command) bit as b6:
//!
//! 1. A command transaction is `[0x80, command byte]`
//! 2. A data transaction is `[0x40, RAM bytes...]`
//!
//! Commands that take arguments receive each argument as a separate
//! command transaction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{command::Command, DisplayInterface, I2cInterface, DEFAULT_ADDRESS};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl embedded_hal::i2c::I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Set contrast to mid range
//! let _ = interface.send_command(Command::SetContrast.value());
//! let _ = interface.send_command(0x7F);
//! ```

/// Control byte introducing a single command byte
///
/// Co=1, D/C#=0. The byte that follows is interpreted as a command.
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte introducing a stream of display RAM bytes
///
/// Co=0, D/C#=1. Every byte that follows until the stop condition is
/// written to display RAM. [`FrameBuffer`](crate::FrameBuffer) reserves
/// its first byte for this marker so the whole buffer goes out as one
/// transaction.
pub const CONTROL_DATA: u8 = 0x40;

/// Default 7-bit I2C device address
///
/// A strap pin on the SSD1306 selects between 0x3C and 0x3D. Most
/// breakout boards ship strapped to 0x3C.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C device address (strap pin high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// SSD1306 command set
///
/// Each variant's discriminant is the command byte sent on the wire.
/// Commands that take arguments are documented with the argument bytes
/// they expect; arguments follow as separate command transactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Display off, sleep mode (0xAE)
    DisplayOff = 0xAE,
    /// Display on, resume from sleep (0xAF)
    DisplayOn = 0xAF,
    /// Set contrast register (0x81)
    ///
    /// Requires 1 argument byte: contrast 0-255.
    SetContrast = 0x81,
    /// Resume display from RAM content (0xA4)
    ///
    /// Counterpart of the all-pixels-on test mode; output follows RAM.
    AllOnResume = 0xA4,
    /// Normal (non-inverted) polarity (0xA6)
    ///
    /// RAM bit 1 lights the pixel.
    NormalDisplay = 0xA6,
    /// Inverted polarity (0xA7)
    ///
    /// RAM bit 0 lights the pixel.
    InvertDisplay = 0xA7,
    /// Set vertical display offset (0xD3)
    ///
    /// Requires 1 argument byte: COM shift 0-63.
    SetDisplayOffset = 0xD3,
    /// Set COM pins hardware configuration (0xDA)
    ///
    /// Requires 1 argument byte; 0x02 for 32-row panels, 0x12 for
    /// 64-row panels.
    SetComPins = 0xDA,
    /// Set display clock divide ratio and oscillator frequency (0xD5)
    ///
    /// Requires 1 argument byte: divide ratio in b3:0, frequency in b7:4.
    SetClockDivide = 0xD5,
    /// Set pre-charge period (0xD9)
    ///
    /// Requires 1 argument byte: phase 1 in b3:0, phase 2 in b7:4.
    /// The value depends on the supply mode, see
    /// [`VccMode`](crate::VccMode).
    SetPrecharge = 0xD9,
    /// Set multiplex ratio (0xA8)
    ///
    /// Requires 1 argument byte: ratio minus one, 15-63.
    SetMultiplex = 0xA8,
    /// Set memory addressing mode (0x20)
    ///
    /// Requires 1 argument byte: 0x00 horizontal, 0x01 vertical,
    /// 0x02 page.
    MemoryMode = 0x20,
    /// Set column address range (0x21)
    ///
    /// Requires 2 argument bytes: start column, end column (0-127).
    /// Only valid in horizontal or vertical addressing mode.
    ColumnAddress = 0x21,
    /// Set page address range (0x22)
    ///
    /// Requires 2 argument bytes: start page, end page.
    /// Only valid in horizontal or vertical addressing mode.
    PageAddress = 0x22,
    /// COM output scan from COM0 to COM\[N-1\] (0xC0)
    ComScanIncrement = 0xC0,
    /// Map segment 0 to column 0 (0xA0)
    ///
    /// OR with 0x01 to mirror horizontally (segment 0 to column 127).
    SegmentRemap = 0xA0,
    /// Charge pump setting (0x8D)
    ///
    /// Requires 1 argument byte: 0x10 external VCC, 0x14 internal
    /// charge pump.
    ChargePump = 0x8D,
    /// Set display RAM start line (0x40)
    ///
    /// OR the line number 0-63 into the low six bits.
    SetStartLine = 0x40,
    /// Deactivate any running scroll (0x2E)
    ///
    /// RAM writes while a scroll is active corrupt display output, so
    /// initialization always stops scrolling.
    DeactivateScroll = 0x2E,
}

impl Command {
    /// Command byte as sent on the wire
    pub const fn value(self) -> u8 {
        self as u8
    }
}
