//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED display controller over
//! I2C, for 128x32 and 128x64 panels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - In-memory page-addressed frame buffer, flushed in one bus
//!   transaction
//! - Built-in 5x7 text renderer with a character-cell cursor
//! - Decoder for uncompressed 24-bit Windows bitmaps
//! - Optional reset-line handling for boards that wire RES# to a GPIO
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use ssd1306_i2c::{Builder, Display, DisplaySize, I2cInterface, VccMode, DEFAULT_ADDRESS};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS);
//! let config = Builder::new()
//!     .size(DisplaySize::Rows64)
//!     .vcc_mode(VccMode::Internal)
//!     .build();
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.power_on(&mut delay);
//! let _ = display.init();
//!
//! display.write_str("The quick brown fox");
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bit-packed coordinate math
pub mod addressing;
/// Windows bitmap decoder
pub mod bmp;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// 5x7 bitmap font and text renderer
pub mod font;
/// Page-addressed frame buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use addressing::{pixel_location, PixelOp};
pub use bmp::{BmpError, BmpInfo};
pub use command::{Command, ALTERNATE_ADDRESS, CONTROL_COMMAND, CONTROL_DATA, DEFAULT_ADDRESS};
pub use config::{Builder, Config, DisplaySize, VccMode, COLUMNS};
pub use display::Display;
pub use error::{Axis, Bound, Error, OutOfBounds, WindowError};
pub use font::{Cursor, CELLS_PER_ROW, FONT_5X7};
pub use framebuffer::{FrameBuffer, FRAME_PREFIX_LEN};
pub use interface::{DisplayInterface, I2cInterface, InterfaceError, NoReset};
