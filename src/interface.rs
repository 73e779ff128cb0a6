//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller
//! over a two-wire bus.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 requires:
//! - I2C bus (SDA + SCL), device address 0x3C or 0x3D
//! - Optionally a discrete RES# pin (output, active low); most I2C
//!   modules tie it to the supply rail and need no GPIO
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use ssd1306_i2c::{DisplayInterface, I2cInterface, DEFAULT_ADDRESS};
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
//! # let mut delay = MockDelay;
//! // Create interface on the default device address
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//!
//! // Send a command
//! let _ = interface.send_command(0xAE); // Display off
//!
//! // Send a pre-framed data transaction (0x40 marker + RAM bytes)
//! let _ = interface.send_frame(&[0x40, 0xFF, 0x00, 0xFF]);
//!
//! // Settle the supply before initialization
//! let _ = interface.reset(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::command::CONTROL_COMMAND;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over the bus transport, allowing the
/// [`Display`](crate::display::Display) to work with any implementation
/// that can move the two transaction kinds onto the wire. Implement it
/// on your own type for unusual transports (e.g. 4-wire SPI with a D/C
/// pin); for I2C use the provided [`I2cInterface`].
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one command byte to the controller
    ///
    /// The implementation must frame the byte as a command transaction
    /// (`[0x80, byte]` on I2C) and transmit it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Transmit a pre-framed transaction
    ///
    /// `frame` must already carry its control byte at position 0 (the
    /// data marker for frame-buffer transfers). The implementation
    /// transmits the bytes as-is in a single atomic transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Bring the controller out of power-on
    ///
    /// With a RES# pin configured: drive high, wait 1 ms, pulse low for
    /// 10 ms, drive high, wait 10 ms. Without one: wait 10 ms for the
    /// supply to settle.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// I2C communication error
    Bus(BusErr),
    /// Reset pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C error: {e:?}"),
            Self::Pin(e) => write!(f, "Reset pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// Placeholder reset pin for modules without a RES# line
///
/// Used as the pin type parameter of [`I2cInterface`] when no reset
/// GPIO is wired; never driven.
#[derive(Debug)]
pub struct NoReset;

impl embedded_hal::digital::ErrorType for NoReset {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoReset {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// I2C interface implementation for the SSD1306
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C (and
/// optionally GPIO) traits.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
/// * `RST` - Reset pin implementing [`OutputPin`]; defaults to
///   [`NoReset`] when constructed with [`I2cInterface::new`]
pub struct I2cInterface<I2C, RST = NoReset> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Optional RES# pin (active low)
    reset: Option<RST>,
}

impl<I2C> I2cInterface<I2C, NoReset>
where
    I2C: I2c,
{
    /// Create an interface without a reset line
    ///
    /// # Arguments
    ///
    /// * `i2c` - Bus (must implement [`I2c`])
    /// * `address` - 7-bit device address, usually
    ///   [`DEFAULT_ADDRESS`](crate::DEFAULT_ADDRESS)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            reset: None,
        }
    }
}

impl<I2C, RST> I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Create an interface with a discrete RES# pin
    ///
    /// Boards that route RES# to a GPIO get a proper hardware reset
    /// pulse during [`reset`](DisplayInterface::reset) instead of a
    /// plain settle delay.
    pub fn with_reset(i2c: I2C, address: u8, reset: RST) -> Self {
        Self {
            i2c,
            address,
            reset: Some(reset),
        }
    }

    /// Configured 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus (and reset pin, if any)
    pub fn release(self) -> (I2C, Option<RST>) {
        (self.i2c, self.reset)
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    I2C::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, command])
            .map_err(InterfaceError::Bus)
    }

    fn send_frame(&mut self, frame: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, frame)
            .map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        match self.reset.as_mut() {
            Some(pin) => {
                pin.set_high().map_err(InterfaceError::Pin)?;
                delay.delay_ms(1);
                pin.set_low().map_err(InterfaceError::Pin)?;
                delay.delay_ms(10);
                pin.set_high().map_err(InterfaceError::Pin)?;
                delay.delay_ms(10);
            }
            None => delay.delay_ms(10),
        }
        Ok(())
    }
}
