//! Error types for the driver
//!
//! This module defines error types for display operations ([`Error`]),
//! addressing-window validation ([`WindowError`]) and pixel range
//! checks ([`OutOfBounds`]). Low-level hardware communication errors
//! live in [`InterfaceError`](crate::interface::InterfaceError).
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Axis, Bound, WindowError};
//!
//! let err = WindowError {
//!     axis: Axis::Column,
//!     bound: Bound::End,
//!     value: 3,
//!     min: 5,
//!     max: 127,
//! };
//! // Names the bound, the axis and the valid range
//! assert_eq!(
//!     err.to_string(),
//!     "end column 3 must be between the start column (5) and 127"
//! );
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware
/// error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus transaction error
    ///
    /// Wraps the underlying hardware error from the
    /// [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Addressing-window bound violation
    Window(WindowError),
    /// Pixel coordinate outside the panel
    OutOfBounds(OutOfBounds),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::Window(e) => write!(f, "{e}"),
            Self::OutOfBounds(e) => write!(f, "{e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<WindowError> for Error<I> {
    fn from(err: WindowError) -> Self {
        Self::Window(err)
    }
}

impl<I: DisplayInterface> From<OutOfBounds> for Error<I> {
    fn from(err: OutOfBounds) -> Self {
        Self::OutOfBounds(err)
    }
}

/// Addressing axis of a window command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Column address window (0-127)
    Column,
    /// Page address window (0 to page count - 1)
    Page,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Page => "page",
        }
    }
}

/// Which bound of a window command was violated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The window start
    Start,
    /// The window end
    End,
}

/// Addressing-window bound violation
///
/// Produced by
/// [`Display::set_column_window`](crate::display::Display::set_column_window)
/// and
/// [`Display::set_page_window`](crate::display::Display::set_page_window)
/// when a bound falls outside its valid range. For a start violation
/// `min` is 0; for an end violation `min` is the start bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowError {
    /// Violated axis
    pub axis: Axis,
    /// Violated bound
    pub bound: Bound,
    /// Offending value
    pub value: u8,
    /// Lowest acceptable value
    pub min: u8,
    /// Highest acceptable value
    pub max: u8,
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let axis = self.axis.name();
        match self.bound {
            Bound::Start => write!(
                f,
                "start {axis} {} must be between {} and {}",
                self.value, self.min, self.max
            ),
            Bound::End => write!(
                f,
                "end {axis} {} must be between the start {axis} ({}) and {}",
                self.value, self.min, self.max
            ),
        }
    }
}

impl core::error::Error for WindowError {}

/// Pixel coordinate outside the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Offending x coordinate
    pub x: usize,
    /// Offending y coordinate
    pub y: usize,
    /// Panel width in pixels
    pub width: usize,
    /// Panel height in pixels
    pub height: usize,
}

impl core::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "pixel ({}, {}) outside {}x{} panel",
            self.x, self.y, self.width, self.height
        )
    }
}

impl core::error::Error for OutOfBounds {}
