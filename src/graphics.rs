//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//! trait for [`Display`], so shape and text helpers from the
//! embedded-graphics ecosystem render through the frame buffer's pixel
//! path. `BinaryColor::On` sets a pixel, `BinaryColor::Off` clears it;
//! out-of-bounds pixels are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use ssd1306_i2c::{Builder, Display, I2cInterface, DEFAULT_ADDRESS};
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
//! let interface = I2cInterface::new(MockI2c, DEFAULT_ADDRESS);
//! let mut display = Display::new(interface, Builder::new().build());
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(70, 20), 20)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Push to the panel
//! let _ = display.flush();
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::addressing::PixelOp;
use crate::config::COLUMNS;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let height = self.framebuffer().height();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as usize;
            let y = y as usize;

            if x >= COLUMNS || y >= height {
                continue;
            }

            let op = match color {
                BinaryColor::On => PixelOp::Set,
                BinaryColor::Off => PixelOp::Clear,
            };
            // In range by the checks above
            let _ = self.framebuffer_mut().draw_pixel(x, y, op);
        }

        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(COLUMNS as u32, self.framebuffer().height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, DisplaySize};
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_frame(&mut self, _frame: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display(size: DisplaySize) -> Display<MockInterface> {
        Display::new(MockInterface, Builder::new().size(size).build())
    }

    #[test]
    fn test_size_follows_configuration() {
        assert_eq!(test_display(DisplaySize::Rows64).size(), Size::new(128, 64));
        assert_eq!(test_display(DisplaySize::Rows32).size(), Size::new(128, 32));
    }

    #[test]
    fn test_filled_rectangle_sets_page_bytes() {
        let mut display = test_display(DisplaySize::Rows64);
        Rectangle::new(Point::new(4, 0), Size::new(3, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        let payload = display.framebuffer().payload();
        assert_eq!(&payload[4..7], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(payload[3], 0x00);
        assert_eq!(payload[7], 0x00);
    }

    #[test]
    fn test_off_pixels_clear() {
        let mut display = test_display(DisplaySize::Rows64);
        display.set_pixel(10, 3, true).unwrap();

        display
            .draw_iter([Pixel(Point::new(10, 3), BinaryColor::Off)])
            .unwrap();
        assert_eq!(display.framebuffer().payload()[10], 0x00);
    }

    #[test]
    fn test_out_of_bounds_pixels_skipped() {
        let mut display = test_display(DisplaySize::Rows32);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, -5), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 32), BinaryColor::On),
            ])
            .unwrap();

        assert!(display.framebuffer().payload().iter().all(|&b| b == 0));
    }
}
