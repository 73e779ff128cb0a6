//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::addressing::PixelOp;
use crate::command::Command;
use crate::config::{Config, COLUMNS};
use crate::error::{Axis, Bound, Error, WindowError};
use crate::font::{self, Cursor};
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the SSD1306
///
/// Owns the hardware interface, the configuration and the frame
/// buffer. Drawing mutates the buffer only; nothing reaches the panel
/// until [`flush`](Self::flush) runs — the controller does not refresh
/// itself.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// In-memory copy of display RAM
    buffer: FrameBuffer,
    /// Character-cell cursor for the text renderer
    cursor: Cursor,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            buffer: FrameBuffer::new(config.size),
            cursor: Cursor::default(),
        }
    }

    /// Bring the controller out of power-on
    ///
    /// Pulses the RES# line when the interface has one, otherwise waits
    /// for the supply to stabilize. Run once before
    /// [`init`](Self::init).
    pub fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Configure the controller and turn the panel on
    ///
    /// Issues the full setup sequence once: clocking, geometry, charge
    /// pump, addressing mode and polarity, with the electrical
    /// parameters derived from [`Config`], then pushes the current
    /// buffer so the panel starts from known content.
    pub fn init(&mut self) -> DisplayResult<I> {
        let config = self.config;
        let sequence = [
            Command::DisplayOff.value(),
            Command::SetClockDivide.value(),
            0xF0,
            Command::SetMultiplex.value(),
            config.multiplex_ratio(),
            Command::SetDisplayOffset.value(),
            0x00,
            Command::SetStartLine.value(),
            Command::ChargePump.value(),
            config.charge_pump(),
            Command::MemoryMode.value(),
            0x00, // horizontal addressing
            Command::SegmentRemap.value(),
            Command::ComScanIncrement.value(),
            Command::SetComPins.value(),
            config.com_pins(),
            Command::SetContrast.value(),
            config.contrast,
            Command::SetPrecharge.value(),
            config.precharge(),
            Command::AllOnResume.value(),
            Command::NormalDisplay.value(),
            Command::DeactivateScroll.value(),
            Command::DisplayOn.value(),
        ];
        for byte in sequence {
            self.interface.send_command(byte).map_err(Error::Interface)?;
        }
        log::debug!(
            "init: 128x{} panel, {:?} supply",
            self.buffer.height(),
            config.vcc_mode
        );
        self.flush()
    }

    /// Put the panel to sleep
    pub fn power_off(&mut self) -> DisplayResult<I> {
        self.command(Command::DisplayOff)
    }

    /// Transmit the frame buffer to the panel
    ///
    /// Resets the column and page address windows to the full panel,
    /// then sends the whole buffer as one data transaction. Must run
    /// after drawing for changes to become visible.
    pub fn flush(&mut self) -> DisplayResult<I> {
        self.set_column_window(0, None)?;
        self.set_page_window(0, None)?;
        log::trace!("flush: {} bytes", self.buffer.as_frame().len());
        self.interface
            .send_frame(self.buffer.as_frame())
            .map_err(Error::Interface)
    }

    /// Set the contrast register (0-255)
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.command(Command::SetContrast)?;
        self.argument(value)
    }

    /// Select inverted or normal output polarity
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.command(if invert {
            Command::InvertDisplay
        } else {
            Command::NormalDisplay
        })
    }

    /// Set the column address window
    ///
    /// `end` defaults to the last column. RAM writes auto-advance
    /// within the window in horizontal addressing mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Window`] unless `0 <= start <= end <= 127`,
    /// naming the violated bound and its valid range.
    pub fn set_column_window(&mut self, start: u8, end: Option<u8>) -> DisplayResult<I> {
        let last = (COLUMNS - 1) as u8;
        self.window(
            Axis::Column,
            Command::ColumnAddress,
            start,
            end.unwrap_or(last),
            last,
        )
    }

    /// Set the page address window
    ///
    /// `end` defaults to the last page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Window`] unless
    /// `0 <= start <= end <= pages - 1`, naming the violated bound and
    /// its valid range.
    pub fn set_page_window(&mut self, start: u8, end: Option<u8>) -> DisplayResult<I> {
        let last = (self.buffer.pages() - 1) as u8;
        self.window(
            Axis::Page,
            Command::PageAddress,
            start,
            end.unwrap_or(last),
            last,
        )
    }

    fn window(
        &mut self,
        axis: Axis,
        command: Command,
        start: u8,
        end: u8,
        last: u8,
    ) -> DisplayResult<I> {
        if start > last {
            return Err(WindowError {
                axis,
                bound: Bound::Start,
                value: start,
                min: 0,
                max: last,
            }
            .into());
        }
        if end < start || end > last {
            return Err(WindowError {
                axis,
                bound: Bound::End,
                value: end,
                min: start,
                max: last,
            }
            .into());
        }
        self.command(command)?;
        self.argument(start)?;
        self.argument(end)
    }

    /// Reset every pixel to off
    ///
    /// Clears the buffer only; the text cursor keeps its position and
    /// the panel keeps showing the old frame until the next
    /// [`flush`](Self::flush).
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Apply a [`PixelOp`] to one pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside
    /// the panel.
    pub fn draw_pixel(&mut self, x: usize, y: usize, op: PixelOp) -> DisplayResult<I> {
        self.buffer.draw_pixel(x, y, op)?;
        Ok(())
    }

    /// Set or clear one pixel
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate lies outside
    /// the panel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> DisplayResult<I> {
        self.buffer.set_pixel(x, y, on)?;
        Ok(())
    }

    /// Render one character at the cursor and advance it
    pub fn write_char(&mut self, ch: char) {
        font::blit_char(&mut self.buffer, &mut self.cursor, ch);
    }

    /// Render a string at the cursor
    ///
    /// Wraps cell by cell; see the [`font`](crate::font) module for the
    /// wrap rules.
    pub fn write_str(&mut self, text: &str) {
        font::blit_str(&mut self.buffer, &mut self.cursor, text);
    }

    /// Move the text cursor, wrapping into the valid cell range
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let pages = self.buffer.pages();
        self.cursor.set(row, col, pages);
    }

    /// Current text cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Send a single command
    pub fn command(&mut self, command: Command) -> DisplayResult<I> {
        self.interface
            .send_command(command.value())
            .map_err(Error::Interface)
    }

    /// Send a command argument byte
    fn argument(&mut self, value: u8) -> DisplayResult<I> {
        self.interface.send_command(value).map_err(Error::Interface)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the frame buffer
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Access the frame buffer mutably
    ///
    /// For direct pixel work and for feeding the
    /// [`bmp`](crate::bmp) decoder.
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, DisplaySize, VccMode};
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<u8>,
        frames: Vec<Vec<u8>>,
        resets: usize,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                frames: Vec::new(),
                resets: 0,
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            Ok(())
        }

        fn send_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
            self.frames.push(frame.to_vec());
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::new(), Builder::new().build())
    }

    #[test]
    fn test_power_on_resets_interface() {
        let mut display = test_display();
        let mut delay = MockDelay;
        display.power_on(&mut delay).unwrap();
        assert_eq!(display.interface.resets, 1);
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn test_init_sequence_internal_vcc() {
        let config = Builder::new()
            .size(DisplaySize::Rows64)
            .vcc_mode(VccMode::Internal)
            .contrast(0xCF)
            .build();
        let mut display = Display::new(MockInterface::new(), config);
        display.init().unwrap();

        // Setup commands followed by the full-window flush
        let expected: [u8; 24] = [
            0xAE, 0xD5, 0xF0, 0xA8, 0x3F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA0, 0xC0,
            0xDA, 0x12, 0x81, 0xCF, 0xD9, 0xF1, 0xA4, 0xA6, 0x2E, 0xAF,
        ];
        assert_eq!(&display.interface.commands[..24], &expected);
        assert_eq!(
            &display.interface.commands[24..],
            &[0x21, 0, 127, 0x22, 0, 7]
        );
        assert_eq!(display.interface.frames.len(), 1);
    }

    #[test]
    fn test_init_sequence_external_vcc_small_panel() {
        let config = Builder::new()
            .size(DisplaySize::Rows32)
            .vcc_mode(VccMode::External)
            .build();
        let mut display = Display::new(MockInterface::new(), config);
        display.init().unwrap();

        let commands = &display.interface.commands;
        assert_eq!(commands[3..5], [0xA8, 0x1F]); // multiplex for 32 rows
        assert_eq!(commands[8..10], [0x8D, 0x10]); // external charge pump
        assert_eq!(commands[14..16], [0xDA, 0x02]); // COM pins for 32 rows
        assert_eq!(commands[18..20], [0xD9, 0x22]); // external pre-charge
    }

    #[test]
    fn test_flush_is_two_windows_and_one_frame() {
        let mut display = test_display();
        display.flush().unwrap();

        assert_eq!(
            display.interface.commands,
            &[0x21, 0, 127, 0x22, 0, 7]
        );
        assert_eq!(display.interface.frames.len(), 1);
        let frame = &display.interface.frames[0];
        assert_eq!(frame.len(), 1 + 8 * 128);
        assert_eq!(frame[0], 0x40);
    }

    #[test]
    fn test_flush_small_panel_frame_length() {
        let config = Builder::new().size(DisplaySize::Rows32).build();
        let mut display = Display::new(MockInterface::new(), config);
        display.flush().unwrap();

        assert_eq!(display.interface.commands[3..], [0x22, 0, 3]);
        assert_eq!(display.interface.frames[0].len(), 1 + 4 * 128);
    }

    #[test]
    fn test_power_off_sends_display_off() {
        let mut display = test_display();
        display.power_off().unwrap();
        assert_eq!(display.interface.commands, &[0xAE]);
    }

    #[test]
    fn test_set_contrast_sends_value() {
        let mut display = test_display();
        display.set_contrast(0x42).unwrap();
        assert_eq!(display.interface.commands, &[0x81, 0x42]);
    }

    #[test]
    fn test_invert_selects_polarity() {
        let mut display = test_display();
        display.invert(true).unwrap();
        display.invert(false).unwrap();
        assert_eq!(display.interface.commands, &[0xA7, 0xA6]);
    }

    #[test]
    fn test_column_window_end_before_start_rejected() {
        let mut display = test_display();
        let result = display.set_column_window(5, Some(3));
        assert!(matches!(
            result,
            Err(Error::Window(WindowError {
                axis: Axis::Column,
                bound: Bound::End,
                value: 3,
                min: 5,
                max: 127,
            }))
        ));
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn test_column_window_start_out_of_range_rejected() {
        let mut display = test_display();
        let result = display.set_column_window(200, None);
        assert!(matches!(
            result,
            Err(Error::Window(WindowError {
                bound: Bound::Start,
                value: 200,
                ..
            }))
        ));
    }

    #[test]
    fn test_page_window_bounds_follow_panel_size() {
        let config = Builder::new().size(DisplaySize::Rows32).build();
        let mut display = Display::new(MockInterface::new(), config);

        display.set_page_window(1, Some(2)).unwrap();
        assert_eq!(display.interface.commands, &[0x22, 1, 2]);

        let result = display.set_page_window(0, Some(4));
        assert!(matches!(
            result,
            Err(Error::Window(WindowError {
                axis: Axis::Page,
                bound: Bound::End,
                value: 4,
                max: 3,
                ..
            }))
        ));
    }

    #[test]
    fn test_set_pixel_out_of_bounds_propagates() {
        let mut display = test_display();
        let result = display.set_pixel(128, 0, true);
        assert!(matches!(result, Err(Error::OutOfBounds(_))));
    }

    #[test]
    fn test_draw_and_flush_round_trip() {
        let mut display = test_display();
        display.draw_pixel(2, 1, PixelOp::Set).unwrap();
        display.flush().unwrap();

        let frame = &display.interface.frames[0];
        assert_eq!(frame[1 + 2], 0x02);
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut display = test_display();
        display.write_str("AB");
        display.clear();
        assert_eq!(display.cursor().col(), 2);
        assert!(display.framebuffer().payload().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_str_lands_in_buffer() {
        let mut display = test_display();
        display.set_cursor(1, 0);
        display.write_str("Hi");

        let payload = display.framebuffer().payload();
        assert_eq!(&payload[128..133], crate::font::glyph('H'));
    }
}
