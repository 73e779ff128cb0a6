//! 5x7 bitmap font and text renderer
//!
//! This module embeds the classic 5x7 ASCII font and renders it into a
//! [`FrameBuffer`] using a character-cell cursor.
//!
//! ## Layout
//!
//! Each glyph is 5 column bytes, bit n = pixel row n, packed flat with
//! no header: glyph 0 is codepoint 0x20 (space). On screen a character
//! occupies a 6x8 cell: 5 glyph columns, 1 spacing column, and an
//! unused 8th pixel row. A cell is exactly one page tall, so the
//! renderer writes whole page bytes and never touches the pixel API.
//!
//! The cursor walks cells left to right, top to bottom, wrapping from
//! the last cell of a row to the first cell of the next and from the
//! bottom row back to the top. The top-row wrap silently overwrites;
//! there is no scrolling.

use crate::config::COLUMNS;
use crate::framebuffer::FrameBuffer;

/// Glyph width in pixel columns
pub const GLYPH_WIDTH: usize = 5;

/// Character cell width in pixel columns (glyph + spacing)
pub const CELL_WIDTH: usize = 6;

/// Character cells per display row
pub const CELLS_PER_ROW: usize = COLUMNS / CELL_WIDTH;

/// First codepoint in the table
const FIRST_GLYPH: usize = 0x20;

/// Number of glyphs in the table
const GLYPH_COUNT: usize = 96;

/// Flat 5x7 font table, codepoints 0x20..=0x7F
///
/// Column-major: 5 bytes per glyph, LSB is the top pixel row. 0x7F
/// holds a solid block, doubling as the fallback for unmapped
/// codepoints.
pub static FONT_5X7: [u8; GLYPH_COUNT * GLYPH_WIDTH] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // 0x20 ' '
    0x00, 0x00, 0x5F, 0x00, 0x00, // 0x21 '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // 0x22 '"'
    0x14, 0x7F, 0x14, 0x7F, 0x14, // 0x23 '#'
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // 0x24 '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // 0x25 '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // 0x26 '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // 0x27 '\''
    0x00, 0x1C, 0x22, 0x41, 0x00, // 0x28 '('
    0x00, 0x41, 0x22, 0x1C, 0x00, // 0x29 ')'
    0x14, 0x08, 0x3E, 0x08, 0x14, // 0x2A '*'
    0x08, 0x08, 0x3E, 0x08, 0x08, // 0x2B '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // 0x2C ','
    0x08, 0x08, 0x08, 0x08, 0x08, // 0x2D '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // 0x2E '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // 0x2F '/'
    0x3E, 0x51, 0x49, 0x45, 0x3E, // 0x30 '0'
    0x00, 0x42, 0x7F, 0x40, 0x00, // 0x31 '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // 0x32 '2'
    0x21, 0x41, 0x45, 0x4B, 0x31, // 0x33 '3'
    0x18, 0x14, 0x12, 0x7F, 0x10, // 0x34 '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // 0x35 '5'
    0x3C, 0x4A, 0x49, 0x49, 0x30, // 0x36 '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // 0x37 '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // 0x38 '8'
    0x06, 0x49, 0x49, 0x29, 0x1E, // 0x39 '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // 0x3A ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // 0x3B ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // 0x3C '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // 0x3D '='
    0x00, 0x41, 0x22, 0x14, 0x08, // 0x3E '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // 0x3F '?'
    0x32, 0x49, 0x79, 0x41, 0x3E, // 0x40 '@'
    0x7E, 0x11, 0x11, 0x11, 0x7E, // 0x41 'A'
    0x7F, 0x49, 0x49, 0x49, 0x36, // 0x42 'B'
    0x3E, 0x41, 0x41, 0x41, 0x22, // 0x43 'C'
    0x7F, 0x41, 0x41, 0x22, 0x1C, // 0x44 'D'
    0x7F, 0x49, 0x49, 0x49, 0x41, // 0x45 'E'
    0x7F, 0x09, 0x09, 0x09, 0x01, // 0x46 'F'
    0x3E, 0x41, 0x49, 0x49, 0x7A, // 0x47 'G'
    0x7F, 0x08, 0x08, 0x08, 0x7F, // 0x48 'H'
    0x00, 0x41, 0x7F, 0x41, 0x00, // 0x49 'I'
    0x20, 0x40, 0x41, 0x3F, 0x01, // 0x4A 'J'
    0x7F, 0x08, 0x14, 0x22, 0x41, // 0x4B 'K'
    0x7F, 0x40, 0x40, 0x40, 0x40, // 0x4C 'L'
    0x7F, 0x02, 0x0C, 0x02, 0x7F, // 0x4D 'M'
    0x7F, 0x04, 0x08, 0x10, 0x7F, // 0x4E 'N'
    0x3E, 0x41, 0x41, 0x41, 0x3E, // 0x4F 'O'
    0x7F, 0x09, 0x09, 0x09, 0x06, // 0x50 'P'
    0x3E, 0x41, 0x51, 0x21, 0x5E, // 0x51 'Q'
    0x7F, 0x09, 0x19, 0x29, 0x46, // 0x52 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 0x53 'S'
    0x01, 0x01, 0x7F, 0x01, 0x01, // 0x54 'T'
    0x3F, 0x40, 0x40, 0x40, 0x3F, // 0x55 'U'
    0x1F, 0x20, 0x40, 0x20, 0x1F, // 0x56 'V'
    0x3F, 0x40, 0x38, 0x40, 0x3F, // 0x57 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 0x58 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 0x59 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 0x5A 'Z'
    0x00, 0x7F, 0x41, 0x41, 0x00, // 0x5B '['
    0x02, 0x04, 0x08, 0x10, 0x20, // 0x5C '\'
    0x00, 0x41, 0x41, 0x7F, 0x00, // 0x5D ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // 0x5E '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // 0x5F '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // 0x60 '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 0x61 'a'
    0x7F, 0x48, 0x44, 0x44, 0x38, // 0x62 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 0x63 'c'
    0x38, 0x44, 0x44, 0x48, 0x7F, // 0x64 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 0x65 'e'
    0x08, 0x7E, 0x09, 0x01, 0x02, // 0x66 'f'
    0x0C, 0x52, 0x52, 0x52, 0x3E, // 0x67 'g'
    0x7F, 0x08, 0x04, 0x04, 0x78, // 0x68 'h'
    0x00, 0x44, 0x7D, 0x40, 0x00, // 0x69 'i'
    0x20, 0x40, 0x44, 0x3D, 0x00, // 0x6A 'j'
    0x7F, 0x10, 0x28, 0x44, 0x00, // 0x6B 'k'
    0x00, 0x41, 0x7F, 0x40, 0x00, // 0x6C 'l'
    0x7C, 0x04, 0x18, 0x04, 0x78, // 0x6D 'm'
    0x7C, 0x08, 0x04, 0x04, 0x78, // 0x6E 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 0x6F 'o'
    0x7F, 0x14, 0x14, 0x14, 0x08, // 0x70 'p'
    0x08, 0x14, 0x14, 0x18, 0x7C, // 0x71 'q'
    0x7C, 0x08, 0x04, 0x04, 0x08, // 0x72 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 0x73 's'
    0x04, 0x3F, 0x44, 0x40, 0x20, // 0x74 't'
    0x3C, 0x40, 0x40, 0x20, 0x7C, // 0x75 'u'
    0x1C, 0x20, 0x40, 0x20, 0x1C, // 0x76 'v'
    0x3C, 0x40, 0x30, 0x40, 0x3C, // 0x77 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 0x78 'x'
    0x0C, 0x50, 0x50, 0x50, 0x3C, // 0x79 'y'
    0x44, 0x64, 0x54, 0x4C, 0x44, // 0x7A 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // 0x7B '{'
    0x00, 0x00, 0x7F, 0x00, 0x00, // 0x7C '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // 0x7D '}'
    0x08, 0x08, 0x2A, 0x1C, 0x08, // 0x7E '~'
    0x7F, 0x7F, 0x7F, 0x7F, 0x7F, // 0x7F fallback block
];

/// Look up the 5 column bytes for a character
///
/// Codepoints outside 0x20..=0x7F render as the fallback block.
pub fn glyph(ch: char) -> &'static [u8] {
    let cp = ch as usize;
    let index = if (FIRST_GLYPH..FIRST_GLYPH + GLYPH_COUNT).contains(&cp) {
        cp - FIRST_GLYPH
    } else {
        GLYPH_COUNT - 1
    };
    &FONT_5X7[index * GLYPH_WIDTH..][..GLYPH_WIDTH]
}

/// Character-cell cursor
///
/// Tracks the next cell to render into, in (row, col) cell units. One
/// cell row is one page tall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Cell row, equals the destination page
    row: usize,
    /// Cell column, 0 to [`CELLS_PER_ROW`] - 1
    col: usize,
}

impl Cursor {
    /// Current cell row
    pub fn row(&self) -> usize {
        self.row
    }

    /// Current cell column
    pub fn col(&self) -> usize {
        self.col
    }

    /// Move to a cell, wrapping into the valid range
    pub(crate) fn set(&mut self, row: usize, col: usize, pages: usize) {
        self.row = row % pages;
        self.col = col % CELLS_PER_ROW;
    }

    /// Step to the next cell after a glyph was rendered
    fn advance(&mut self, pages: usize) {
        self.col += 1;
        if self.col > CELLS_PER_ROW - 1 {
            self.col = 0;
            self.row += 1;
            if self.row > pages - 1 {
                self.row = 0;
            }
        }
    }
}

/// Render one character at the cursor and advance it
///
/// Writes the 5 glyph bytes plus one zero spacing byte as whole page
/// bytes at consecutive columns of the cursor's page, overwriting
/// whatever pixels the cell held.
pub(crate) fn blit_char(buffer: &mut FrameBuffer, cursor: &mut Cursor, ch: char) {
    let columns = glyph(ch);
    let offset = COLUMNS * cursor.row + CELL_WIDTH * cursor.col;

    let payload = buffer.payload_mut();
    payload[offset..offset + GLYPH_WIDTH].copy_from_slice(columns);
    payload[offset + GLYPH_WIDTH] = 0;

    let pages = buffer.pages();
    cursor.advance(pages);
}

/// Render a string character by character
///
/// No word wrapping; only the per-character cell wrap applies.
pub(crate) fn blit_str(buffer: &mut FrameBuffer, cursor: &mut Cursor, text: &str) {
    for ch in text.chars() {
        blit_char(buffer, cursor, ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySize;

    #[test]
    fn test_glyph_offsets() {
        // 'A' sits (0x41 - 0x20) * 5 bytes into the table
        assert_eq!(glyph('A'), &FONT_5X7[0x21 * 5..0x21 * 5 + 5]);
        assert_eq!(glyph(' '), &[0x00; 5]);
        assert_eq!(glyph('!'), &[0x00, 0x00, 0x5F, 0x00, 0x00]);
    }

    #[test]
    fn test_unmapped_codepoint_falls_back() {
        assert_eq!(glyph('\u{e9}'), &[0x7F; 5]);
        assert_eq!(glyph('\n'), &[0x7F; 5]);
    }

    #[test]
    fn test_blit_writes_glyph_and_spacing() {
        let mut buf = FrameBuffer::new(DisplaySize::Rows64);
        let mut cursor = Cursor::default();
        cursor.set(2, 3, buf.pages());

        blit_char(&mut buf, &mut cursor, '!');

        let offset = 2 * COLUMNS + 3 * CELL_WIDTH;
        assert_eq!(
            &buf.payload()[offset..offset + CELL_WIDTH],
            &[0x00, 0x00, 0x5F, 0x00, 0x00, 0x00]
        );
        assert_eq!(cursor.col(), 4);
        assert_eq!(cursor.row(), 2);
    }

    #[test]
    fn test_row_fits_21_characters() {
        let mut buf = FrameBuffer::new(DisplaySize::Rows64);
        let mut cursor = Cursor::default();

        for _ in 0..CELLS_PER_ROW {
            blit_char(&mut buf, &mut cursor, 'X');
        }
        // 21 characters filled row 0; the next lands at (1, 0)
        assert_eq!((cursor.row(), cursor.col()), (1, 0));

        blit_char(&mut buf, &mut cursor, 'X');
        assert_eq!((cursor.row(), cursor.col()), (1, 1));
        let offset = COLUMNS;
        assert_eq!(&buf.payload()[offset..offset + GLYPH_WIDTH], glyph('X'));
    }

    #[test]
    fn test_bottom_row_wraps_to_top() {
        let mut buf = FrameBuffer::new(DisplaySize::Rows32);
        let mut cursor = Cursor::default();
        cursor.set(3, CELLS_PER_ROW - 1, buf.pages());

        blit_char(&mut buf, &mut cursor, 'X');
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
    }

    #[test]
    fn test_blit_str_renders_in_order() {
        let mut buf = FrameBuffer::new(DisplaySize::Rows64);
        let mut cursor = Cursor::default();

        blit_str(&mut buf, &mut cursor, "Hi");

        assert_eq!(&buf.payload()[0..GLYPH_WIDTH], glyph('H'));
        assert_eq!(
            &buf.payload()[CELL_WIDTH..CELL_WIDTH + GLYPH_WIDTH],
            glyph('i')
        );
        assert_eq!((cursor.row(), cursor.col()), (0, 2));
    }
}
