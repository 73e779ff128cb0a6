//! Windows bitmap decoder
//!
//! This module parses an uncompressed, bottom-up, 24-bit-per-pixel
//! Windows bitmap from a byte slice and paints it into a
//! [`FrameBuffer`] through the buffer's set-only pixel path.
//!
//! The decoder reads the plane count and compression fields but does
//! not enforce them; files are assumed to follow the supported subset.
//! Thresholding is binary: a pixel whose blue channel is 0xFF stays
//! background, anything else becomes foreground. Pixels falling outside
//! the panel are skipped.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{bmp, DisplaySize, FrameBuffer};
//!
//! # fn icon_bytes() -> &'static [u8] { &[] }
//! let mut buffer = FrameBuffer::new(DisplaySize::Rows64);
//! if let Ok(info) = bmp::draw(icon_bytes(), &mut buffer) {
//!     let _ = (info.width, info.height);
//! }
//! ```

use crate::addressing::PixelOp;
use crate::config::COLUMNS;
use crate::framebuffer::FrameBuffer;

/// Length of the combined file and info headers
const HEADER_LEN: usize = 54;

/// Bitmap file signature, "BM"
const SIGNATURE: [u8; 2] = [0x42, 0x4D];

/// Parsed bitmap geometry
///
/// Read once per decode and discarded; returned so callers can log or
/// sanity-check the source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels (rows are stored bottom-up)
    pub height: u32,
    /// Bits per pixel; the supported subset uses 24
    pub bits_per_pixel: u16,
    /// Byte offset of the pixel array within the file
    pub data_offset: u32,
    /// Bytes per source row, padded to a 4-byte boundary
    pub row_stride: u32,
}

/// Errors that can occur while decoding a bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmpError {
    /// The first two bytes are not the "BM" signature
    InvalidSignature,
    /// The slice ends before the header or a pixel row
    UnexpectedEof {
        /// Bytes required to continue
        needed: usize,
        /// Bytes available
        available: usize,
    },
}

impl core::fmt::Display for BmpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "Not a bitmap: missing BM signature"),
            Self::UnexpectedEof { needed, available } => {
                write!(
                    f,
                    "Bitmap truncated: needed {needed} bytes, have {available}"
                )
            }
        }
    }
}

impl core::error::Error for BmpError {}

fn le_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn le_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Parse the file and info headers
///
/// # Errors
///
/// Returns [`BmpError::InvalidSignature`] on a bad magic number and
/// [`BmpError::UnexpectedEof`] if the slice is shorter than the header.
pub fn parse_header(data: &[u8]) -> Result<BmpInfo, BmpError> {
    if data.len() < HEADER_LEN {
        return Err(BmpError::UnexpectedEof {
            needed: HEADER_LEN,
            available: data.len(),
        });
    }
    if data[0..2] != SIGNATURE {
        return Err(BmpError::InvalidSignature);
    }

    let _file_size = le_u32(data, 2);
    let data_offset = le_u32(data, 10);
    let width = le_u32(data, 18);
    let height = le_u32(data, 22);
    let planes = le_u16(data, 26);
    let bits_per_pixel = le_u16(data, 28);
    let compression = le_u32(data, 30);
    let _image_size = le_u32(data, 34);

    // Read but not enforced; the supported subset is planes=1,
    // compression=0 (BI_RGB).
    log::debug!(
        "bmp header: {}x{} {}bpp, planes={}, compression={}, data at {}",
        width,
        height,
        bits_per_pixel,
        planes,
        compression,
        data_offset
    );

    let bytes_per_pixel = u32::from(bits_per_pixel) / 8;
    let mut row_stride = bytes_per_pixel * width;
    if row_stride % 4 > 0 {
        row_stride += 4 - row_stride % 4;
    }

    Ok(BmpInfo {
        width,
        height,
        bits_per_pixel,
        data_offset,
        row_stride,
    })
}

/// Decode a bitmap and paint its foreground pixels into the buffer
///
/// Source rows are stored bottom-up, so file row `r` lands at panel row
/// `height - 1 - r`. Only foreground pixels are painted (set-only);
/// background pixels leave the buffer untouched.
///
/// # Errors
///
/// Returns [`BmpError::InvalidSignature`] on a bad magic number and
/// [`BmpError::UnexpectedEof`] if the pixel array runs past the end of
/// the slice.
pub fn draw(data: &[u8], buffer: &mut FrameBuffer) -> Result<BmpInfo, BmpError> {
    let info = parse_header(data)?;

    let width = info.width as usize;
    let height = info.height as usize;
    let stride = info.row_stride as usize;
    let base = info.data_offset as usize;

    for row in 0..height {
        let row_start = base.saturating_add(row.saturating_mul(stride));
        let row_used = width.saturating_mul(3);
        let row_end = row_start.saturating_add(row_used);
        if row_end > data.len() {
            return Err(BmpError::UnexpectedEof {
                needed: row_end,
                available: data.len(),
            });
        }

        let y = (height - 1) - row;
        for x in 0..width {
            // Blue channel decides: 0xFF is background, all else ink
            if data[row_start + x * 3] != 0xFF && x < COLUMNS && y < buffer.height() {
                let _ = buffer.draw_pixel(x, y, PixelOp::Set);
            }
        }
    }

    Ok(info)
}
