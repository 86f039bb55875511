/*
    stshifter
    https://github.com/dbalsom/stshifter

    Copyright 2025-2026 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    shifter::tables.rs

    Coordinate translation tables for the interleaved planar bitmap.

*/

//! Pixel coordinates are translated to screen addresses through two lookup
//! tables instead of per-call multiply/divide: one entry per screen column
//! giving the column's byte offset within its scanline ("RSA", relative
//! screen address) and pixel position within its 16-pixel column, and one
//! entry per row giving the scanline's base offset.

use lazy_static::lazy_static;

use super::{
    error::ShifterError,
    COLUMN_BYTES,
    COLUMN_PIXELS,
    LOWRES_COLUMNS,
    LOWRES_HEIGHT,
    LOWRES_PITCH,
    LOWRES_WIDTH,
};

/// Screen address of a single pixel: the byte offset of its column within
/// the frame and its pixel position within the column. Pixel 0 is the
/// leftmost pixel, the most significant bit of each plane word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelAddress {
    pub rsa: u16,
    pub pixel: u16,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct XlatEntry {
    rsa: u16,
    pixel: u16,
}

/// Precomputed coordinate conversion tables. Built once and shared
/// process-wide via [`init_tables`]/[`translate`]; immutable afterwards.
#[derive(PartialEq, Eq)]
pub struct XlatTables {
    x_conv: [XlatEntry; LOWRES_WIDTH],
    y_conv: [u16; LOWRES_HEIGHT],
}

impl XlatTables {
    pub fn new() -> Self {
        let mut x_conv = [XlatEntry::default(); LOWRES_WIDTH];
        let mut y_conv = [0u16; LOWRES_HEIGHT];

        for col in 0..LOWRES_COLUMNS {
            for pixel in 0..COLUMN_PIXELS {
                x_conv[col * COLUMN_PIXELS + pixel] = XlatEntry {
                    rsa: (col * COLUMN_BYTES) as u16,
                    pixel: pixel as u16,
                };
            }
        }

        for row in 0..LOWRES_HEIGHT {
            y_conv[row] = (row * LOWRES_PITCH) as u16;
        }

        log::debug!(
            "Built coordinate translation tables: {} column entries, {} scanline offsets",
            LOWRES_WIDTH,
            LOWRES_HEIGHT
        );

        Self { x_conv, y_conv }
    }

    /// Translate an (x, y) pixel coordinate to its screen address.
    pub fn translate(&self, x: u16, y: u16) -> Result<PixelAddress, ShifterError> {
        if usize::from(x) >= LOWRES_WIDTH || usize::from(y) >= LOWRES_HEIGHT {
            return Err(ShifterError::OutOfRange);
        }

        let entry = self.x_conv[usize::from(x)];
        Ok(PixelAddress {
            rsa: self.y_conv[usize::from(y)] + entry.rsa,
            pixel: entry.pixel,
        })
    }
}

lazy_static! {
    /// The process-wide translation tables. Read-only after initialization;
    /// safe to share across threads without synchronization.
    static ref XLAT_TABLES: XlatTables = XlatTables::new();
}

/// Force table initialization. Optional (first use initializes them) and
/// idempotent; repeated calls observe identical table contents.
pub fn init_tables() {
    lazy_static::initialize(&XLAT_TABLES);
}

/// Translate an (x, y) pixel coordinate to its screen address using the
/// process-wide tables.
pub fn translate(x: u16, y: u16) -> Result<PixelAddress, ShifterError> {
    XLAT_TABLES.translate(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_matches_address_model() {
        // rsa = row * 160 + (column index) * 8, pixel = x mod 16,
        // for every addressable coordinate.
        for y in 0..LOWRES_HEIGHT as u16 {
            for x in 0..LOWRES_WIDTH as u16 {
                let addr = translate(x, y).unwrap();
                assert_eq!(addr.rsa, y * 160 + (x / 16) * 8, "rsa at ({}, {})", x, y);
                assert_eq!(addr.pixel, x % 16, "pixel at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn translate_rejects_out_of_range() {
        assert_eq!(translate(320, 0), Err(ShifterError::OutOfRange));
        assert_eq!(translate(0, 200), Err(ShifterError::OutOfRange));
        assert_eq!(translate(u16::MAX, u16::MAX), Err(ShifterError::OutOfRange));
    }

    #[test]
    fn table_build_is_idempotent() {
        assert!(XlatTables::new() == XlatTables::new());

        init_tables();
        let first = translate(37, 11).unwrap();
        init_tables();
        assert_eq!(translate(37, 11).unwrap(), first);
    }

    #[test]
    fn rsa_is_column_aligned_within_scanline() {
        for x in (0..LOWRES_WIDTH as u16).step_by(5) {
            let addr = translate(x, 3).unwrap();
            let line_offset = usize::from(addr.rsa) - 3 * LOWRES_PITCH;
            assert_eq!(line_offset % COLUMN_BYTES, 0);
            assert!(line_offset < LOWRES_PITCH);
        }
    }
}
