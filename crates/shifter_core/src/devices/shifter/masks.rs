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

    shifter::masks.rs

    Edge masks and solid color plane patterns for box drawing.

*/

use super::PLANE_COUNT;

/// Left-edge masks. Entry p covers pixels p..=15 of a 16-pixel column;
/// pixel 0 is the most significant bit of a plane word.
pub const BOX_START_MASKS: [u16; 16] = [
    0xFFFF, 0x7FFF, 0x3FFF, 0x1FFF, 0x0FFF, 0x07FF, 0x03FF, 0x01FF,
    0x00FF, 0x007F, 0x003F, 0x001F, 0x000F, 0x0007, 0x0003, 0x0001,
];

/// Right-edge masks. Entry p covers pixels 0..=p of a 16-pixel column.
pub const BOX_END_MASKS: [u16; 16] = [
    0x8000, 0xC000, 0xE000, 0xF000, 0xF800, 0xFC00, 0xFE00, 0xFF00,
    0xFF80, 0xFFC0, 0xFFE0, 0xFFF0, 0xFFF8, 0xFFFC, 0xFFFE, 0xFFFF,
];

/// Solid color patterns, one word per plane. Since a fill is a single color
/// across the whole column, plane n of color index i is all ones if bit n of
/// i is set and all zeroes otherwise.
#[rustfmt::skip]
pub const COLOR_PLANES: [[u16; PLANE_COUNT]; 16] = [
    [0x0000, 0x0000, 0x0000, 0x0000], // Color 0
    [0xFFFF, 0x0000, 0x0000, 0x0000], // Color 1
    [0x0000, 0xFFFF, 0x0000, 0x0000], // Color 2
    [0xFFFF, 0xFFFF, 0x0000, 0x0000], // Color 3
    [0x0000, 0x0000, 0xFFFF, 0x0000], // Color 4
    [0xFFFF, 0x0000, 0xFFFF, 0x0000], // Color 5
    [0x0000, 0xFFFF, 0xFFFF, 0x0000], // Color 6
    [0xFFFF, 0xFFFF, 0xFFFF, 0x0000], // Color 7
    [0x0000, 0x0000, 0x0000, 0xFFFF], // Color 8
    [0xFFFF, 0x0000, 0x0000, 0xFFFF], // Color 9
    [0x0000, 0xFFFF, 0x0000, 0xFFFF], // Color 10
    [0xFFFF, 0xFFFF, 0x0000, 0xFFFF], // Color 11
    [0x0000, 0x0000, 0xFFFF, 0xFFFF], // Color 12
    [0xFFFF, 0x0000, 0xFFFF, 0xFFFF], // Color 13
    [0x0000, 0xFFFF, 0xFFFF, 0xFFFF], // Color 14
    [0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF], // Color 15
];
