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

    shifter::error.rs

    Error types for the Shifter display.

*/

use std::{error::Error, fmt::Display};

/// Failures reported by the display's fallible operations. Every operation
/// validates its inputs before the first write, so a returned error means
/// screen memory was not touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShifterError {
    OutOfRange,
    InvalidGeometry,
    SurfaceTooSmall,
}

impl Error for ShifterError {}
impl Display for ShifterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self {
            ShifterError::OutOfRange => {
                write!(f, "A coordinate was outside the addressable 320x200 grid.")
            }
            ShifterError::InvalidGeometry => {
                write!(f, "Box corners were not ordered left-to-right, top-to-bottom.")
            }
            ShifterError::SurfaceTooSmall => {
                write!(f, "A supplied buffer was smaller than the operation requires.")
            }
        }
    }
}
