// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error kinds
//!
//! The carver fails in exactly two interesting ways: somebody asked
//! about a pixel that isn't there, or somebody handed it a seam that
//! can't be removed.  Both are reported before anything is touched.

use failure::Fail;

/// The ways a seam can be unfit for removal.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum SeamFault {
    /// The dimension being carved is already a single pixel.
    #[fail(display = "the picture is only one pixel across in that direction")]
    TooSmall,

    /// A seam needs one entry per row (or per column).
    #[fail(display = "expected a seam of length {}, got {}", expected, found)]
    WrongLength { expected: u32, found: u32 },

    /// Entries `index` and `index + 1` are more than one pixel apart.
    #[fail(display = "seam entry {} is more than one pixel from the next", index)]
    Disconnected { index: usize },

    /// Entry `index` points past the edge of the picture.
    #[fail(display = "seam entry {} is {}, past the limit of {}", index, value, limit)]
    OutOfBounds { index: usize, value: u32, limit: u32 },
}

/// Everything the library can return as an error.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[fail(
        display = "pixel ({}, {}) is outside a {}x{} picture",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "invalid seam: {}", _0)]
    InvalidSeam(SeamFault),

    #[fail(display = "a picture must be at least one pixel wide and high")]
    EmptyPicture,

    #[fail(display = "expected {} pixels, got {}", expected, found)]
    PixelCount { expected: usize, found: usize },
}

impl From<SeamFault> for Error {
    fn from(fault: SeamFault) -> Self {
        Error::InvalidSeam(fault)
    }
}
