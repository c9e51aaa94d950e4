// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A rectangular, row-major field of values.
//!
//! Everything in this crate that has a width and a height lives in one
//! of these: the picture's pixels, the energy grid, and the
//! cumulative-cost grid of the seam search.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  Addresses are `(x, y)`:
/// column first, then row, the same order the `image` crate uses.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

impl<P: Copy + Default> TwoDimensionalMap<P> {
    /// A new map with every cell set to the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// A new map with every cell set to `fill`.
    pub fn filled(width: u32, height: u32, fill: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length is not `width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.data[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// One row as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// One row as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// The cells in row-major order.
    pub fn values(&self) -> &[P] {
        &self.data
    }

    /// A copy with rows and columns exchanged: the cell at `(x, y)`
    /// moves to `(y, x)`, and width and height swap.
    pub fn transpose(&self) -> Self {
        let (width, height) = (self.height, self.width);
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| self[(y, x)])
            .collect();
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    /// Keep only the top-left `width` x `height` rectangle.  Both
    /// dimensions must be no larger than the current ones.
    pub(crate) fn crop(&mut self, width: u32, height: u32) {
        debug_assert!(width <= self.width && height <= self.height);
        if width != self.width {
            let (old, new) = (self.width as usize, width as usize);
            for y in 1..height as usize {
                self.data.copy_within(y * old..y * old + new, y * new);
            }
        }
        self.data.truncate(width as usize * height as usize);
        self.width = width;
        self.height = height;
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
