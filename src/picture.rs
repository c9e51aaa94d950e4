// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer
//!
//! A mutable rectangle of RGB pixels.  This is the only thing the
//! carver ever changes, and every change in width or height goes
//! through `resize`, so the rectangle can never become ragged.
//!
//! Images come in and go out through the `image` crate; internally
//! the pixels live in a `TwoDimensionalMap`, which lets us shuffle
//! them around within a row without reallocating.

use crate::error::Error;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb};
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// A rectangular grid of RGB pixels, never smaller than 1x1.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture<S: Primitive + 'static> {
    pixels: TwoDimensionalMap<Rgb<S>>,
}

impl<S: Primitive + 'static> Picture<S> {
    /// A picture of a single color.
    pub fn new(width: u32, height: u32, fill: Rgb<S>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyPicture);
        }
        Ok(Picture {
            pixels: TwoDimensionalMap::filled(width, height, fill),
        })
    }

    /// A picture from a row-major list of pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb<S>>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyPicture);
        }
        let found = pixels.len();
        TwoDimensionalMap::from_vec(width, height, pixels)
            .map(|pixels| Picture { pixels })
            .ok_or(Error::PixelCount {
                expected: width as usize * height as usize,
                found,
            })
    }

    /// Copy any image the `image` crate can view, converting every
    /// pixel to RGB along the way.
    pub fn from_image<I, P>(image: &I) -> Result<Self, Error>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
    {
        let (width, height) = image.dimensions();
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| image.get_pixel(x, y).to_rgb())
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Copy the picture out into an `image` buffer.
    pub fn to_image(&self) -> ImageBuffer<Rgb<S>, Vec<S>> {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self[(x, y)])
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// The pixel at column `x`, row `y`, if there is one.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb<S>> {
        self.pixels.get(x, y)
    }

    /// Overwrite the pixel at column `x`, row `y`.
    pub fn put_pixel(&mut self, x: u32, y: u32, pixel: Rgb<S>) -> Result<(), Error> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return Err(Error::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        self.pixels[(x, y)] = pixel;
        Ok(())
    }

    /// One row of pixels, left to right.
    pub fn row(&self, y: u32) -> &[Rgb<S>] {
        self.pixels.row(y)
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [Rgb<S>] {
        self.pixels.row_mut(y)
    }

    /// Shrink the picture to its top-left `width` x `height`
    /// rectangle.  Growing, or shrinking to nothing, is refused.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyPicture);
        }
        let (current_width, current_height) = self.dimensions();
        if width > current_width || height > current_height {
            return Err(Error::OutOfRange {
                x: width - 1,
                y: height - 1,
                width: current_width,
                height: current_height,
            });
        }
        self.pixels.crop(width, height);
        Ok(())
    }

    /// Turn every column into a row and every row into a column.
    /// Doing it twice gets you back where you started.
    pub fn transpose(&mut self) {
        self.pixels = self.pixels.transpose();
    }

    /// Transpose the picture for as long as the returned guard lives.
    /// However the guard goes away, the picture is transposed back.
    pub fn transposed(&mut self) -> Transposed<'_, S> {
        self.transpose();
        Transposed { picture: self }
    }
}

impl<S: Primitive + 'static> Index<(u32, u32)> for Picture<S> {
    type Output = Rgb<S>;

    fn index(&self, (x, y): (u32, u32)) -> &Rgb<S> {
        &self.pixels[(x, y)]
    }
}

impl<S: Primitive + 'static> IndexMut<(u32, u32)> for Picture<S> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Rgb<S> {
        &mut self.pixels[(x, y)]
    }
}

/// A picture on loan in transposed form; see `Picture::transposed`.
pub struct Transposed<'a, S: Primitive + 'static> {
    picture: &'a mut Picture<S>,
}

impl<'a, S: Primitive + 'static> Deref for Transposed<'a, S> {
    type Target = Picture<S>;

    fn deref(&self) -> &Picture<S> {
        self.picture
    }
}

impl<'a, S: Primitive + 'static> DerefMut for Transposed<'a, S> {
    fn deref_mut(&mut self) -> &mut Picture<S> {
        self.picture
    }
}

impl<'a, S: Primitive + 'static> Drop for Transposed<'a, S> {
    fn drop(&mut self) {
        self.picture.transpose();
    }
}
