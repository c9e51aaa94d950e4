// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a picture
//!
//! The energy of a pixel is the magnitude of the color gradient
//! across it: compare the neighbors to its left and right, compare
//! the neighbors above and below, and take the square root of the
//! summed squared channel differences.
//!
//! At the borders the neighbors wrap around to the opposite edge.
//! That gives every pixel, including the corners, a well-defined
//! gradient, and seams depend on it: do not "fix" it into clamping.

use crate::error::Error;
use crate::picture::Picture;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, Pixel, Primitive, Rgb};
use itertools::{iproduct, Itertools, MinMaxResult};
use log::trace;
use num_traits::NumCast;

// Takes the channels (R,G,B) from two pixels, squares the difference
// between each pair of channels, and sums them up:
//
//        |Δ|² = (Δr)² + (Δg)² + (Δb)²
//
fn energy_of_pair<S>(p1: &Rgb<S>, p2: &Rgb<S>) -> f64
where
    S: Primitive + 'static,
{
    fn channel<S: Primitive>(c: S) -> f64 {
        <f64 as NumCast>::from(c).unwrap_or(0.0)
    }

    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(c1, c2)| (channel(*c2) - channel(*c1)).powi(2))
        .sum()
}

/// The energy of the pixel at column `x`, row `y`.
pub fn energy<S>(picture: &Picture<S>, x: u32, y: u32) -> Result<f64, Error>
where
    S: Primitive + 'static,
{
    let (width, height) = picture.dimensions();
    if x >= width || y >= height {
        return Err(Error::OutOfRange {
            x,
            y,
            width,
            height,
        });
    }

    let (left, right) = ((x + width - 1) % width, (x + 1) % width);
    let (up, down) = ((y + height - 1) % height, (y + 1) % height);

    let delta_x = energy_of_pair(&picture[(left, y)], &picture[(right, y)]);
    let delta_y = energy_of_pair(&picture[(x, up)], &picture[(x, down)]);
    Ok((delta_x + delta_y).sqrt())
}

/// Compute the energy of every pixel in a picture.
pub fn calculate_energy<S>(picture: &Picture<S>) -> TwoDimensionalMap<f64>
where
    S: Primitive + 'static,
{
    let (width, height) = picture.dimensions();
    trace!("building a {}x{} energy grid", width, height);

    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        // Every address here is in range, so the error arm never fires.
        emap[(x, y)] = energy(picture, x, y).unwrap_or(0.0);
    }
    emap
}

/// Render an energy grid as a grayscale image, brightest where the
/// energy is highest.  A grid with no energy anywhere is all black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let ceiling = match energy.values().iter().minmax() {
        MinMaxResult::NoElements => 0.0,
        MinMaxResult::OneElement(e) => *e,
        MinMaxResult::MinMax(_, e) => *e,
    };

    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        if ceiling <= 0.0 {
            Luma([0])
        } else {
            Luma([(energy[(x, y)] * 255.0 / ceiling).round().min(255.0) as u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(width: u32, height: u32, data: &[u8]) -> Picture<u8> {
        let pixels = data.chunks(3).map(|c| Rgb([c[0], c[1], c[2]])).collect();
        Picture::from_pixels(width, height, pixels).unwrap()
    }

    // A 3x4 test picture with hand-computed energies.
    const IMAGE_DATA: [u8; 36] = [
        255, 101, 51, 255, 101, 153, 255, 101, 255, //
        255, 153, 51, 255, 153, 153, 255, 153, 255, //
        255, 203, 51, 255, 204, 153, 255, 205, 255, //
        255, 255, 51, 255, 255, 153, 255, 255, 255, //
    ];

    #[test]
    fn interior_pixel_energy() {
        let p = picture(3, 4, &IMAGE_DATA);
        // Δx: (255-255)² + (205-203)² + (255-51)² = 4 + 41616
        // Δy: (255-255)² + (255-153)² + (153-153)² = 10404
        let expected = (41620.0f64 + 10404.0).sqrt();
        assert_eq!(energy(&p, 1, 2).unwrap(), expected);
    }

    #[test]
    fn border_pixel_energy_wraps() {
        let p = picture(3, 4, &IMAGE_DATA);
        // Left of (0, 0) is (2, 0); above it is (0, 3).
        // Δx: (101-101)² + (255-153)² = 10404
        // Δy: (255-153)² = 10404
        let expected = (10404.0f64 + 10404.0).sqrt();
        assert_eq!(energy(&p, 0, 0).unwrap(), expected);
    }

    #[test]
    fn uniform_picture_has_no_energy() {
        let p = Picture::new(4, 3, Rgb([17u8, 80, 200])).unwrap();
        let grid = calculate_energy(&p);
        assert!(grid.values().iter().all(|e| *e == 0.0));
    }

    #[test]
    fn energy_is_never_negative() {
        let p = picture(3, 4, &IMAGE_DATA);
        let grid = calculate_energy(&p);
        assert_eq!((grid.width(), grid.height()), (3, 4));
        assert!(grid.values().iter().all(|e| *e >= 0.0));
    }

    #[test]
    fn slivers_wrap_onto_themselves() {
        let column = picture(1, 3, &[0, 0, 0, 10, 0, 0, 30, 0, 0]);
        // Left and right neighbor of a 1-wide picture are the pixel
        // itself, so only the vertical term counts.
        assert_eq!(energy(&column, 0, 1).unwrap(), 30.0);
        assert_eq!(energy(&column, 0, 0).unwrap(), 20.0);

        let row = picture(3, 1, &[0, 0, 0, 0, 10, 0, 0, 30, 0]);
        assert_eq!(energy(&row, 1, 0).unwrap(), 30.0);

        let dot = picture(1, 1, &[1, 2, 3]);
        assert_eq!(energy(&dot, 0, 0).unwrap(), 0.0);
    }

    #[test]
    fn out_of_range_is_refused() {
        let p = picture(3, 4, &IMAGE_DATA);
        assert_eq!(
            energy(&p, 3, 0),
            Err(Error::OutOfRange {
                x: 3,
                y: 0,
                width: 3,
                height: 4
            })
        );
        assert!(energy(&p, 0, 4).is_err());
    }

    #[test]
    fn energy_image_is_normalized() {
        let grid = TwoDimensionalMap::from_vec(2, 1, vec![5.0, 10.0]).unwrap();
        let img = energy_to_image(&grid);
        assert_eq!(img.get_pixel(0, 0), &Luma([128]));
        assert_eq!(img.get_pixel(1, 0), &Luma([255]));

        let flat = TwoDimensionalMap::filled(2, 2, 0.0);
        assert!(energy_to_image(&flat).pixels().all(|p| p[0] == 0));
    }
}
