// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{Error, Picture, SeamCarver, SeamFault, SeamFinder};

// A color ramp with a bright stripe two pixels wide at columns 6 and
// 7: the stripe is the interesting content and should survive
// carving.
fn striped(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        if x == 6 || x == 7 {
            Rgb([255, 255, 255])
        } else {
            Rgb([(x * 3) as u8, (y * 2) as u8, 40])
        }
    })
}

#[test]
fn carving_keeps_the_stripe() {
    let picture = Picture::from_image(&striped(12, 8)).unwrap();
    let mut carver = SeamCarver::new(picture);

    for _ in 0..4 {
        let seam = carver.find_vertical_seam();
        assert_eq!(seam.len(), 8);
        carver.remove_vertical_seam(&seam).unwrap();
    }
    for _ in 0..2 {
        let seam = carver.find_horizontal_seam();
        assert_eq!(seam.len(), 8);
        carver.remove_horizontal_seam(&seam).unwrap();
    }

    let out = carver.into_picture().to_image();
    assert_eq!(out.dimensions(), (8, 6));
    for y in 0..6 {
        assert!(
            (0..8).any(|x| *out.get_pixel(x, y) == Rgb([255, 255, 255])),
            "row {} lost the stripe",
            y
        );
    }
}

#[test]
fn every_row_loses_exactly_one_pixel() {
    let image = striped(9, 5);
    let mut carver = SeamCarver::new(Picture::from_image(&image).unwrap());
    let seam = carver.find_vertical_seam();
    carver.remove_vertical_seam(&seam).unwrap();

    let carved = carver.picture();
    for (y, &removed) in seam.iter().enumerate() {
        let y = y as u32;
        let expected: Vec<Rgb<u8>> = (0..9)
            .filter(|&x| x != removed)
            .map(|x| *image.get_pixel(x, y))
            .collect();
        assert_eq!(carved.row(y), &expected[..]);
    }
}

#[test]
fn ten_by_five_carves_down_to_one_column() {
    let image = striped(10, 5);
    let mut carver = SeamCarver::new(Picture::from_image(&image).unwrap());
    for _ in 0..9 {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
    }
    assert_eq!(carver.picture().dimensions(), (1, 5));

    let seam = carver.find_vertical_seam();
    assert_eq!(
        carver.remove_vertical_seam(&seam),
        Err(Error::InvalidSeam(SeamFault::TooSmall))
    );
    assert_eq!(carver.picture().dimensions(), (1, 5));
}

#[test]
fn energy_is_checked_against_the_current_size() {
    let mut carver = SeamCarver::new(Picture::from_image(&striped(4, 3)).unwrap());
    assert!(carver.energy(3, 2).is_ok());
    let seam = carver.find_vertical_seam();
    carver.remove_vertical_seam(&seam).unwrap();
    assert_eq!(
        carver.energy(3, 2),
        Err(Error::OutOfRange {
            x: 3,
            y: 2,
            width: 3,
            height: 3
        })
    );
}
