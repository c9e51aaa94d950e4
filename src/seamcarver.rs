// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - find seams, remove seams
//!
//! The carver owns its picture for as long as it works on it.
//! Horizontal work is vertical work on the transposed picture; the
//! transpose is held in a guard so the picture always comes back the
//! right way up.

use crate::energy::{calculate_energy, energy};
use crate::error::Error;
use crate::picture::Picture;
use crate::seam::{energy_to_vertical_seam, validate_seam};
use crate::seamfinder::SeamFinder;
use image::Primitive;
use log::debug;

/// A picture, and the operations for carving it down one seam at a
/// time.
#[derive(Debug, Clone)]
pub struct SeamCarver<S: Primitive + 'static> {
    picture: Picture<S>,
}

impl<S: Primitive + 'static> SeamCarver<S> {
    /// Creates a new SeamCarver with a picture to be carved.
    pub fn new(picture: Picture<S>) -> Self {
        SeamCarver { picture }
    }

    pub fn picture(&self) -> &Picture<S> {
        &self.picture
    }

    /// Hand the carved picture back.
    pub fn into_picture(self) -> Picture<S> {
        self.picture
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    pub fn height(&self) -> u32 {
        self.picture.height()
    }

    /// The energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, Error> {
        energy(&self.picture, x, y)
    }

    /// Remove one pixel from every row, at the column the seam names
    /// for that row.  The seam is checked in full before the picture
    /// is touched; a bad seam leaves the picture exactly as it was.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), Error> {
        remove_vertical_seam(&mut self.picture, seam)
    }

    /// Remove one pixel from every column, at the row the seam names
    /// for that column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), Error> {
        let (width, height) = self.picture.dimensions();
        validate_seam(seam, height, width)?;
        let mut flipped = self.picture.transposed();
        remove_vertical_seam(&mut *flipped, seam)
    }
}

impl<S: Primitive + 'static> SeamFinder for SeamCarver<S> {
    fn find_vertical_seam(&mut self) -> Vec<u32> {
        energy_to_vertical_seam(&calculate_energy(&self.picture))
    }

    fn find_horizontal_seam(&mut self) -> Vec<u32> {
        let flipped = self.picture.transposed();
        let energy = calculate_energy(&*flipped);
        energy_to_vertical_seam(&energy)
    }
}

// Shift everything right of the seam one place left, then drop the
// last column, which is now a duplicate.
fn remove_vertical_seam<S>(picture: &mut Picture<S>, seam: &[u32]) -> Result<(), Error>
where
    S: Primitive + 'static,
{
    let (width, height) = picture.dimensions();
    validate_seam(seam, width, height)?;

    for (y, &x) in seam.iter().enumerate() {
        picture.row_mut(y as u32)[x as usize..].rotate_left(1);
    }
    picture.resize(width - 1, height)?;
    debug!(
        "removed a vertical seam, picture is now {}x{}",
        width - 1,
        height
    );
    Ok(())
}
