// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy map to seam
//!
//! Given an energy grid, build the cumulative-cost grid top-down and
//! walk back up from the cheapest bottom cell.  Only vertical seams
//! are found here; horizontal seams are vertical seams of the
//! transposed picture.

use crate::cq;
use crate::error::SeamFault;
use crate::twodmap::TwoDimensionalMap;
use log::debug;
use std::ops::RangeInclusive;

/// One cell of the cumulative-cost grid: the cheapest total energy of
/// any seam reaching this pixel from the top row, and the column of
/// the pixel above it on that seam.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct EnergyAndBackPointer {
    pub energy: f64,
    pub parent: u32,
}

// The first column in `range` holding the smallest value.  Ties go to
// the leftmost column, so the seams are reproducible.
fn leftmost_min<F>(range: RangeInclusive<u32>, value: F) -> u32
where
    F: Fn(u32) -> f64,
{
    let start = *range.start();
    range
        .fold((start, value(start)), |(best, least), x| {
            let e = value(x);
            cq!(e < least, (x, e), (best, least))
        })
        .0
}

/// Build the cumulative-cost grid for an energy grid.
///
/// The first row is the first row of energies.  Every later cell is
/// its own energy plus the cheapest of the (up to) three cells
/// directly above it; neighbors past the left or right edge don't
/// count.
pub fn cumulative_energy(
    energy: &TwoDimensionalMap<f64>,
) -> TwoDimensionalMap<EnergyAndBackPointer> {
    let (width, height) = (energy.width(), energy.height());
    let mut target: TwoDimensionalMap<EnergyAndBackPointer> =
        TwoDimensionalMap::new(width, height);
    if width == 0 || height == 0 {
        return target;
    }

    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer {
            energy: energy[(x, 0)],
            parent: x,
        };
    }

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            let parent = leftmost_min(range, |px| target[(px, y - 1)].energy);
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + target[(parent, y - 1)].energy,
                parent,
            };
        }
    }
    target
}

/// Given an energy grid, return the column of the seam in each row,
/// top to bottom.  Adjacent entries never differ by more than one.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let target = cumulative_energy(energy);

    let mut seam_col = leftmost_min(0..=width - 1, |x| target[(x, height - 1)].energy);
    debug!(
        "cheapest vertical seam ends at column {} with total energy {}",
        seam_col,
        target[(seam_col, height - 1)].energy
    );

    // Each cell remembers the leftmost-cheapest parent above it, so
    // walking the back pointers is the same walk as re-comparing the
    // three neighbors above at each step.
    let mut seam: Vec<u32> = (0..height)
        .rev()
        .map(|y| {
            let here = seam_col;
            seam_col = target[(here, y)].parent;
            here
        })
        .collect();
    seam.reverse();
    seam
}

/// Check that `seam` can be carved out of a dimension `limit` pixels
/// across, running along a dimension `length` pixels long.
pub fn validate_seam(seam: &[u32], limit: u32, length: u32) -> Result<(), SeamFault> {
    if limit <= 1 {
        return Err(SeamFault::TooSmall);
    }
    if seam.len() != length as usize {
        return Err(SeamFault::WrongLength {
            expected: length,
            found: seam.len() as u32,
        });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|(_, v)| **v >= limit) {
        return Err(SeamFault::OutOfBounds {
            index,
            value,
            limit,
        });
    }
    match seam
        .windows(2)
        .position(|pair| cq!(pair[0] > pair[1], pair[0] - pair[1], pair[1] - pair[0]) > 1)
    {
        Some(index) => Err(SeamFault::Disconnected { index }),
        None => Ok(()),
    }
}
