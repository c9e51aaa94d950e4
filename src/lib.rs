// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Load a `Picture`, hand it to a `SeamCarver`, and repeatedly find
//! and remove the least interesting row or column of pixels.

mod ternary;

pub mod energy;
pub use energy::{calculate_energy, energy_to_image};

pub mod error;
pub use error::{Error, SeamFault};

pub mod picture;
pub use picture::{Picture, Transposed};

pub mod seam;
pub use seam::{cumulative_energy, energy_to_vertical_seam, validate_seam};

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod seamfinder;
pub use seamfinder::SeamFinder;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;
