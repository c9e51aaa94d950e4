// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::{bail, Error};
use log::{debug, info};
use seamcarve::{calculate_energy, energy_to_image, Picture, SeamCarver, SeamFinder};
use std::process;

// This is silly and basically a reimplementation of `bool` and `not`,
// but it makes it much clearer in the loop below what's going on.
#[derive(PartialEq, Copy, Clone, Debug)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        if self == Carve::Width {
            Carve::Height
        } else {
            Carve::Width
        }
    }
}

fn carveonce(carver: &mut SeamCarver<u8>, direction: Carve) -> Result<(), Error> {
    match direction {
        Carve::Width => {
            let seam = carver.find_vertical_seam();
            carver.remove_vertical_seam(&seam)?;
        }
        Carve::Height => {
            let seam = carver.find_horizontal_seam();
            carver.remove_horizontal_seam(&seam)?;
        }
    }
    debug!("{:?}: {}x{}", direction, carver.width(), carver.height());
    Ok(())
}

// Every pass recalculates the whole energy map.  Alternate directions
// while both dimensions need carving, then finish whichever is left.
fn carve(carver: &mut SeamCarver<u8>, newwidth: u32, newheight: u32) -> Result<(), Error> {
    let mut direction = Carve::Width;
    while carver.width() > newwidth && carver.height() > newheight {
        carveonce(carver, direction)?;
        direction = direction.turn();
    }
    while carver.width() > newwidth {
        carveonce(carver, Carve::Width)?;
    }
    while carver.height() > newheight {
        carveonce(carver, Carve::Height)?;
    }
    Ok(())
}

fn target(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    if !matches.is_present(name) {
        return Ok(current);
    }
    let value = value_t!(matches, name, u32)?;
    if value == 0 {
        bail!("the target {} must be at least 1", name);
    }
    if value > current {
        bail!(
            "seamcarve cannot upscale: the target {} {} is larger than {}",
            name,
            value,
            current
        );
    }
    Ok(value)
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .takes_value(true)
                .help("The width to carve the image down to"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .takes_value(true)
                .help("The height to carve the image down to"),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .help("Write the energy map of the input instead of carving it"),
        )
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .get_matches();

    let (input, output) = match (matches.value_of("input"), matches.value_of("output")) {
        (Some(input), Some(output)) => (input, output),
        _ => bail!("both an input and an output file are required"),
    };

    let image = image::open(input)?.to_rgb();
    let picture = Picture::from_image(&image)?;
    let (width, height) = picture.dimensions();
    info!("loaded {} ({}x{})", input, width, height);

    if matches.is_present("energy") {
        energy_to_image(&calculate_energy(&picture)).save(output)?;
        info!("wrote the energy map to {}", output);
        return Ok(());
    }

    let newwidth = target(&matches, "width", width)?;
    let newheight = target(&matches, "height", height)?;

    let mut carver = SeamCarver::new(picture);
    carve(&mut carver, newwidth, newheight)?;
    carver.into_picture().to_image().save(output)?;
    info!("wrote {} ({}x{})", output, newwidth, newheight);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
