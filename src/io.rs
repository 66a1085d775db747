//! # City Files
//!
//! Reads the plain-text city format: a fixed six-line header that is skipped,
//! followed by one `<id> <x> <y>` line per city. Blank lines are ignored and a
//! line reading `EOF` ends the list.
//!
//! ```text
//! NAME : square
//! COMMENT : four corners
//! TYPE : TSP
//! DIMENSION : 4
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0 0
//! 2 1 0
//! 3 1 1
//! 4 0 1
//! EOF
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::city::{City, CityCatalogue, CityId};
use crate::error::{Result, TourError};

/// Number of leading lines that carry no city data.
pub const HEADER_LINES: usize = 6;

const END_MARKER: &str = "EOF";

/// Parses every city line from `reader`, without validating the list as a whole.
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<City>> {
    let mut cities = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(HEADER_LINES) {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == END_MARKER {
            break;
        }
        cities.push(parse_city(trimmed, index + 1)?);
    }

    debug!(count = cities.len(), "read cities");
    Ok(cities)
}

/// Reads and validates a catalogue from `reader`.
pub fn read_catalogue<R: BufRead>(reader: R) -> Result<CityCatalogue> {
    CityCatalogue::new(read_cities(reader)?)
}

/// Reads and validates a catalogue from the file at `path`.
pub fn read_catalogue_file<P: AsRef<Path>>(path: P) -> Result<CityCatalogue> {
    let file = File::open(path)?;
    read_catalogue(BufReader::new(file))
}

fn parse_city(line: &str, line_number: usize) -> Result<City> {
    let parse_error = |message: String| TourError::Parse {
        line: line_number,
        message,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[id, x, y] = fields.as_slice() else {
        return Err(parse_error(format!(
            "expected `<id> <x> <y>`, found {} fields",
            fields.len()
        )));
    };

    let id: CityId = id
        .parse()
        .map_err(|_| parse_error(format!("invalid city id `{}`", id)))?;
    let x: f64 = x
        .parse()
        .map_err(|_| parse_error(format!("invalid x coordinate `{}`", x)))?;
    let y: f64 = y
        .parse()
        .map_err(|_| parse_error(format!("invalid y coordinate `{}`", y)))?;

    Ok(City::new(id, x, y))
}
