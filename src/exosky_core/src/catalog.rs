//! Exoplanet catalog records and batch placement.
//!
//! Catalog rows follow the NASA Exoplanet Archive export shape, a comma separated
//! row of planet name, host star name, right ascension and declination in decimal
//! degrees, and the system distance. The archive publishes distances in parsecs,
//! this crate never converts units so all records rendered together must share one.

use crate::coords::{project, CartesianCoordinates};
use crate::prelude::{Error, ExoskyResult};
use lazy_static::lazy_static;
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::str;
use std::str::FromStr;

/// A single exoplanet record with its sky position already in decimal degrees.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Exoplanet {
    /// Name of the planet
    pub name: SmolStr,

    /// Name of the host star
    pub host_star: SmolStr,

    /// Right ascension in decimal degrees
    pub ra: f64,

    /// Declination in decimal degrees
    pub dec: f64,

    /// Distance from Earth, in whatever unit the source catalog uses
    pub distance: f64,
}

impl Exoplanet {
    /// Cartesian placement of this planet, in the catalog's distance unit.
    pub fn position(&self) -> CartesianCoordinates {
        project(self.ra, self.dec, self.distance)
    }
}

impl FromStr for Exoplanet {
    type Err = Error;

    /// Load an Exoplanet from a single comma separated archive row.
    fn from_str(row: &str) -> ExoskyResult<Self> {
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 5 {
            return Err(Error::ValueError(format!(
                "Catalog row must have 5 fields, found {}.",
                fields.len()
            )));
        }
        let ra = f64::from_str(fields[2].trim())?;
        let dec = f64::from_str(fields[3].trim())?;
        let distance = f64::from_str(fields[4].trim())?;
        Ok(Exoplanet {
            name: fields[0].trim().into(),
            host_star: fields[1].trim().into(),
            ra,
            dec,
            distance,
        })
    }
}

/// Collection of [`Exoplanet`] records sharing a distance unit.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Catalog {
    /// Collection of records
    pub planets: Vec<Exoplanet>,
}

impl Catalog {
    /// Load a catalog from the text of an archive CSV export.
    ///
    /// Comment lines beginning with `#` and the column header row are ignored.
    /// Rows with empty fields are skipped, the archive leaves the distance blank
    /// for systems without a measured distance. Structurally malformed rows
    /// raise an error.
    pub fn from_csv(text: &str) -> ExoskyResult<Self> {
        let mut planets = Vec::new();
        let mut skipped: usize = 0;
        for row in text.split('\n') {
            let row = row.trim();
            if row.is_empty() || row.starts_with('#') || row.starts_with("pl_name") {
                continue;
            }
            // entries with gaps are skipped
            if row.split(',').any(|field| field.trim().is_empty()) {
                skipped += 1;
                continue;
            }
            planets.push(Exoplanet::from_str(row)?);
        }
        debug!(
            "Loaded {} catalog rows, skipped {} with missing fields.",
            planets.len(),
            skipped
        );
        Ok(Catalog { planets })
    }

    /// Cartesian placements for every record, in catalog order.
    ///
    /// Records are projected in parallel, each placement depends only on its own
    /// row so no coordination is needed.
    pub fn positions(&self) -> Vec<CartesianCoordinates> {
        self.planets
            .par_iter()
            .map(|planet| planet.position())
            .collect()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Is the catalog empty.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

const PRELOAD_PLANETS: &[u8] = include_bytes!("../data/notable_exoplanets.csv");

lazy_static! {
    /// Notable exoplanets bundled with the crate, distances in parsecs.
    pub static ref NOTABLE_PLANETS: Catalog = {
        let text = str::from_utf8(PRELOAD_PLANETS).unwrap();
        Catalog::from_csv(text).unwrap()
    };
}
