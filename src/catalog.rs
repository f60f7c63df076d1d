//! # Star catalog
//!
//! Reader for HYG-style star databases: comma-delimited text without a header line, one star
//! per row, with the values of interest at fixed column indices.
//!
//! | Column | Content | Unit |
//! |---|---|---|
//! | 6 | proper name (often empty) | |
//! | 7 | right ascension | hours |
//! | 8 | declination | degrees |
//! | 13 | apparent magnitude | |
//!
//! Right ascension is converted to degrees on read, so every [`StarRecord`] can be fed to
//! [`crate::horizontal::horizontal_for_star`] as is.
//!
//! Two policies are offered for malformed rows: [`CatalogMode::Strict`] stops on the first
//! one with [`SkydomeError::MalformedStarRecord`], [`CatalogMode::Lenient`] logs a warning and
//! skips it.
use std::{fs::File, io::Read, path::Path};

use csv::{ByteRecord, ReaderBuilder, Trim};
use log::{debug, warn};
use serde::{de::IgnoredAny, Deserialize};

use crate::{
    constants::{Degree, DEG_PER_HOUR},
    skydome_errors::SkydomeError,
};

/// One catalog star, in the units the projector expects.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// Right ascension in degrees, [0, 360).
    pub ra: Degree,
    /// Declination in degrees, [-90, 90].
    pub dec: Degree,
    /// Apparent visual magnitude (lower is brighter).
    pub magnitude: f64,
    /// Proper name, `None` for the many unnamed stars.
    pub name: Option<String>,
}

/// What to do with a row that cannot be turned into a [`StarRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogMode {
    #[default]
    Strict,
    Lenient,
}

/// Positional layout of a HYG row; trailing columns after the magnitude are not read.
#[derive(Debug, Deserialize)]
struct HygRow {
    _id: IgnoredAny,
    _hip: IgnoredAny,
    _hd: IgnoredAny,
    _hr: IgnoredAny,
    _gliese: IgnoredAny,
    _bayer_flamsteed: IgnoredAny,
    proper: Option<String>,
    ra: f64,
    dec: f64,
    _dist: IgnoredAny,
    _pmra: IgnoredAny,
    _pmdec: IgnoredAny,
    _rv: IgnoredAny,
    mag: f64,
}

impl TryFrom<HygRow> for StarRecord {
    type Error = String;

    fn try_from(row: HygRow) -> Result<Self, Self::Error> {
        if !(0.0..24.0).contains(&row.ra) {
            return Err(format!("right ascension {}h outside [0, 24)", row.ra));
        }
        if !(-90.0..=90.0).contains(&row.dec) {
            return Err(format!("declination {}° outside [-90, 90]", row.dec));
        }

        Ok(StarRecord {
            ra: row.ra * DEG_PER_HOUR,
            dec: row.dec,
            magnitude: row.mag,
            name: row.proper.filter(|n| !n.is_empty()),
        })
    }
}

fn star_from_record(record: &ByteRecord) -> Result<StarRecord, String> {
    let row: HygRow = record.deserialize(None).map_err(|e| match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => e.to_string(),
    })?;
    StarRecord::try_from(row)
}

/// Read every star of a catalog from any byte source.
///
/// Rows are decoded one by one, text encoding included, so a single bad row never hides
/// the rest of the catalog in lenient mode.
///
/// Arguments
/// ---------
/// * `reader`: the comma-delimited catalog content.
/// * `mode`: policy for malformed rows.
///
/// Return
/// ------
/// * the stars in file order, or the first I/O, CSV or (in strict mode) record error.
pub fn read_catalog<R: Read>(
    reader: R,
    mode: CatalogMode,
) -> Result<Vec<StarRecord>, SkydomeError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut stars = Vec::new();
    let mut skipped = 0usize;
    let mut record = ByteRecord::new();

    while csv_reader.read_byte_record(&mut record)? {
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);

        match star_from_record(&record) {
            Ok(star) => stars.push(star),
            Err(reason) => match mode {
                CatalogMode::Strict => {
                    return Err(SkydomeError::MalformedStarRecord { line, reason });
                }
                CatalogMode::Lenient => {
                    warn!("Skipping star catalog line {line}: {reason}");
                    skipped += 1;
                }
            },
        }
    }

    debug!(
        "Star catalog loaded: {} stars, {skipped} rows skipped",
        stars.len()
    );
    Ok(stars)
}

/// Read a catalog file from disk. See [`read_catalog`].
pub fn read_catalog_file<P: AsRef<Path>>(
    path: P,
    mode: CatalogMode,
) -> Result<Vec<StarRecord>, SkydomeError> {
    let file = File::open(path.as_ref())?;
    debug!("Reading star catalog {}", path.as_ref().display());
    read_catalog(file, mode)
}

/// First star whose proper name matches `name` exactly, e.g. the `"Polaris"` pivot.
pub fn find_by_name<'a>(stars: &'a [StarRecord], name: &str) -> Option<&'a StarRecord> {
    stars.iter().find(|s| s.name.as_deref() == Some(name))
}
