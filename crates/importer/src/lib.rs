//! Airport dataset import utilities.
//!
//! Reads OpenFlights-style `airports.dat` files (comma separated, quoted
//! fields, no header) into a [`Catalog`], and downloads the dataset when it is
//! missing locally.

use std::fs::{self, File};
use std::io::{Read, copy};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use glide_core::{Airport, Catalog, Point};
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, info};

const CITY_COLUMN: usize = 2;
const COUNTRY_COLUMN: usize = 3;
const IATA_COLUMN: usize = 4;
const LATITUDE_COLUMN: usize = 6;
const LONGITUDE_COLUMN: usize = 7;
const REGION_COLUMN: usize = 10;
const MIN_COLUMNS: usize = REGION_COLUMN + 1;

/// Placeholder OpenFlights writes for missing values.
const MISSING: &str = "\\N";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("airport '{0}' not found in the catalog")]
    UnresolvedAirport(String),
}

/// Row counts gathered while importing a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub rows: usize,
    pub imported: usize,
    pub other_region: usize,
    pub missing_identifier: usize,
    pub malformed: usize,
    pub duplicates: usize,
}

/// Load every airport of `region` from the dataset at `path`.
pub fn load_airports<P: AsRef<Path>>(
    path: P,
    region: &str,
) -> Result<(Catalog, ImportReport), ImportError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (catalog, report) = read_airports(file, region)?;
    info!(
        path = %path.display(),
        region,
        imported = report.imported,
        rows = report.rows,
        "airport dataset loaded"
    );
    Ok((catalog, report))
}

/// Parse airports of `region` from any reader producing `airports.dat` rows.
///
/// Rows without a usable IATA code, with fewer than eleven columns, or with
/// unparsable coordinates are skipped and counted in the report.
pub fn read_airports<R: Read>(
    reader: R,
    region: &str,
) -> Result<(Catalog, ImportReport), ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut catalog = Catalog::new();
    let mut report = ImportReport::default();

    for record in rdr.records() {
        let record = record?;
        report.rows += 1;
        match parse_record(&record, region) {
            Row::Airport(airport) => {
                if catalog.insert(airport) {
                    report.imported += 1;
                } else {
                    report.duplicates += 1;
                }
            }
            Row::OtherRegion => report.other_region += 1,
            Row::MissingIdentifier => report.missing_identifier += 1,
            Row::Malformed => {
                debug!(row = report.rows, "skipping malformed airport row");
                report.malformed += 1;
            }
        }
    }

    Ok((catalog, report))
}

enum Row {
    Airport(Airport),
    OtherRegion,
    MissingIdentifier,
    Malformed,
}

fn parse_record(record: &StringRecord, region: &str) -> Row {
    if record.len() < MIN_COLUMNS {
        return Row::Malformed;
    }
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    if !field(REGION_COLUMN).eq_ignore_ascii_case(region) {
        return Row::OtherRegion;
    }
    let iata = field(IATA_COLUMN);
    if iata.is_empty() || iata == MISSING {
        return Row::MissingIdentifier;
    }
    let (Ok(latitude), Ok(longitude)) = (
        field(LATITUDE_COLUMN).parse::<f64>(),
        field(LONGITUDE_COLUMN).parse::<f64>(),
    ) else {
        return Row::Malformed;
    };
    if !(latitude.is_finite() && longitude.is_finite()) {
        return Row::Malformed;
    }

    Row::Airport(Airport::new(
        iata,
        field(CITY_COLUMN),
        field(COUNTRY_COLUMN),
        Point::new(longitude, latitude),
    ))
}

/// Resolve an identifier (case-insensitive) to a catalog airport.
pub fn resolve(catalog: &Catalog, ident: &str) -> Result<Airport, ImportError> {
    catalog
        .find_ignore_case(ident.trim())
        .cloned()
        .ok_or_else(|| ImportError::UnresolvedAirport(ident.to_string()))
}

/// Download the dataset from `url` into `dest` unless it already exists.
pub fn download_dataset(url: &str, dest: &Path) -> Result<DatasetStatus, ImportError> {
    if dest.exists() {
        return Ok(DatasetStatus::AlreadyPresent(dest.to_path_buf()));
    }
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let client = Client::builder().build()?;
    let mut response = client.get(url).send()?.error_for_status()?;
    let mut file = File::create(dest)?;
    let bytes = copy(&mut response, &mut file)?;
    info!(url, dest = %dest.display(), bytes, "airport dataset downloaded");
    Ok(DatasetStatus::Downloaded(dest.to_path_buf()))
}

/// Outcome of attempting to download the dataset.
#[derive(Debug)]
pub enum DatasetStatus {
    Downloaded(PathBuf),
    AlreadyPresent(PathBuf),
}
