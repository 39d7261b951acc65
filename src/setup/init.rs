use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::domain::country::Country;
use crate::domain::types::{LocationRecord, Normalized};
use crate::error::{Result, TourError};

const REQUIRED_COLUMNS: [&str; 4] = ["location", "region", "r", "theta"];

/// Reads a country from a CSV file with columns `location, region, r, theta[, depot]`.
pub fn read_country_csv(path: impl AsRef<Path>) -> Result<Normalized<Country>> {
    let path = path.as_ref();
    info!("Reading country from {}", path.display());
    let file = File::open(path)?;
    read_country_from_reader(file)
}

/// Same as [`read_country_csv`] over any reader. Header columns are checked before any
/// row is parsed.
pub fn read_country_from_reader<R: Read>(source: R) -> Result<Normalized<Country>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TourError::MissingColumn(column.to_string()));
        }
    }

    let records = reader
        .deserialize::<LocationRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    info!("Loaded {} location rows", records.len());

    let built = Country::from_records(records)?;
    for notice in &built.notices {
        warn!("{}", notice);
    }

    Ok(built)
}
