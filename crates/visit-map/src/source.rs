//! Spreadsheet row loading

use crate::{MapError, Result, VisitRecord, COUNTRY_COLUMN, LOCATION_COLUMN};
use tracing::{debug, info};

/// Anything that can hand back the raw cell grid of a worksheet
///
/// Rows are returned top to bottom, header first. Trailing empty cells may
/// be omitted, so rows can be shorter than the header.
pub trait SpreadsheetSource {
    fn fetch_rows(&self, worksheet: &str) -> Result<Vec<Vec<String>>>;
}

/// Fetch a worksheet and turn its data rows into visit records
pub fn load_records(source: &dyn SpreadsheetSource, worksheet: &str) -> Result<Vec<VisitRecord>> {
    let rows = source.fetch_rows(worksheet)?;
    let records = records_from_rows(rows)?;
    info!("Loaded {} visit records from worksheet '{}'", records.len(), worksheet);
    Ok(records)
}

/// Interpret the first row as a header and map the rest to records
pub fn records_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<VisitRecord>> {
    let mut rows = rows.into_iter();
    let header = match rows.next() {
        Some(h) => h,
        None => {
            debug!("Worksheet is empty");
            return Ok(Vec::new());
        }
    };

    let column = |name: &'static str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(MapError::MissingColumn(name))
    };
    let location_idx = column(LOCATION_COLUMN)?;
    let country_idx = column(COUNTRY_COLUMN)?;

    let records = rows
        .map(|row| {
            VisitRecord::new(
                row.get(location_idx).map(String::as_str),
                row.get(country_idx).map(String::as_str),
            )
        })
        .collect();

    Ok(records)
}
