//! Visit Map
//!
//! Turns a spreadsheet of visited places into a static Leaflet map:
//! a world choropleth colored by how often each country appears, plus
//! clustered circle markers for every location that geocodes.
//!
//! # Pipeline
//!
//! ```text
//! SpreadsheetSource ─► VisitRecord[] ─┬─► aggregate ─► FrequencyTable ─► choropleth ─┐
//!                                     └─► Geocoder ──► GeocodedPoint[] ──────────────┼─► MapDocument ─► index.html
//!                                                                                    │
//!                                        Legend (5 samples of the ColorScale) ───────┘
//! ```
//!
//! Network access is isolated behind [`SpreadsheetSource`] and
//! [`GeocodingService`]; everything else is pure and runs sequentially.

use thiserror::Error;

pub mod aggregate;
pub mod choropleth;
pub mod color;
pub mod compose;
pub mod config;
pub mod geocode;
pub mod pipeline;
pub mod sheets;
pub mod source;

#[cfg(test)]
mod testing;

pub use aggregate::{aggregate, CountryFrequency, FrequencyTable};
pub use choropleth::{build_choropleth, feature_style, Choropleth, FeatureStyle, PolygonSource};
pub use color::{ColorScale, Rgb};
pub use compose::{Legend, MapDocument, MapLayer, TileLayer};
pub use config::{AppConfig, ConfigError};
pub use geocode::{GeocodeReport, Geocoder, GeocodingService, GoogleGeocoder};
pub use sheets::GoogleSheets;
pub use source::{load_records, SpreadsheetSource};

/// Spreadsheet header naming the free-text place column
pub const LOCATION_COLUMN: &str = "Location";

/// Spreadsheet header naming the country column
pub const COUNTRY_COLUMN: &str = "Country";

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Service account authorization failed: {0}")]
    Auth(String),
    #[error("Spreadsheet request failed: {0}")]
    Spreadsheet(String),
    #[error("Worksheet header is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Polygon source must be a FeatureCollection")]
    NotFeatureCollection,
}

pub type Result<T> = std::result::Result<T, MapError>;

/// One spreadsheet row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRecord {
    pub location: Option<String>,
    pub country: Option<String>,
}

impl VisitRecord {
    /// Build a record, treating blank cells as missing
    pub fn new(location: Option<&str>, country: Option<&str>) -> Self {
        Self {
            location: non_blank(location),
            country: non_blank(country),
        }
    }
}

fn non_blank(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A location resolved to coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPoint {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells_become_none() {
        let record = VisitRecord::new(Some("  "), Some(""));
        assert_eq!(record, VisitRecord::default());

        let record = VisitRecord::new(Some(" Paris "), None);
        assert_eq!(record.location.as_deref(), Some("Paris"));
        assert_eq!(geocode::build_query(&record).as_deref(), Some("Paris"));
        assert!(record.country.is_none());
    }
}
