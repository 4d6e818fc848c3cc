//! End-to-end run: spreadsheet to HTML file

use crate::aggregate::aggregate;
use crate::choropleth::build_choropleth;
use crate::compose::{Legend, MapDocument};
use crate::config::AppConfig;
use crate::geocode::{Geocoder, GeocodingService, GoogleGeocoder};
use crate::sheets::GoogleSheets;
use crate::source::{load_records, SpreadsheetSource};
use crate::{Result, VisitRecord};
use geojson::FeatureCollection;
use reqwest::blocking::Client;
use std::path::PathBuf;

/// What a run produced, for reporting
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub records: usize,
    pub countries: usize,
    pub max_count: Option<u32>,
    pub colored_polygons: usize,
    pub points: usize,
    pub skipped: usize,
    pub failed_queries: Vec<String>,
    pub output: Option<PathBuf>,
}

/// Build the map document from already loaded inputs
pub fn build_map<S: GeocodingService>(
    records: &[VisitRecord],
    polygons: FeatureCollection,
    code_property: &str,
    geocoder: &Geocoder<S>,
) -> Result<(MapDocument, RunSummary)> {
    let table = aggregate(records);
    let choropleth = build_choropleth(&table, polygons, code_property);
    let report = geocoder.geocode_all(records)?;
    let legend = Legend::from_scale(choropleth.scale.as_ref());

    let summary = RunSummary {
        records: records.len(),
        countries: table.len(),
        max_count: choropleth.max_count,
        colored_polygons: choropleth.colored,
        points: report.points.len(),
        skipped: report.skipped,
        failed_queries: report
            .failures
            .iter()
            .map(|f| f.query.clone())
            .collect(),
        output: None,
    };

    let document = MapDocument::new(choropleth.layer, report.points, legend);
    Ok((document, summary))
}

/// Load inputs through the given source and geocoder, then write the map
pub fn run_with<S: GeocodingService>(
    config: &AppConfig,
    source: &dyn SpreadsheetSource,
    polygons: FeatureCollection,
    geocoder: &Geocoder<S>,
) -> Result<RunSummary> {
    let records = load_records(source, &config.sheets.worksheet)?;
    let (document, mut summary) = build_map(&records, polygons, &config.code_property, geocoder)?;
    document.save(&config.output)?;
    summary.output = Some(config.output.clone());
    Ok(summary)
}

/// Full run against the live Google services
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    config.check_credentials()?;

    let client = Client::builder().timeout(config.http_timeout).build()?;

    let sheets = GoogleSheets::from_config(client.clone(), &config.sheets)?;
    let geocoder = Geocoder::from_config(
        GoogleGeocoder::new(client.clone(), config.geocode.api_key.clone()),
        &config.geocode,
    );

    let polygons = config.polygons.load(&client)?;

    run_with(config, &sheets, polygons, &geocoder)
}
