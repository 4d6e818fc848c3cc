//! Location geocoding
//!
//! Each record becomes one query against a [`GeocodingService`]. Failed
//! lookups are logged and dropped; only transport errors stop the run.

use crate::config::GeocodeConfig;
use crate::{GeocodedPoint, Result, VisitRecord};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const LAYER_NAME: &str = "Circle Marker";

const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Status value the Google API reports for a usable answer
pub const STATUS_OK: &str = "OK";

/// Geocoding API response body
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    pub fn ok(lat: f64, lng: f64) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            results: vec![GeocodeResult {
                geometry: Geometry {
                    location: LatLng { lat, lng },
                },
            }],
            error_message: None,
        }
    }

    pub fn failed(status: &str, error_message: Option<&str>) -> Self {
        Self {
            status: status.to_string(),
            results: Vec::new(),
            error_message: error_message.map(str::to_string),
        }
    }

    /// Coordinates of the first result when the lookup succeeded
    pub fn first_location(&self) -> Option<LatLng> {
        if self.status != STATUS_OK {
            return None;
        }
        self.results.first().map(|r| r.geometry.location)
    }
}

/// A single address lookup
///
/// Implementations return `Err` only for transport problems; a lookup the
/// service could not answer comes back as a non-OK status.
pub trait GeocodingService {
    fn geocode(&self, query: &str) -> Result<GeocodeResponse>;
}

/// Google Maps Geocoding API client
pub struct GoogleGeocoder {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: GOOGLE_GEOCODE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Send lookups to another endpoint, e.g. a local stand-in
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl GeocodingService for GoogleGeocoder {
    fn geocode(&self, query: &str) -> Result<GeocodeResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", query), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

/// Why a record produced no point
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeFailure {
    pub query: String,
    pub status: String,
    pub error_message: Option<String>,
}

/// Outcome of geocoding a batch of records
#[derive(Debug, Clone, Default)]
pub struct GeocodeReport {
    pub points: Vec<GeocodedPoint>,
    /// Records without a location
    pub skipped: usize,
    pub failures: Vec<GeocodeFailure>,
}

/// `"<location>, <country>"`, or just the location when there is no country
pub fn build_query(record: &VisitRecord) -> Option<String> {
    let location = record.location.as_deref()?;
    Some(match record.country.as_deref() {
        Some(country) => format!("{}, {}", location, country),
        None => location.to_string(),
    })
}

/// Sequential geocoder with a fixed pause after each successful call
pub struct Geocoder<S> {
    service: S,
    delay: Duration,
}

impl<S: GeocodingService> Geocoder<S> {
    pub fn new(service: S, delay: Duration) -> Self {
        Self { service, delay }
    }

    pub fn from_config(service: S, config: &GeocodeConfig) -> Self {
        Self::new(service, config.delay)
    }

    /// Geocode every record in order
    pub fn geocode_all(&self, records: &[VisitRecord]) -> Result<GeocodeReport> {
        let mut report = GeocodeReport::default();

        for record in records {
            let query = match build_query(record) {
                Some(q) => q,
                None => {
                    info!("Skipping record without location (country: {:?})", record.country);
                    report.skipped += 1;
                    continue;
                }
            };

            let response = self.service.geocode(&query)?;
            match response.first_location() {
                Some(LatLng { lat, lng }) => {
                    debug!("Geocoded '{}' to {:.5},{:.5}", query, lat, lng);
                    report.points.push(GeocodedPoint { label: query, lat, lng });
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                }
                None => {
                    warn!(
                        "Geocoding failed for location: {}, status: {} {}",
                        query,
                        response.status,
                        response.error_message.as_deref().unwrap_or("")
                    );
                    report.failures.push(GeocodeFailure {
                        query,
                        status: response.status,
                        error_message: response.error_message,
                    });
                }
            }
        }

        info!(
            "Geocoded {} locations ({} failed, {} skipped)",
            report.points.len(),
            report.failures.len(),
            report.skipped
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{local_client, serve};
    use crate::MapError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Instant;

    /// Answers from a fixed table and records every query it receives
    struct FakeService {
        answers: HashMap<String, GeocodeResponse>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeService {
        fn new(answers: Vec<(&str, GeocodeResponse)>) -> Self {
            Self {
                answers: answers.into_iter().map(|(q, r)| (q.to_string(), r)).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl GeocodingService for &FakeService {
        fn geocode(&self, query: &str) -> Result<GeocodeResponse> {
            self.calls.borrow_mut().push(query.to_string());
            Ok(self
                .answers
                .get(query)
                .cloned()
                .unwrap_or_else(|| GeocodeResponse::failed("ZERO_RESULTS", None)))
        }
    }

    struct BrokenService;

    impl GeocodingService for BrokenService {
        fn geocode(&self, _query: &str) -> Result<GeocodeResponse> {
            Err(MapError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset",
            )))
        }
    }

    fn record(location: Option<&str>, country: Option<&str>) -> VisitRecord {
        VisitRecord::new(location, country)
    }

    #[test]
    fn test_query_string() {
        assert_eq!(
            build_query(&record(Some("Paris"), Some("France"))).as_deref(),
            Some("Paris, France")
        );
        assert_eq!(build_query(&record(Some("Paris"), None)).as_deref(), Some("Paris"));
        assert_eq!(build_query(&record(None, Some("France"))), None);
    }

    #[test]
    fn test_successful_lookup() {
        let service = FakeService::new(vec![("Paris, France", GeocodeResponse::ok(48.8566, 2.3522))]);
        let geocoder = Geocoder::new(&service, Duration::ZERO);

        let report = geocoder
            .geocode_all(&[record(Some("Paris"), Some("France"))])
            .unwrap();

        assert_eq!(
            report.points,
            vec![GeocodedPoint {
                label: "Paris, France".to_string(),
                lat: 48.8566,
                lng: 2.3522
            }]
        );
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_failures_are_dropped_not_raised() {
        let service = FakeService::new(vec![
            (
                "Atlantis",
                GeocodeResponse::failed("REQUEST_DENIED", Some("The provided API key is invalid.")),
            ),
            ("Nowhere", GeocodeResponse { status: "OK".to_string(), results: vec![], error_message: None }),
            ("Lima, Peru", GeocodeResponse::ok(-12.0464, -77.0428)),
        ]);
        let geocoder = Geocoder::new(&service, Duration::ZERO);

        let report = geocoder
            .geocode_all(&[
                record(Some("Atlantis"), None),
                record(Some("Nowhere"), None),
                record(Some("Lima"), Some("Peru")),
            ])
            .unwrap();

        assert_eq!(report.points.len(), 1);
        assert_eq!(report.points[0].label, "Lima, Peru");
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].status, "REQUEST_DENIED");
        assert_eq!(
            report.failures[0].error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
        assert_eq!(report.failures[1].status, "OK");
    }

    #[test]
    fn test_missing_location_makes_no_call() {
        let service = FakeService::new(vec![]);
        let geocoder = Geocoder::new(&service, Duration::ZERO);

        let report = geocoder
            .geocode_all(&[record(None, Some("France")), record(Some(" "), None)])
            .unwrap();

        assert_eq!(report.skipped, 2);
        assert!(report.points.is_empty());
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn test_delay_after_success_only() {
        let service = FakeService::new(vec![("Rome", GeocodeResponse::ok(41.9, 12.5))]);
        let geocoder = Geocoder::new(&service, Duration::from_millis(20));

        let start = Instant::now();
        geocoder
            .geocode_all(&[record(Some("Rome"), None), record(Some("Rome"), None)])
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));

        let start = Instant::now();
        geocoder.geocode_all(&[record(Some("Unknown"), None)]).unwrap();
        assert!(start.elapsed() < Duration::from_millis(20));
        assert_eq!(service.calls.borrow().len(), 3);
    }

    #[test]
    fn test_transport_error_aborts() {
        let geocoder = Geocoder::new(BrokenService, Duration::ZERO);
        let result = geocoder.geocode_all(&[record(Some("Oslo"), None)]);
        assert!(matches!(result, Err(MapError::Io(_))));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "results": [
                {"geometry": {"location": {"lat": 35.6762, "lng": 139.6503}, "location_type": "APPROXIMATE"},
                 "formatted_address": "Tokyo, Japan"}
            ],
            "status": "OK"
        }"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        let location = response.first_location().unwrap();
        assert_eq!(location.lat, 35.6762);
        assert_eq!(location.lng, 139.6503);

        let denied: GeocodeResponse = serde_json::from_str(
            r#"{"error_message": "API keys with referer restrictions cannot be used", "results": [], "status": "REQUEST_DENIED"}"#,
        )
        .unwrap();
        assert!(denied.first_location().is_none());
        assert!(denied.error_message.is_some());
    }

    fn local_geocoder(base: &str) -> GoogleGeocoder {
        GoogleGeocoder::new(local_client(), "test-key")
            .with_endpoint(format!("{}/maps/api/geocode/json", base))
    }

    #[test]
    fn test_google_request_and_ok_body() {
        let (base, server) = serve(vec![(
            "200 OK",
            r#"{"results": [{"geometry": {"location": {"lat": 48.8566, "lng": 2.3522}}}], "status": "OK"}"#,
        )]);

        let response = local_geocoder(&base).geocode("Paris, France").unwrap();
        let location = response.first_location().unwrap();
        assert_eq!(location.lat, 48.8566);
        assert_eq!(location.lng, 2.3522);

        let seen = server.join().unwrap();
        assert_eq!(
            seen[0].line,
            "GET /maps/api/geocode/json?address=Paris%2C+France&key=test-key HTTP/1.1"
        );
    }

    #[test]
    fn test_google_denied_status_is_not_an_error() {
        let (base, server) = serve(vec![(
            "200 OK",
            r#"{"error_message": "The provided API key is invalid.", "results": [], "status": "REQUEST_DENIED"}"#,
        )]);

        let response = local_geocoder(&base).geocode("Lima, Peru").unwrap();
        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.first_location().is_none());
        assert_eq!(response.error_message.as_deref(), Some("The provided API key is invalid."));
        server.join().unwrap();
    }

    #[test]
    fn test_google_error_status_aborts() {
        let (base, server) = serve(vec![("500 Internal Server Error", r#"{"status": "UNKNOWN_ERROR"}"#)]);

        let geocoder = Geocoder::new(local_geocoder(&base), Duration::ZERO);
        let result = geocoder.geocode_all(&[record(Some("Oslo"), None)]);
        assert!(matches!(result, Err(MapError::Http(_))));
        server.join().unwrap();
    }

    #[test]
    fn test_point_label_uses_trimmed_cells() {
        let service = FakeService::new(vec![("Paris, France", GeocodeResponse::ok(48.8566, 2.3522))]);
        let geocoder = Geocoder::new(&service, Duration::ZERO);

        let report = geocoder
            .geocode_all(&[record(Some(" Paris "), Some(" France"))])
            .unwrap();

        assert_eq!(report.points[0].label, "Paris, France");
        assert_eq!(*service.calls.borrow(), vec!["Paris, France"]);
    }
}
