//! Run configuration
//!
//! All settings come from the process environment (after loading an optional
//! `.env` file) and are validated once, before any network work starts.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::choropleth::PolygonSource;

/// Country boundaries at 10km resolution, keyed by `A3`
pub const DEFAULT_POLYGON_SOURCE: &str =
    "https://github.com/simonepri/geo-maps/releases/download/v0.6.0/countries-land-10km.geo.json";

pub const DEFAULT_CODE_PROPERTY: &str = "A3";
pub const DEFAULT_WORKSHEET: &str = "Sheet1";
pub const DEFAULT_CREDENTIALS: &str = "credentials.json";
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DEFAULT_GEOCODE_DELAY_MS: u64 = 100;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set in environment")]
    Missing(&'static str),
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("Credentials file not found: {0}")]
    CredentialsNotFound(PathBuf),
}

/// Spreadsheet connection settings
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub sheet_id: String,
    pub worksheet: String,
    pub credentials: PathBuf,
}

/// Geocoding API settings
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub api_key: String,
    /// Pause after each successful lookup
    pub delay: Duration,
}

/// Complete, validated configuration for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SheetsConfig,
    pub geocode: GeocodeConfig,
    pub polygons: PolygonSource,
    pub code_property: String,
    pub output: PathBuf,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sheet_id = get("SHEETS_ID").ok_or(ConfigError::Missing("SHEETS_ID"))?;
        let api_key = get("MAPS_API_KEY").ok_or(ConfigError::Missing("MAPS_API_KEY"))?;

        let delay_ms = parse_u64(get("GEOCODE_DELAY_MS"), "GEOCODE_DELAY_MS", DEFAULT_GEOCODE_DELAY_MS)?;
        let timeout_secs =
            parse_u64(get("HTTP_TIMEOUT_SECS"), "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        let polygons = PolygonSource::parse(
            &get("POLYGON_SOURCE").unwrap_or_else(|| DEFAULT_POLYGON_SOURCE.to_string()),
        );

        Ok(Self {
            sheets: SheetsConfig {
                sheet_id,
                worksheet: get("SHEETS_WORKSHEET").unwrap_or_else(|| DEFAULT_WORKSHEET.to_string()),
                credentials: get("GOOGLE_CREDENTIALS")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS)),
            },
            geocode: GeocodeConfig {
                api_key,
                delay: Duration::from_millis(delay_ms),
            },
            polygons,
            code_property: get("POLYGON_CODE_PROPERTY")
                .unwrap_or_else(|| DEFAULT_CODE_PROPERTY.to_string()),
            output: PathBuf::from(DEFAULT_OUTPUT),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Fail early when the service-account key file is absent
    pub fn check_credentials(&self) -> Result<(), ConfigError> {
        if self.sheets.credentials.is_file() {
            Ok(())
        } else {
            Err(ConfigError::CredentialsNotFound(self.sheets.credentials.clone()))
        }
    }
}

fn parse_u64(value: Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: v }),
    }
}
