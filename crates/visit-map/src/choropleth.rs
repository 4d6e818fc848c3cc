//! Country polygons colored by visit count

use crate::aggregate::FrequencyTable;
use crate::color::{ColorScale, Rgb};
use crate::{MapError, Result};
use geojson::{FeatureCollection, GeoJson};
use reqwest::blocking::Client;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const LAYER_NAME: &str = "Linear Color Map";

/// Fill opacity for countries with visits
pub const VISITED_OPACITY: f64 = 0.7;

/// Border drawn around every country
pub const BORDER_COLOR: Rgb = Rgb(0xD4, 0xDA, 0xDC);
pub const BORDER_WEIGHT: u32 = 1;

/// Property under which each feature carries its computed style
pub const STYLE_PROPERTY: &str = "style";

/// Where country boundaries come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolygonSource {
    Url(String),
    File(PathBuf),
}

impl PolygonSource {
    /// `http(s)://` locations are URLs, anything else is a path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn load(&self, client: &Client) -> Result<FeatureCollection> {
        let text = match self {
            Self::Url(url) => {
                info!("Downloading country polygons from {}", url);
                client.get(url).send()?.error_for_status()?.text()?
            }
            Self::File(path) => {
                info!("Reading country polygons from {:?}", path);
                fs::read_to_string(path)?
            }
        };
        parse_feature_collection(&text)
    }
}

pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        _ => Err(MapError::NotFeatureCollection),
    }
}

/// Leaflet path style for one country
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill_color: Rgb,
    pub fill_opacity: f64,
    pub color: Rgb,
    pub weight: u32,
}

impl FeatureStyle {
    pub fn no_data() -> Self {
        Self::filled(Rgb::BLACK, 0.0)
    }

    fn filled(fill_color: Rgb, fill_opacity: f64) -> Self {
        Self {
            fill_color,
            fill_opacity,
            color: BORDER_COLOR,
            weight: BORDER_WEIGHT,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.fill_opacity == 0.0
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "fillColor": self.fill_color.to_hex(),
            "fillOpacity": self.fill_opacity,
            "color": self.color.to_hex(),
            "weight": self.weight,
        })
    }
}

/// Style for a polygon identified by its alpha-3 code
///
/// The code is resolved to a country name and looked up in `counts`.
/// Unknown codes, unvisited countries and a missing scale all give the
/// transparent no-data style.
pub fn feature_style(
    code: Option<&str>,
    counts: &HashMap<String, u32>,
    scale: Option<&ColorScale>,
) -> FeatureStyle {
    let count = code
        .and_then(country_codes::name_for_alpha3)
        .and_then(|name| counts.get(name));

    match (count, scale) {
        (Some(&count), Some(scale)) => {
            FeatureStyle::filled(scale.color_at(count as f64), VISITED_OPACITY)
        }
        _ => FeatureStyle::no_data(),
    }
}

/// The styled polygon overlay
#[derive(Debug, Clone)]
pub struct ChoroplethLayer {
    pub name: String,
    pub features: FeatureCollection,
}

/// Output of [`build_choropleth`]
#[derive(Debug, Clone)]
pub struct Choropleth {
    pub layer: ChoroplethLayer,
    /// Absent when no country has any visits
    pub scale: Option<ColorScale>,
    pub max_count: Option<u32>,
    /// Number of polygons drawn with visit data
    pub colored: usize,
}

/// Style every polygon from the frequency table
pub fn build_choropleth(
    table: &FrequencyTable,
    mut polygons: FeatureCollection,
    code_property: &str,
) -> Choropleth {
    let scale = match (table.min_count(), table.max_count()) {
        (Some(min), Some(max)) => Some(ColorScale::visits(min, max)),
        _ => None,
    };

    let mut colored = 0;
    let mut matched: HashSet<&'static str> = HashSet::new();

    for feature in polygons.features.iter_mut() {
        let code = feature
            .property(code_property)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let style = feature_style(code.as_deref(), table.counts(), scale.as_ref());
        if !style.is_no_data() {
            colored += 1;
            if let Some(name) = code.as_deref().and_then(country_codes::name_for_alpha3) {
                matched.insert(name);
            }
        } else if code.is_none() {
            debug!("Polygon without '{}' property drawn as no data", code_property);
        }

        feature.set_property(STYLE_PROPERTY, style.to_json());
    }

    for entry in table.entries() {
        if !matched.contains(entry.country_name.as_str()) {
            warn!("No polygon found for visited country '{}'", entry.country_name);
        }
    }

    info!(
        "Colored {} of {} country polygons",
        colored,
        polygons.features.len()
    );

    Choropleth {
        layer: ChoroplethLayer {
            name: LAYER_NAME.to_string(),
            features: polygons,
        },
        max_count: table.max_count(),
        scale,
        colored,
    }
}
