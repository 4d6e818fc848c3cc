//! HTML map document
//!
//! Renders a single Leaflet page from the `templates/` directory: base
//! tile layers, the choropleth and marker-cluster overlays, a layer control
//! and a fixed legend panel. Map data is embedded as JSON so the page needs
//! nothing but the CDN scripts.

use crate::choropleth::ChoroplethLayer;
use crate::color::{ColorScale, Rgb};
use crate::geocode;
use crate::{GeocodedPoint, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};
use tracing::info;
use uuid::Uuid;

const LEAFLET_JS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css";
const CLUSTER_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet.markercluster/1.5.3/leaflet.markercluster.js";
const CLUSTER_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet.markercluster/1.5.3/MarkerCluster.css";
const CLUSTER_DEFAULT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet.markercluster/1.5.3/MarkerCluster.Default.css";

const MAP_TEMPLATE_NAME: &str = "map.html";
const LEGEND_TEMPLATE_NAME: &str = "legend.html";

pub const LEGEND_TITLE: &str = "Cities Visited";
pub const LEGEND_SAMPLES: usize = 5;
const LEGEND_HEIGHT_PX: u32 = 140;

const MARKER_RADIUS: u32 = 5;
const MARKER_COLOR: &str = "black";
const POPUP_MAX_WIDTH: u32 = 250;

const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const CARTO_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> \
     contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";

/// An XYZ raster base layer
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub url: String,
    pub attribution: String,
    pub subdomains: Option<String>,
    pub max_zoom: u8,
}

impl TileLayer {
    pub fn openstreetmap() -> Self {
        Self {
            name: "openstreetmap".to_string(),
            url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            subdomains: None,
            max_zoom: 19,
        }
    }

    pub fn dark_matter() -> Self {
        Self::carto("View in Dark Mode", "dark_all")
    }

    pub fn positron() -> Self {
        Self::carto("View in Light Mode", "light_all")
    }

    fn carto(name: &str, variant: &str) -> Self {
        Self {
            name: name.to_string(),
            url: format!("https://{{s}}.basemaps.cartocdn.com/{}/{{z}}/{{x}}/{{y}}.png", variant),
            attribution: CARTO_ATTRIBUTION.to_string(),
            subdomains: Some("abcd".to_string()),
            max_zoom: 20,
        }
    }

    fn options(&self) -> serde_json::Value {
        let mut options = json!({
            "attribution": self.attribution,
            "maxZoom": self.max_zoom,
        });
        if let Some(subdomains) = &self.subdomains {
            options["subdomains"] = json!(subdomains);
        }
        options
    }
}

/// Geocoded points shown as clustered circle markers
#[derive(Debug, Clone)]
pub struct MarkerClusterLayer {
    pub name: String,
    pub points: Vec<GeocodedPoint>,
}

/// A toggleable overlay
#[derive(Debug, Clone)]
pub enum MapLayer {
    Choropleth(ChoroplethLayer),
    MarkerCluster(MarkerClusterLayer),
}

impl MapLayer {
    pub fn name(&self) -> &str {
        match self {
            Self::Choropleth(layer) => &layer.name,
            Self::MarkerCluster(layer) => &layer.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: Rgb,
    /// Sample value truncated toward zero
    pub value: i64,
}

/// Color swatches sampled evenly across the visit range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Without a scale (no visits at all) the legend only shows its title
    pub fn from_scale(scale: Option<&ColorScale>) -> Self {
        let entries = scale
            .map(|scale| {
                scale
                    .samples(LEGEND_SAMPLES)
                    .into_iter()
                    .map(|v| LegendEntry {
                        color: scale.color_at(v),
                        value: v.trunc() as i64,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: LEGEND_TITLE.to_string(),
            entries,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        let mut context = Context::new();
        self.fill(&mut context);
        Ok(templates()?.render(LEGEND_TEMPLATE_NAME, &context)?)
    }

    fn fill(&self, context: &mut Context) {
        context.insert("legend", self);
        context.insert("legend_height", &LEGEND_HEIGHT_PX);
    }
}

/// Everything that ends up in the output page
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
    /// The first layer is shown initially
    pub base_layers: Vec<TileLayer>,
    pub overlays: Vec<MapLayer>,
    pub legend: Legend,
    pub generated_at: DateTime<Utc>,
}

impl MapDocument {
    /// World view with OpenStreetMap plus dark and light alternates
    pub fn new(choropleth: ChoroplethLayer, points: Vec<GeocodedPoint>, legend: Legend) -> Self {
        Self {
            title: "Countries Visited".to_string(),
            center: [0.0, 0.0],
            zoom: 2,
            base_layers: vec![
                TileLayer::openstreetmap(),
                TileLayer::dark_matter(),
                TileLayer::positron(),
            ],
            overlays: vec![
                MapLayer::Choropleth(choropleth),
                MapLayer::MarkerCluster(MarkerClusterLayer {
                    name: geocode::LAYER_NAME.to_string(),
                    points,
                }),
            ],
            legend,
            generated_at: Utc::now(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let map_id = element_id("map");

        let base_layers = self
            .base_layers
            .iter()
            .map(|tile| -> Result<serde_json::Value> {
                Ok(json!({
                    "var": element_id("tile_layer"),
                    "name": script_json(&tile.name)?,
                    "url": script_json(&tile.url)?,
                    "options": script_json(&tile.options())?,
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        let overlays = self
            .overlays
            .iter()
            .map(|overlay| -> Result<serde_json::Value> {
                let var = element_id("feature_group");
                let name = script_json(overlay.name())?;
                Ok(match overlay {
                    MapLayer::Choropleth(layer) => json!({
                        "kind": "choropleth",
                        "var": var,
                        "name": name,
                        "features": script_json(&layer.features)?,
                    }),
                    MapLayer::MarkerCluster(layer) => {
                        let markers: Vec<serde_json::Value> = layer
                            .points
                            .iter()
                            .map(|p| json!({"lat": p.lat, "lng": p.lng, "popup": tera::escape_html(&p.label)}))
                            .collect();
                        json!({
                            "kind": "marker_cluster",
                            "var": var,
                            "name": name,
                            "cluster": element_id("marker_cluster"),
                            "markers": script_json(&markers)?,
                        })
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut context = Context::new();
        context.insert("generated", &self.generated_at.to_rfc3339());
        context.insert("title", &self.title);
        context.insert("stylesheets", &[LEAFLET_CSS, CLUSTER_CSS, CLUSTER_DEFAULT_CSS]);
        context.insert("scripts", &[LEAFLET_JS, CLUSTER_JS]);
        context.insert("map_id", &map_id);
        context.insert("center", &script_json(&self.center)?);
        context.insert("zoom", &self.zoom);
        context.insert("base_layers", &base_layers);
        context.insert("overlays", &overlays);
        context.insert(
            "marker_options",
            &script_json(&json!({
                "radius": MARKER_RADIUS,
                "fill": true,
                "fillColor": MARKER_COLOR,
                "color": MARKER_COLOR,
            }))?,
        );
        context.insert("popup_max_width", &POPUP_MAX_WIDTH);
        self.legend.fill(&mut context);

        Ok(templates()?.render(MAP_TEMPLATE_NAME, &context)?)
    }

    /// Render and write to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        let html = self.render()?;
        fs::write(path, &html)?;
        info!("Wrote map to {:?} ({} bytes)", path, html.len());
        Ok(())
    }
}

fn element_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Page and legend templates; `.html` names autoescape
fn templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (LEGEND_TEMPLATE_NAME, include_str!("../templates/legend.html")),
        (MAP_TEMPLATE_NAME, include_str!("../templates/map.html")),
    ])?;
    Ok(tera)
}

/// JSON that is safe to place inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
