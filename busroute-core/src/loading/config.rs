use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Weight;

/// Input and output locations plus routing options for one batch run
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Table mapping `stop_id` to the OSM node the stop is snapped to
    pub stop_nodes_path: PathBuf,
    /// GTFS `stops.txt`
    pub stops_path: PathBuf,
    /// Bus stop segments (`from_stop_id`, `to_stop_id`)
    pub segments_path: PathBuf,
    pub drive_network: NetworkPaths,
    pub full_network: NetworkPaths,
    /// Manual via-node corrections for the drive network
    #[serde(default)]
    pub drive_overrides_path: Option<PathBuf>,
    /// Manual via-node corrections for the full network
    #[serde(default)]
    pub full_overrides_path: Option<PathBuf>,
    #[serde(default = "default_geojson_path")]
    pub geojson_path: PathBuf,
    #[serde(default = "default_map_path")]
    pub map_path: PathBuf,
    #[serde(default)]
    pub weight: Weight,
    /// Applied in order to every stop name
    #[serde(default)]
    pub name_aliases: Vec<NameAlias>,
    #[serde(default)]
    pub map: MapConfig,
}

/// Node and edge tables of one street network
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkPaths {
    pub nodes_path: PathBuf,
    pub edges_path: PathBuf,
}

/// Replaces any stop name containing `pattern` with `canonical`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameAlias {
    pub pattern: String,
    pub canonical: String,
}

/// Appearance of the exported HTML map
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub drive_color: String,
    pub full_color: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 34.002_755,
            center_lon: 131.221_862,
            zoom: 12,
            tile_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO".to_string(),
            drive_color: "green".to_string(),
            full_color: "red".to_string(),
        }
    }
}

fn default_geojson_path() -> PathBuf {
    PathBuf::from("map_data.geojson")
}

fn default_map_path() -> PathBuf {
    PathBuf::from("map.html")
}

impl PipelineConfig {
    /// Makes every relative path relative to `base` instead of the working
    /// directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        resolve(&mut self.stop_nodes_path);
        resolve(&mut self.stops_path);
        resolve(&mut self.segments_path);
        for network in [&mut self.drive_network, &mut self.full_network] {
            resolve(&mut network.nodes_path);
            resolve(&mut network.edges_path);
        }
        for path in [&mut self.drive_overrides_path, &mut self.full_overrides_path]
            .into_iter()
            .flatten()
        {
            resolve(path);
        }
        resolve(&mut self.geojson_path);
        resolve(&mut self.map_path);
    }

    /// All files that must exist before a run starts
    pub fn input_paths(&self) -> Vec<&Path> {
        let mut paths = vec![
            self.stop_nodes_path.as_path(),
            self.stops_path.as_path(),
            self.segments_path.as_path(),
            self.drive_network.nodes_path.as_path(),
            self.drive_network.edges_path.as_path(),
            self.full_network.nodes_path.as_path(),
            self.full_network.edges_path.as_path(),
        ];
        paths.extend(self.drive_overrides_path.as_deref());
        paths.extend(self.full_overrides_path.as_deref());
        paths
    }
}
