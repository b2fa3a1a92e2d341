use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use busroute_core::loading::PipelineConfig;

/// Reads a TOML pipeline configuration; relative paths in it are resolved
/// against the directory of the configuration file.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let mut config: PipelineConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    config.resolve_paths(base);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use busroute_core::model::Weight;

    use super::*;

    const MINIMAL: &str = r#"
stop_nodes_path = "data/osm/osmid.csv"
stops_path = "data/GTFS/stops.txt"
segments_path = "data/bus_stop_segment.csv"

[drive_network]
nodes_path = "data/osm/drive_nodes.csv"
edges_path = "data/osm/drive_edges.csv"

[full_network]
nodes_path = "/srv/osm/all_nodes.csv"
edges_path = "/srv/osm/all_edges.csv"
"#;

    #[test]
    fn applies_defaults_and_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busroute.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.stops_path, dir.path().join("data/GTFS/stops.txt"));
        assert_eq!(
            config.full_network.nodes_path,
            Path::new("/srv/osm/all_nodes.csv")
        );
        assert_eq!(config.geojson_path, dir.path().join("map_data.geojson"));
        assert_eq!(config.weight, Weight::Length);
        assert!(config.name_aliases.is_empty());
        assert!(config.drive_overrides_path.is_none());
        assert_eq!(config.map.drive_color, "green");
    }

    #[test]
    fn reads_aliases_overrides_and_map_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busroute.toml");
        let text = r#"
stop_nodes_path = "osmid.csv"
stops_path = "stops.txt"
segments_path = "segments.csv"
drive_overrides_path = "via_node/drive.csv"
weight = "unweighted"

[[name_aliases]]
pattern = "Hospital"
canonical = "Hospital (Main)"

[map]
zoom = 14
full_color = "orange"

[drive_network]
nodes_path = "drive_nodes.csv"
edges_path = "drive_edges.csv"

[full_network]
nodes_path = "all_nodes.csv"
edges_path = "all_edges.csv"
"#;
        fs::write(&path, text).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(
            config.drive_overrides_path,
            Some(dir.path().join("via_node/drive.csv"))
        );
        assert_eq!(config.weight, Weight::Unweighted);
        assert_eq!(config.name_aliases.len(), 1);
        assert_eq!(config.name_aliases[0].canonical, "Hospital (Main)");
        assert_eq!(config.map.zoom, 14);
        assert_eq!(config.map.full_color, "orange");
        assert_eq!(config.map.drive_color, "green");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busroute.toml");
        fs::write(&path, format!("colour = \"blue\"\n{MINIMAL}")).unwrap();

        assert!(load_config(&path).is_err());
    }
}
