use std::fs;
use std::path::Path;

use geo::Geometry;
use serde_json::{Value as JsonValue, json};

use crate::{
    Error,
    loading::MapConfig,
    model::{NetworkKind, RouteFeature},
};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Bus routes</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
html, body, #map { height: 100%; margin: 0; }
.legend { background: white; padding: 6px 10px; font: 13px sans-serif; border-radius: 4px; }
.legend i { display: inline-block; width: 18px; height: 4px; margin-right: 6px; vertical-align: middle; }
</style>
</head>
<body>
<div id="map"></div>
<script>
const settings = __SETTINGS__;
const layers = __LAYERS__;

const map = L.map('map').setView([settings.center_lat, settings.center_lon], settings.zoom);
L.tileLayer(settings.tile_url, { attribution: settings.attribution }).addTo(map);

const overlays = {};
for (const layer of layers) {
  const group = L.layerGroup();
  for (const route of layer.routes) {
    L.polyline(route.coords, { color: layer.color, weight: 2 })
      .bindPopup(route.popup)
      .addTo(group);
  }
  group.addTo(map);
  overlays[layer.name] = group;
}
L.control.layers(null, overlays).addTo(map);

const legend = L.control({ position: 'bottomright' });
legend.onAdd = function () {
  const div = L.DomUtil.create('div', 'legend');
  div.innerHTML = layers
    .map(l => '<i style="background:' + l.color + '"></i>' + l.name + ' (' + l.routes.length + ')')
    .join('<br>');
  return div;
};
legend.addTo(map);
</script>
</body>
</html>
"#;

/// Renders a standalone Leaflet page with one coloured layer per network.
/// Only line geometries are drawn.
pub fn render_map_html(
    layers: &[(NetworkKind, &[RouteFeature])],
    config: &MapConfig,
) -> Result<String, Error> {
    let settings = json!({
        "center_lat": config.center_lat,
        "center_lon": config.center_lon,
        "zoom": config.zoom,
        "tile_url": config.tile_url,
        "attribution": config.attribution,
    });

    let layers: Vec<JsonValue> = layers
        .iter()
        .map(|(kind, features)| {
            let color = match kind {
                NetworkKind::Drive => &config.drive_color,
                NetworkKind::Full => &config.full_color,
            };
            json!({
                "name": kind.as_str(),
                "color": color,
                "routes": features.iter().filter_map(route_polyline).collect::<Vec<_>>(),
            })
        })
        .collect();

    Ok(TEMPLATE
        .replace("__SETTINGS__", &script_json(&settings)?)
        .replace("__LAYERS__", &script_json(&JsonValue::Array(layers))?))
}

/// Writes the HTML map to `path`
pub fn write_map_html(
    path: &Path,
    layers: &[(NetworkKind, &[RouteFeature])],
    config: &MapConfig,
) -> Result<(), Error> {
    fs::write(path, render_map_html(layers, config)?)?;
    log::info!("Wrote map to {}", path.display());
    Ok(())
}

fn route_polyline(feature: &RouteFeature) -> Option<JsonValue> {
    let Some(Geometry::LineString(line)) = &feature.geometry else {
        return None;
    };
    // Leaflet expects [lat, lon]
    let coords: Vec<[f64; 2]> = line.coords().map(|c| [c.y, c.x]).collect();
    let popup = format!(
        "<b>from_to</b>: {}:{}",
        escape_html(&feature.record.from_stop_name),
        escape_html(&feature.record.to_stop_name)
    );
    Some(json!({ "coords": coords, "popup": popup }))
}

// JSON embedded in a script block must not be able to close it
fn script_json(value: &JsonValue) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use geo::{LineString, Point};

    use super::*;
    use crate::routing::test_support::record;

    fn feature(from: &str, to: &str, geometry: Option<Geometry<f64>>) -> RouteFeature {
        RouteFeature {
            record: record(from, to, 1, 2),
            path: None,
            geometry,
        }
    }

    #[test]
    fn draws_lines_in_network_colours() {
        let drive = vec![
            feature(
                "Central",
                "Harbour",
                Some(LineString::from(vec![(131.0, 34.0), (131.1, 34.1)]).into()),
            ),
            feature("Harbour", "Depot", Some(Point::new(131.0, 34.0).into())),
        ];
        let full = vec![feature("Depot", "Central", None)];
        let config = MapConfig::default();

        let html = render_map_html(
            &[
                (NetworkKind::Drive, drive.as_slice()),
                (NetworkKind::Full, full.as_slice()),
            ],
            &config,
        )
        .unwrap();

        assert!(html.contains(r#""color":"green""#));
        assert!(html.contains(r#""color":"red""#));
        assert!(html.contains("[34.0,131.0],[34.1,131.1]"));
        assert!(html.contains("Central:Harbour"));
        // points are not drawn
        assert!(!html.contains("Harbour:Depot"));
        assert!(!html.contains("__LAYERS__"));
    }

    #[test]
    fn escapes_stop_names() {
        let drive = vec![feature(
            "<script>",
            "A&B",
            Some(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]).into()),
        )];

        let html = render_map_html(
            &[(NetworkKind::Drive, drive.as_slice())],
            &MapConfig::default(),
        )
        .unwrap();

        assert!(html.contains("&lt;script&gt;:A&amp;B"));
        assert_eq!(html.matches("</script>").count(), 2);
    }
}
