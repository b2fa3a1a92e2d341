//! Map layer exporters: GeoJSON interchange file and a Leaflet HTML map

mod map;
mod to_geojson;

pub use map::{render_map_html, write_map_html};
pub use to_geojson::{to_feature_collection, write_geojson};
