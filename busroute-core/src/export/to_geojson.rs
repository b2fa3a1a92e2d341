use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{
    Error,
    model::{NetworkKind, RouteFeature},
};

/// Converts route tables into one `GeoJSON` `FeatureCollection`.
///
/// Rows without a route keep their properties and get a `null` geometry.
pub fn to_feature_collection(
    layers: &[(NetworkKind, &[RouteFeature])],
) -> Result<FeatureCollection, Error> {
    let features = layers
        .iter()
        .flat_map(|(kind, features)| features.iter().map(move |feature| (*kind, feature)))
        .map(|(kind, feature)| create_route_feature(kind, feature))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Writes route tables as a `GeoJSON` file
pub fn write_geojson(path: &Path, layers: &[(NetworkKind, &[RouteFeature])]) -> Result<(), Error> {
    let collection = to_feature_collection(layers)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;
    log::info!(
        "Wrote {} features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(())
}

fn create_route_feature(kind: NetworkKind, feature: &RouteFeature) -> Result<Feature, Error> {
    let record = &feature.record;
    let geometry = feature
        .geometry
        .as_ref()
        .map(|geometry| Geometry::new(GeoJsonValue::from(geometry)));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "from_stop_id": record.from_stop_id,
            "to_stop_id": record.to_stop_id,
            "from_stop_name": record.from_stop_name,
            "to_stop_name": record.to_stop_name,
            "from_osmid": record.from_node,
            "to_osmid": record.to_node,
            "via": record.via,
            "network": kind.as_str(),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
