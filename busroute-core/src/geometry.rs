//! Conversion of node paths into point or line geometries

use geo::{Coord, Geometry, LineString, Point};
use log::warn;
use rayon::prelude::*;

use crate::model::{Path, RoadNetwork, RouteFeature, RoutedRecord};

/// Builds the geometry of a path from the network's node coordinates.
///
/// An empty path has no geometry, a single node becomes a point and longer
/// paths become a line through every node in order. A node missing from the
/// network also yields `None`.
pub fn build_geometry<G>(path: &Path, network: &G) -> Option<Geometry<f64>>
where
    G: RoadNetwork + ?Sized,
{
    let coords = path
        .nodes()
        .iter()
        .map(|&node| {
            let coord = network.node_coord(node);
            if coord.is_none() {
                warn!("Node {node} has no coordinates in the network");
            }
            coord
        })
        .collect::<Option<Vec<Coord<f64>>>>()?;

    match coords.len() {
        0 => None,
        1 => Some(Geometry::Point(Point::from(coords[0]))),
        _ => Some(Geometry::LineString(LineString::new(coords))),
    }
}

/// Attaches geometries to a routed table, keeping row order.
pub fn attach_geometries<G>(rows: Vec<RoutedRecord>, network: &G) -> Vec<RouteFeature>
where
    G: RoadNetwork + ?Sized,
{
    rows.into_par_iter()
        .map(|RoutedRecord { record, path }| {
            let geometry = path.as_ref().and_then(|path| build_geometry(path, network));
            RouteFeature {
                record,
                path,
                geometry,
            }
        })
        .collect()
}
