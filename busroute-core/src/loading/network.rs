use geo::Point;
use log::info;

use super::{
    config::NetworkPaths,
    parser::deserialize_csv_file,
    raw_types::{EdgeRow, NodeRow},
};
use crate::{
    Error,
    model::{StreetEdge, StreetGraph, StreetNode},
};

/// Loads a pre-built street network from its node and edge tables.
///
/// # Errors
///
/// Returns an error if a table cannot be read or the edges do not fit the
/// nodes.
pub fn load_street_graph(paths: &NetworkPaths) -> Result<StreetGraph, Error> {
    let nodes: Vec<NodeRow> = deserialize_csv_file(&paths.nodes_path)?;
    let edges: Vec<EdgeRow> = deserialize_csv_file(&paths.edges_path)?;

    let graph = StreetGraph::from_parts(
        nodes.into_iter().map(|row| StreetNode {
            id: row.osmid,
            geometry: Point::new(row.x, row.y),
        }),
        edges
            .into_iter()
            .map(|row| (row.u, row.v, StreetEdge { length: row.length })),
    )?;

    info!(
        "Loaded street network {} ({} nodes, {} edges)",
        paths.nodes_path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Loads the drive and full networks concurrently
pub fn load_networks(
    drive: &NetworkPaths,
    full: &NetworkPaths,
) -> Result<(StreetGraph, StreetGraph), Error> {
    let (drive_graph, full_graph) =
        rayon::join(|| load_street_graph(drive), || load_street_graph(full));
    Ok((drive_graph?, full_graph?))
}
