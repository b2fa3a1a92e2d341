use hashbrown::HashMap;
use log::{info, warn};

use super::{
    config::NameAlias,
    raw_types::{FeedStop, SegmentRow, StopNodeRow},
};
use crate::{
    NodeId,
    model::{OdRecord, StreetGraph},
};

/// Applies name aliases in order; a later alias sees the result of earlier
/// ones.
pub fn normalize_stop_name(name: &str, aliases: &[NameAlias]) -> String {
    aliases
        .iter()
        .fold(name.to_string(), |current, alias| {
            if current.contains(&alias.pattern) {
                alias.canonical.clone()
            } else {
                current
            }
        })
}

/// Joins segments with stop names and snapped nodes.
///
/// Segments whose stops lack a node or a name cannot be routed and are
/// returned as the second element.
pub fn assemble_records(
    segments: Vec<SegmentRow>,
    stop_nodes: &[StopNodeRow],
    stops: &[FeedStop],
    aliases: &[NameAlias],
) -> (Vec<OdRecord>, Vec<SegmentRow>) {
    let names: HashMap<&str, &str> = stops
        .iter()
        .map(|stop| (stop.stop_id.as_str(), stop.stop_name.as_str()))
        .collect();
    let nodes: HashMap<&str, NodeId> = stop_nodes
        .iter()
        .map(|row| (row.stop_id.as_str(), row.osmid))
        .collect();

    let resolve = |stop_id: &str| -> Option<(NodeId, String)> {
        let node = *nodes.get(stop_id)?;
        let name = names.get(stop_id).filter(|name| !name.is_empty())?;
        Some((node, normalize_stop_name(name, aliases)))
    };

    let mut records = Vec::with_capacity(segments.len());
    let mut unresolved = Vec::new();

    for segment in segments {
        match (resolve(&segment.from_stop_id), resolve(&segment.to_stop_id)) {
            (Some((from_node, from_stop_name)), Some((to_node, to_stop_name))) => {
                records.push(OdRecord {
                    from_stop_id: segment.from_stop_id,
                    to_stop_id: segment.to_stop_id,
                    from_stop_name,
                    to_stop_name,
                    from_node,
                    to_node,
                    via: Vec::new(),
                });
            }
            _ => {
                warn!(
                    "Segment {} -> {} has a stop without node or name, skipping",
                    segment.from_stop_id, segment.to_stop_id
                );
                unresolved.push(segment);
            }
        }
    }

    (records, unresolved)
}

/// Records partitioned by the network able to route them
#[derive(Debug, Clone, Default)]
pub struct NetworkSplit {
    /// Both endpoints are in the drive network
    pub drive: Vec<OdRecord>,
    /// Only the full network knows both endpoints
    pub full: Vec<OdRecord>,
    /// Neither network knows both endpoints
    pub unresolved: Vec<OdRecord>,
}

/// Assigns each record to the drive network when possible, falling back to
/// the full network.
pub fn split_by_network(
    records: Vec<OdRecord>,
    drive: &StreetGraph,
    full: &StreetGraph,
) -> NetworkSplit {
    let mut split = NetworkSplit::default();

    for record in records {
        let in_graph =
            |graph: &StreetGraph| graph.contains(record.from_node) && graph.contains(record.to_node);

        if in_graph(drive) {
            split.drive.push(record);
        } else if in_graph(full) {
            split.full.push(record);
        } else {
            warn!(
                "Segment {} -> {} (nodes {} -> {}) is in neither network",
                record.from_stop_name, record.to_stop_name, record.from_node, record.to_node
            );
            split.unresolved.push(record);
        }
    }

    info!(
        "Split route segments: {} drive, {} full, {} unresolved",
        split.drive.len(),
        split.full.len(),
        split.unresolved.len()
    );
    split
}
