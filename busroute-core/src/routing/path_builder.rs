use std::iter;

use itertools::Itertools;
use log::debug;

use crate::{
    NodeId,
    model::{Path, RoadNetwork, Weight},
};

/// Builds one continuous path from `source` to `target` through the ordered
/// `via` nodes.
///
/// Without via nodes this is the plain shortest path. Otherwise the shortest
/// paths between consecutive checkpoints are stitched together, dropping the
/// repeated checkpoint at each splice. If any leg is unreachable the whole
/// path is `None`; a partial route is never returned.
pub fn build_path<G>(
    network: &G,
    source: NodeId,
    target: NodeId,
    via: &[NodeId],
    weight: Weight,
) -> Option<Path>
where
    G: RoadNetwork + ?Sized,
{
    if via.is_empty() {
        return network.shortest_path(source, target, weight);
    }

    let checkpoints = iter::once(source)
        .chain(via.iter().copied())
        .chain(iter::once(target));

    let mut path = Path::default();
    for (current, next) in checkpoints.tuple_windows() {
        let Some(segment) = network.shortest_path(current, next, weight) else {
            debug!("No path between checkpoints {current} and {next} ({source} -> {target})");
            return None;
        };
        path.append_segment(segment);
    }

    Some(path)
}
