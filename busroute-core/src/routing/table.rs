use log::debug;
use rayon::prelude::*;

use super::build_path;
use crate::{
    Progress,
    model::{OdRecord, RoadNetwork, RoutedRecord, Weight},
};

/// Computes a path for every record of a route table.
///
/// Rows are independent and processed in parallel; the output keeps the input
/// order. Unreachable pairs are recorded as `path: None` and never fail the
/// table.
pub fn compute_table_paths<G>(
    records: Vec<OdRecord>,
    network: &G,
    weight: Weight,
    progress: Option<Progress<'_>>,
) -> Vec<RoutedRecord>
where
    G: RoadNetwork + ?Sized,
{
    records
        .into_par_iter()
        .map(|record| {
            let path = build_path(
                network,
                record.from_node,
                record.to_node,
                &record.via,
                weight,
            );
            if path.is_none() {
                debug!(
                    "No route {} -> {} (nodes {} -> {})",
                    record.from_stop_name, record.to_stop_name, record.from_node, record.to_node
                );
            }
            if let Some(report) = progress {
                report();
            }
            RoutedRecord { record, path }
        })
        .collect()
}
