use hashbrown::HashMap;
use itertools::{Either, Itertools};
use log::{info, warn};

use super::compute_table_paths;
use crate::{
    Progress,
    geometry::attach_geometries,
    model::{OdRecord, RoadNetwork, RouteFeature, ViaOverride, Weight},
};

/// Result of applying overrides to a route table
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// One row per distinct (origin name, destination name) pair
    pub features: Vec<RouteFeature>,
    /// Overrides whose name pair matched no row of the table
    pub unmatched: Vec<ViaOverride>,
}

/// Resolves the endpoints of name-keyed overrides against a computed table.
///
/// Stop ids and node ids are taken from the first table row with the same
/// (origin name, destination name) pair. Overrides without a match are
/// returned separately and never routed.
pub fn resolve_overrides(
    overrides: &[ViaOverride],
    table: &[RouteFeature],
) -> (Vec<OdRecord>, Vec<ViaOverride>) {
    let mut by_name: HashMap<(&str, &str), &OdRecord> = HashMap::with_capacity(table.len());
    for feature in table {
        by_name.entry(feature.name_key()).or_insert(&feature.record);
    }

    overrides.iter().partition_map(|entry| {
        let key = (entry.from_stop_name.as_str(), entry.to_stop_name.as_str());
        match by_name.get(&key) {
            Some(&matched) => Either::Left(OdRecord {
                via: entry.via.clone(),
                ..matched.clone()
            }),
            None => Either::Right(entry.clone()),
        }
    })
}

/// Concatenates two tables and keeps the first row for every
/// (origin name, destination name) pair, so `primary` always wins.
pub fn merge_and_dedup(
    primary: Vec<RouteFeature>,
    secondary: Vec<RouteFeature>,
) -> Vec<RouteFeature> {
    primary
        .into_iter()
        .chain(secondary)
        .unique_by(|feature| {
            (
                feature.record.from_stop_name.clone(),
                feature.record.to_stop_name.clone(),
            )
        })
        .collect()
}

/// Recomputes overridden pairs through their via nodes and merges them over
/// the bulk table.
pub fn apply_overrides<G>(
    overrides: &[ViaOverride],
    table: Vec<RouteFeature>,
    network: &G,
    weight: Weight,
    progress: Option<Progress<'_>>,
) -> MergeOutcome
where
    G: RoadNetwork + ?Sized,
{
    let (records, unmatched) = resolve_overrides(overrides, &table);

    for entry in &unmatched {
        warn!(
            "Override {} -> {} matches no route segment, skipping",
            entry.from_stop_name, entry.to_stop_name
        );
    }

    let recomputed = attach_geometries(
        compute_table_paths(records, network, weight, progress),
        network,
    );
    info!(
        "Recomputed {} overridden routes ({} unmatched)",
        recomputed.len(),
        unmatched.len()
    );

    MergeOutcome {
        features: merge_and_dedup(recomputed, table),
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use geo::Geometry;
    use hashbrown::HashSet;

    use super::*;
    use crate::{
        NodeId,
        geometry::attach_geometries,
        model::{Path, RoutedRecord},
        routing::test_support::{FixedPaths, record},
    };

    const A: NodeId = 1;
    const B: NodeId = 2;
    const M: NodeId = 3;
    const X: NodeId = 4;
    const Y: NodeId = 5;

    fn bulk_row(from: &str, to: &str, path: &[NodeId]) -> RouteFeature {
        let routed = RoutedRecord {
            record: record(from, to, path[0], path[path.len() - 1]),
            path: Some(Path::new(path.to_vec())),
        };
        attach_geometries(vec![routed], &FixedPaths::default())
            .pop()
            .unwrap()
    }

    fn via(from: &str, to: &str, via: &[NodeId]) -> ViaOverride {
        ViaOverride {
            from_stop_name: from.to_string(),
            to_stop_name: to.to_string(),
            via: via.to_vec(),
        }
    }

    #[test]
    fn override_replaces_bulk_route() {
        let network = FixedPaths::default()
            .with(&[A, M, B])
            .with(&[A, X])
            .with(&[X, Y, B]);
        let table = vec![bulk_row("A", "B", &[A, M, B])];

        let outcome = apply_overrides(
            &[via("A", "B", &[X])],
            table,
            &network,
            Weight::Length,
            None,
        );

        assert!(outcome.unmatched.is_empty());
        assert_eq!(outcome.features.len(), 1);
        let merged = &outcome.features[0];
        assert_eq!(merged.path.as_ref().unwrap().nodes(), &[A, X, Y, B]);
        assert_eq!(merged.record.via, vec![X]);
        assert_eq!(merged.record.from_stop_id, "A-id");
        let Some(Geometry::LineString(line)) = &merged.geometry else {
            panic!("expected a line string");
        };
        assert_eq!(line.0.len(), 4);
    }

    #[test]
    fn unmatched_overrides_are_reported_not_routed() {
        let network = FixedPaths::default().with(&[A, M, B]);
        let table = vec![bulk_row("A", "B", &[A, M, B])];

        let outcome = apply_overrides(
            &[via("A", "Z", &[X])],
            table,
            &network,
            Weight::Length,
            None,
        );

        assert_eq!(outcome.unmatched, vec![via("A", "Z", &[X])]);
        assert_eq!(outcome.features.len(), 1);
        assert_eq!(outcome.features[0].path.as_ref().unwrap().nodes(), &[A, M, B]);
    }

    #[test]
    fn override_wins_even_when_its_route_is_unreachable() {
        let network = FixedPaths::default().with(&[A, M, B]);
        let table = vec![bulk_row("A", "B", &[A, M, B])];

        let outcome = apply_overrides(
            &[via("A", "B", &[X])],
            table,
            &network,
            Weight::Length,
            None,
        );

        assert_eq!(outcome.features.len(), 1);
        assert_eq!(outcome.features[0].path, None);
        assert_eq!(outcome.features[0].geometry, None);
    }

    #[test]
    fn dedup_keeps_exactly_one_row_per_name_pair() {
        let primary = vec![bulk_row("A", "B", &[A, X, B]), bulk_row("A", "B", &[A, Y, B])];
        let secondary = vec![
            bulk_row("A", "B", &[A, M, B]),
            bulk_row("B", "A", &[B, M, A]),
            bulk_row("B", "A", &[B, A]),
            bulk_row("X", "Y", &[X, Y]),
        ];

        let merged = merge_and_dedup(primary, secondary);

        let keys: HashSet<_> = merged.iter().map(|f| f.name_key()).collect();
        assert_eq!(keys.len(), merged.len());
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].path.as_ref().unwrap().nodes(), &[A, X, B]);
        assert_eq!(merged[1].path.as_ref().unwrap().nodes(), &[B, M, A]);
    }

    #[test]
    fn resolve_uses_first_matching_row() {
        let mut second = bulk_row("A", "B", &[X, B]);
        second.record.from_stop_id = "other".to_string();
        let table = vec![bulk_row("A", "B", &[A, M, B]), second];

        let (records, unmatched) = resolve_overrides(&[via("A", "B", &[Y])], &table);

        assert!(unmatched.is_empty());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from_node, A);
        assert_eq!(records[0].from_stop_id, "A-id");
        assert_eq!(records[0].via, vec![Y]);
    }
}
