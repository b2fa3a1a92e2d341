//! Batch run from input files to the two merged route tables

use std::path::Path;

use log::info;

use crate::{
    Error, Progress,
    geometry::attach_geometries,
    loading::{
        FeedStop, PipelineConfig, SegmentRow, StopNodeRow, assemble_records,
        deserialize_csv_file, load_networks, load_overrides, split_by_network,
    },
    model::{NetworkKind, OdRecord, RouteFeature, StreetGraph, Weight},
    routing::{apply_overrides, compute_table_paths},
};

/// Counters describing a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Segments read from the segment table
    pub segments: usize,
    /// Segments dropped for missing stop data or network coverage
    pub unresolved_segments: usize,
    pub drive_routes: usize,
    pub full_routes: usize,
    /// Final rows without a path
    pub unreachable_routes: usize,
    pub unmatched_overrides: usize,
}

/// Final route tables of a run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub drive: Vec<RouteFeature>,
    pub full: Vec<RouteFeature>,
    pub summary: PipelineSummary,
}

impl PipelineOutput {
    /// Tables paired with the network they were routed on
    pub fn layers(&self) -> [(NetworkKind, &[RouteFeature]); 2] {
        [
            (NetworkKind::Drive, self.drive.as_slice()),
            (NetworkKind::Full, self.full.as_slice()),
        ]
    }
}

/// Runs the whole batch: loads inputs, routes every segment on its network,
/// applies the manual overrides and returns the merged tables.
///
/// # Errors
///
/// Returns an error if an input is missing or cannot be read. Unroutable
/// segments are only counted in the summary.
pub fn run_pipeline(
    config: &PipelineConfig,
    progress: Option<Progress<'_>>,
) -> Result<PipelineOutput, Error> {
    validate_config(config)?;

    info!("Loading street networks");
    let (drive_graph, full_graph) = load_networks(&config.drive_network, &config.full_network)?;

    info!("Loading stop tables");
    let stop_nodes: Vec<StopNodeRow> = deserialize_csv_file(&config.stop_nodes_path)?;
    let stops: Vec<FeedStop> = deserialize_csv_file(&config.stops_path)?;
    let segments: Vec<SegmentRow> = deserialize_csv_file(&config.segments_path)?;
    let segment_count = segments.len();

    let (records, unresolved) =
        assemble_records(segments, &stop_nodes, &stops, &config.name_aliases);
    let split = split_by_network(records, &drive_graph, &full_graph);

    let (drive, drive_unmatched) = route_network(
        NetworkKind::Drive,
        split.drive,
        &drive_graph,
        config.drive_overrides_path.as_deref(),
        config.weight,
        progress,
    )?;
    let (full, full_unmatched) = route_network(
        NetworkKind::Full,
        split.full,
        &full_graph,
        config.full_overrides_path.as_deref(),
        config.weight,
        progress,
    )?;

    let summary = PipelineSummary {
        segments: segment_count,
        unresolved_segments: unresolved.len() + split.unresolved.len(),
        drive_routes: drive.len(),
        full_routes: full.len(),
        unreachable_routes: drive
            .iter()
            .chain(&full)
            .filter(|feature| feature.path.is_none())
            .count(),
        unmatched_overrides: drive_unmatched + full_unmatched,
    };
    info!("Pipeline finished: {summary:?}");

    Ok(PipelineOutput {
        drive,
        full,
        summary,
    })
}

fn route_network(
    kind: NetworkKind,
    records: Vec<OdRecord>,
    graph: &StreetGraph,
    overrides_path: Option<&Path>,
    weight: Weight,
    progress: Option<Progress<'_>>,
) -> Result<(Vec<RouteFeature>, usize), Error> {
    info!("Computing {} {kind} routes", records.len());
    let table = attach_geometries(compute_table_paths(records, graph, weight, progress), graph);

    // Without overrides the table still goes through dedup
    let overrides = match overrides_path {
        Some(path) => load_overrides(path)?,
        None => Vec::new(),
    };
    let outcome = apply_overrides(&overrides, table, graph, weight, progress);
    Ok((outcome.features, outcome.unmatched.len()))
}

fn validate_config(config: &PipelineConfig) -> Result<(), Error> {
    for path in config.input_paths() {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input file not found: {}", path.display()),
            )));
        }
    }
    Ok(())
}
