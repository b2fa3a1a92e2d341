// Re-export key components
pub use crate::geometry::{attach_geometries, build_geometry};
pub use crate::loading::{MapConfig, NameAlias, PipelineConfig};
pub use crate::model::{
    NetworkKind, OdRecord, Path, RoadNetwork, RouteFeature, RoutedRecord, StreetGraph, ViaOverride,
    Weight,
};
pub use crate::pipeline::{PipelineOutput, PipelineSummary, run_pipeline};
pub use crate::routing::{
    MergeOutcome, apply_overrides, build_path, compute_table_paths, merge_and_dedup,
    resolve_overrides,
};

pub use crate::Error;
pub use crate::NodeId;
pub use crate::Progress;
