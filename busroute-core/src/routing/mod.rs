//! Route reconciliation: shortest paths, via-node stitching, bulk tables and
//! manual overrides

pub(crate) mod dijkstra;
mod overrides;
mod path_builder;
mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use overrides::{MergeOutcome, apply_overrides, merge_and_dedup, resolve_overrides};
pub use path_builder::build_path;
pub use table::compute_table_paths;
