//! This module is responsible for loading the street networks, stop tables
//! and manual route overrides, and assembling them into route tables.

mod config;
mod network;
mod overrides;
mod parser;
mod raw_types;
mod records;

pub use config::{MapConfig, NameAlias, NetworkPaths, PipelineConfig};
pub use network::{load_networks, load_street_graph};
pub use overrides::{load_overrides, parse_overrides};
pub(crate) use parser::deserialize_csv_file;
pub use parser::{ViaParseError, parse_via_nodes};
pub use raw_types::{FeedStop, SegmentRow, StopNodeRow};
pub use records::{NetworkSplit, assemble_records, normalize_stop_name, split_by_network};
