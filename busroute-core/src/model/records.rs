//! Tabular records flowing through the routing pipeline

use std::fmt;

use geo::Geometry;
use serde::Deserialize;

use super::Path;
use crate::NodeId;

/// Street network a route table was computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkKind {
    /// Road-only network usable by buses
    Drive,
    /// Road and pedestrian network, used for stops the drive network misses
    Full,
}

impl NetworkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkKind::Drive => "drive",
            NetworkKind::Full => "full",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stop-to-stop segment with its resolved street nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdRecord {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub from_stop_name: String,
    pub to_stop_name: String,
    pub from_node: NodeId,
    pub to_node: NodeId,
    /// Nodes the route must pass through, in order
    pub via: Vec<NodeId>,
}

impl OdRecord {
    /// Key used to match overrides and deduplicate tables
    pub fn name_key(&self) -> (&str, &str) {
        (&self.from_stop_name, &self.to_stop_name)
    }
}

/// Record annotated with its computed path, `None` when unreachable
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedRecord {
    pub record: OdRecord,
    pub path: Option<Path>,
}

/// Record annotated with both path and geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFeature {
    pub record: OdRecord,
    pub path: Option<Path>,
    pub geometry: Option<Geometry<f64>>,
}

impl RouteFeature {
    pub fn name_key(&self) -> (&str, &str) {
        self.record.name_key()
    }
}

/// Manually curated route correction, keyed by stop names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViaOverride {
    pub from_stop_name: String,
    pub to_stop_name: String,
    pub via: Vec<NodeId>,
}
