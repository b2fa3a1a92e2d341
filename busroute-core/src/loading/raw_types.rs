use serde::Deserialize;

use crate::NodeId;

/// GTFS stop, only the columns used for naming
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FeedStop {
    pub stop_id: String,
    pub stop_name: String,
}

/// Stop snapped to a street network node
#[derive(Debug, Clone, Deserialize)]
pub struct StopNodeRow {
    pub stop_id: String,
    pub osmid: NodeId,
}

/// Consecutive stops served by a bus route
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRow {
    pub from_stop_id: String,
    pub to_stop_id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct NodeRow {
    pub osmid: NodeId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct EdgeRow {
    pub u: NodeId,
    pub v: NodeId,
    pub length: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverrideRow {
    pub from_stop_name: String,
    pub to_stop_name: String,
    #[serde(default)]
    pub via: String,
}
