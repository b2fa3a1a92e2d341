//! Street network components - nodes, edges and edge weighting

use geo::Point;
use serde::Deserialize;

use crate::NodeId;

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// OSM ID of the node
    pub id: NodeId,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Street graph edge (street segment)
#[derive(Debug, Clone, Copy)]
pub struct StreetEdge {
    /// Segment length in metres
    pub length: f64,
}

impl StreetEdge {
    pub fn cost(&self, weight: Weight) -> f64 {
        match weight {
            Weight::Length => self.length,
            Weight::Unweighted => 1.0,
        }
    }
}

/// Edge attribute minimised by shortest path queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    /// Physical segment length
    #[default]
    Length,
    /// Every edge costs the same, minimising the number of hops
    Unweighted,
}
