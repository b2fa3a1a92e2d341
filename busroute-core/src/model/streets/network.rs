//! Street graph and the shortest path seam used by the routing core

use geo::Coord;
use hashbrown::{HashMap, hash_map::Entry};
use petgraph::{
    Directed,
    graph::{DiGraph, Edges, NodeIndex},
};

use super::{StreetEdge, StreetNode, Weight};
use crate::{Error, NodeId, model::Path, routing::dijkstra::dijkstra_path};

/// Read-only access to a pre-built street network.
///
/// Implementations must be safe to query from several threads at once, as bulk
/// path computation runs rows in parallel.
pub trait RoadNetwork: Sync {
    /// Shortest path between two nodes, `None` when the nodes are unknown or
    /// disconnected.
    fn shortest_path(&self, source: NodeId, target: NodeId, weight: Weight) -> Option<Path>;

    /// Coordinates of a node, `None` when the node is unknown.
    fn node_coord(&self, node: NodeId) -> Option<Coord<f64>>;
}

/// Directed street multigraph indexed by OSM node id
#[derive(Debug, Clone, Default)]
pub struct StreetGraph {
    pub(crate) graph: DiGraph<StreetNode, StreetEdge>,
    node_index: HashMap<NodeId, NodeIndex>,
}

impl StreetGraph {
    /// Builds a graph from node and directed edge lists.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate node ids, edges referencing unknown nodes
    /// and negative or non-finite edge lengths.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Result<Self, Error>
    where
        N: IntoIterator<Item = StreetNode>,
        E: IntoIterator<Item = (NodeId, NodeId, StreetEdge)>,
    {
        let mut street_graph = StreetGraph::default();

        for node in nodes {
            let id = node.id;
            match street_graph.node_index.entry(id) {
                Entry::Occupied(_) => {
                    return Err(Error::InvalidData(format!("Duplicate node id {id}")));
                }
                Entry::Vacant(entry) => {
                    entry.insert(street_graph.graph.add_node(node));
                }
            }
        }

        for (from, to, edge) in edges {
            if !edge.length.is_finite() || edge.length < 0.0 {
                return Err(Error::InvalidData(format!(
                    "Edge {from} -> {to} has invalid length {}",
                    edge.length
                )));
            }
            let source = street_graph.index_of(from).ok_or(Error::UnknownNode(from))?;
            let target = street_graph.index_of(to).ok_or(Error::UnknownNode(to))?;
            street_graph.graph.add_edge(source, target, edge);
        }

        Ok(street_graph)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node_index.contains_key(&node)
    }

    pub(crate) fn index_of(&self, node: NodeId) -> Option<NodeIndex> {
        self.node_index.get(&node).copied()
    }

    pub(crate) fn node_id(&self, index: NodeIndex) -> Option<NodeId> {
        self.graph.node_weight(index).map(|node| node.id)
    }

    pub(crate) fn edges(&self, index: NodeIndex) -> Edges<'_, StreetEdge, Directed> {
        self.graph.edges(index)
    }
}

impl RoadNetwork for StreetGraph {
    fn shortest_path(&self, source: NodeId, target: NodeId, weight: Weight) -> Option<Path> {
        let start = self.index_of(source)?;
        let goal = self.index_of(target)?;
        let nodes = dijkstra_path(self, start, goal, weight)?
            .into_iter()
            .map(|index| self.node_id(index))
            .collect::<Option<Vec<_>>>()?;
        Some(Path::new(nodes))
    }

    fn node_coord(&self, node: NodeId) -> Option<Coord<f64>> {
        let index = self.index_of(node)?;
        self.graph
            .node_weight(index)
            .map(|node| node.geometry.into())
    }
}
