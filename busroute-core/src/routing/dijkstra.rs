use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::{HashMap, hash_map::Entry};
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::model::{StreetGraph, Weight};

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm for a single source-target pair.
/// Returns the node indices of the cheapest path, or `None` if the target
/// cannot be reached.
pub(crate) fn dijkstra_path(
    graph: &StreetGraph,
    start: NodeIndex,
    target: NodeIndex,
    weight: Weight,
) -> Option<Vec<NodeIndex>> {
    if start == target {
        return Some(vec![start]);
    }

    let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut heap = BinaryHeap::new();

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    let mut reached = false;
    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            reached = true;
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node)
            && cost > best
        {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().cost(weight);

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    if !reached {
        return None;
    }

    // Follow predecessors backward from target to start
    let mut node_path = vec![target];
    let mut current = target;
    while current != start {
        current = *predecessors.get(&current)?;
        node_path.push(current);
    }
    node_path.reverse();

    Some(node_path)
}
