use crate::NodeId;

/// Ordered sequence of street nodes from a source to a target.
///
/// Adjacent nodes are connected by an edge of the graph the path was computed
/// on, and no node is immediately repeated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Appends a segment that starts where this path ends.
    ///
    /// The first segment is taken whole; every later one loses its first node,
    /// which is the checkpoint already closing this path.
    pub(crate) fn append_segment(&mut self, segment: Path) {
        if self.nodes.is_empty() {
            self.nodes = segment.nodes;
        } else {
            self.nodes.extend(segment.nodes.into_iter().skip(1));
        }
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_is_taken_whole() {
        let mut path = Path::default();
        path.append_segment(Path::new(vec![1, 2, 3]));
        assert_eq!(path.nodes(), &[1, 2, 3]);
    }

    #[test]
    fn later_segments_drop_the_shared_checkpoint() {
        let mut path = Path::new(vec![1, 2, 3]);
        path.append_segment(Path::new(vec![3, 4]));
        path.append_segment(Path::new(vec![4, 5, 6]));
        assert_eq!(path.nodes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(path.source(), Some(1));
        assert_eq!(path.target(), Some(6));
    }

    #[test]
    fn single_node_segment_adds_nothing() {
        let mut path = Path::new(vec![1, 2]);
        path.append_segment(Path::new(vec![2]));
        assert_eq!(path.nodes(), &[1, 2]);
    }
}
