//! Arena storage for search nodes. Nodes refer to their parent by index, so the explored
//! spanning tree lives in a single [Vec] which is cleared in bulk when a search is reset.
use grid_util::Point;

/// Parent index of the root node.
pub const NO_PARENT: usize = usize::MAX;

/// One explored or frontier cell. `data` carries per-algorithm bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub point: Point,
    pub parent: usize,
    pub data: T,
}

impl<T> Node<T> {
    pub fn is_root(&self) -> bool {
        self.parent == NO_PARENT
    }
}

#[derive(Clone, Debug)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        NodeArena { nodes: Vec::new() }
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> NodeArena<T> {
        NodeArena::default()
    }

    /// Adds a node and returns its index. A parent must already be in the arena, so parent
    /// indices are always smaller than child indices and the links cannot form a cycle.
    pub fn push(&mut self, point: Point, parent: usize, data: T) -> usize {
        debug_assert!(parent == NO_PARENT || parent < self.nodes.len());
        self.nodes.push(Node {
            point,
            parent,
            data,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, index: usize) -> &Node<T> {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Indices from `index` up to and including the root.
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(index), |&i| {
            let parent = self.nodes[i].parent;
            (parent != NO_PARENT).then_some(parent)
        })
    }

    /// Walks the parent links from `index` back to the root and returns the points from
    /// the root to `index`.
    pub fn path_to(&self, index: usize) -> Vec<Point> {
        let mut path: Vec<Point> = self
            .ancestors(index)
            .map(|i| self.nodes[i].point)
            .collect();
        path.reverse();
        path
    }

    /// Number of moves between the root and `index`.
    pub fn depth(&self, index: usize) -> usize {
        self.ancestors(index).count() - 1
    }
}
