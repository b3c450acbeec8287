//! Undirected graph built by the command layer, plus the deduplicated edge
//! list that feeds the cover encoding.

use std::error::Error;
use std::fmt;

/// Rejected edge insertions, kept apart so callers can report precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Both endpoints are the same vertex.
    DegenerateEdge(usize),
    /// An endpoint is outside `[0, vertex_count)`.
    OutOfBounds {
        u: usize,
        v: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateEdge(v) => write!(f, "edge endpoints must differ, got <{},{}>", v, v),
            Self::OutOfBounds { u, v, vertex_count } => write!(
                f,
                "edge <{},{}> is out of bounds for a graph with {} vertices",
                u, v, vertex_count
            ),
        }
    }
}

impl Error for GraphError {}

/// An undirected graph over vertices `0..vertex_count` with symmetric
/// adjacency lists. Every edge is stored in both endpoint lists, in
/// insertion order. Duplicate edges are not detected here; the caller keeps
/// an [`EdgeSet`] for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Replaces the graph with an edgeless one of the given size.
    pub fn resize(&mut self, vertex_count: usize) {
        self.vertex_count = vertex_count;
        self.adjacency = vec![Vec::new(); vertex_count];
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn in_bounds(&self, u: usize, v: usize) -> bool {
        u < self.vertex_count && v < self.vertex_count
    }

    /// Appends `v` to `u`'s adjacency and vice versa. Self-loops and
    /// out-of-bounds endpoints are rejected without touching either list.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        if u == v {
            return Err(GraphError::DegenerateEdge(u));
        }
        if !self.in_bounds(u, v) {
            return Err(GraphError::OutOfBounds {
                u,
                v,
                vertex_count: self.vertex_count,
            });
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }

    /// Neighbors of `u` in insertion order.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }
}

/// Ordered set of unique unordered vertex pairs. This is the single source
/// of clause-4 constraints: one logical edge per entry, no duplicates in
/// either orientation, no self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: Vec<(usize, usize)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.edges
            .iter()
            .any(|&(a, b)| (a == u && b == v) || (a == v && b == u))
    }

    /// Records the pair unless it is a self-loop or already present in
    /// either orientation. Returns whether the pair was added.
    pub fn insert(&mut self, u: usize, v: usize) -> bool {
        if u == v || self.contains(u, v) {
            return false;
        }
        self.edges.push((u, v));
        true
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
