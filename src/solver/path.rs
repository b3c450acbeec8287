//! Breadth-first shortest path with parent-pointer reconstruction.

use std::collections::VecDeque;

use tracing::trace;

use super::graph::Graph;

/// Shortest path from `source` to `destination` by edge count, inclusive of
/// both endpoints, or `None` when no path exists. Both endpoints must be in
/// bounds; callers check via [`Graph::in_bounds`] first.
///
/// Among equal-length paths the result follows adjacency insertion order
/// and left-to-right frontier expansion, so repeated queries on the same
/// graph reproduce the same path.
pub fn shortest_path(graph: &Graph, source: usize, destination: usize) -> Option<Vec<usize>> {
    if source == destination {
        return Some(vec![source]);
    }

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut frontier = VecDeque::new();
    visited[source] = true;
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        for &next in graph.neighbors(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);
            if next == destination {
                trace!(source, destination, "destination discovered");
                return Some(reconstruct(&parent, source, destination));
            }
            frontier.push_back(next);
        }
    }
    None
}

/// Walks parent links destination -> source, then reverses.
fn reconstruct(parent: &[Option<usize>], source: usize, destination: usize) -> Vec<usize> {
    let mut path = vec![destination];
    let mut vertex = destination;
    while vertex != source {
        vertex = parent[vertex].expect("discovered vertices have a recorded parent");
        path.push(vertex);
    }
    path.reverse();
    path
}
