use minicover::solver::graph::Graph;
use minicover::solver::path::shortest_path;

fn path_graph(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1).unwrap();
    }
    g
}

#[test]
fn test_path_graph_end_to_end() {
    let g = path_graph(5);
    assert_eq!(shortest_path(&g, 0, 4), Some(vec![0, 1, 2, 3, 4]));
}

#[test]
fn test_single_edge() {
    let g = path_graph(2);
    assert_eq!(shortest_path(&g, 1, 0), Some(vec![1, 0]));
}

#[test]
fn test_source_equals_destination() {
    let g = path_graph(3);
    assert_eq!(shortest_path(&g, 2, 2), Some(vec![2]));
}

#[test]
fn test_disconnected_returns_none() {
    let mut g = Graph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(2, 3).unwrap();
    assert_eq!(shortest_path(&g, 0, 3), None);
}

#[test]
fn test_shortcut_beats_detour() {
    // 0-1-2-3 plus a chord 0-3.
    let mut g = path_graph(4);
    g.add_edge(0, 3).unwrap();
    assert_eq!(shortest_path(&g, 0, 3), Some(vec![0, 3]));
}

#[test]
fn test_tie_break_follows_insertion_order() {
    // Diamond: two routes of length 2 from 0 to 3. The route through the
    // first-inserted neighbor of 0 wins.
    let mut g = Graph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    g.add_edge(2, 3).unwrap();
    assert_eq!(shortest_path(&g, 0, 3), Some(vec![0, 1, 3]));
}

#[test]
fn test_consecutive_path_vertices_are_adjacent() {
    let mut g = Graph::new(6);
    for &(u, v) in &[(0, 1), (1, 2), (0, 3), (3, 4), (4, 5), (2, 5)] {
        g.add_edge(u, v).unwrap();
    }
    let path = shortest_path(&g, 0, 5).unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&5));
    for pair in path.windows(2) {
        assert!(g.neighbors(pair[0]).contains(&pair[1]));
    }
    // Both routes have length 3; distance must match exhaustive BFS.
    assert_eq!(path.len(), 4);
}

#[test]
fn test_parallel_adjacency_entries_are_tolerated() {
    // Duplicate add_edge calls leave parallel entries; BFS must still
    // terminate and find the same path.
    let mut g = Graph::new(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    assert_eq!(shortest_path(&g, 0, 2), Some(vec![0, 1, 2]));
}
