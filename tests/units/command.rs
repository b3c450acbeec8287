use minicover::solver::{CoverSolver, SolverConfig};

#[test]
fn test_star_graph_script() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 3\nE {<0,1>,<0,2>}").unwrap();
    assert_eq!(out.as_deref(), Some("0\n"));
}

#[test]
fn test_path_graph_script() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 3\nE {<0,1>,<1,2>}").unwrap();
    assert_eq!(out.as_deref(), Some("1\n"));
}

#[test]
fn test_five_vertex_script() {
    let mut solver = CoverSolver::new();
    let out = solver
        .run_script("V 5\nE {<0,3>,<0,4>,<4,1>,<3,2>,<3,1>,<3,4>}")
        .unwrap();
    assert_eq!(out.as_deref(), Some("3 4\n"));
}

#[test]
fn test_cover_then_shortest_path() {
    let mut solver = CoverSolver::new();
    let out = solver
        .run_script("V 5\nE {<0,1>,<1,2>,<2,3>,<3,4>}\ns 0 4")
        .unwrap();
    assert_eq!(out.as_deref(), Some("1 3\n0-1-2-3-4\n"));
}

#[test]
fn test_path_query_with_equal_endpoints() {
    let mut solver = CoverSolver::new();
    solver.run_script("V 3\nE {<0,1>,<1,2>}").unwrap();
    let out = solver.run_line("s 2 2").unwrap();
    assert_eq!(out.as_deref(), Some("2\n"));
}

#[test]
fn test_no_path_is_an_error() {
    let mut solver = CoverSolver::new();
    solver.run_script("V 4\nE {<0,1>,<2,3>}").unwrap();
    assert!(solver.run_line("s 0 3").is_err());
}

#[test]
fn test_path_out_of_bounds_is_an_error() {
    let mut solver = CoverSolver::new();
    solver.run_script("V 3\nE {<0,1>}").unwrap();
    assert!(solver.run_line("s 0 5").is_err());
}

#[test]
fn test_path_query_requires_captured_edges() {
    let mut solver = CoverSolver::new();
    solver.run_line("V 3").unwrap();
    assert!(solver.run_line("s 0 1").is_err());
}

#[test]
fn test_duplicate_edges_collapse_to_one() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 3\nE {<0,1>,<1,0>,<0,1>}").unwrap();
    // One logical edge; either endpoint is a minimum cover.
    let text = out.unwrap();
    assert!(text == "0\n" || text == "1\n");
}

#[test]
fn test_self_loops_are_dropped() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 3\nE {<1,1>,<0,1>,<2,2>}").unwrap();
    let text = out.unwrap();
    assert!(text == "0\n" || text == "1\n");
}

#[test]
fn test_empty_edge_set_reports_one_vertex() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 3\nE {}").unwrap();
    let text = out.unwrap();
    assert_eq!(text.trim().split(' ').count(), 1);
}

#[test]
fn test_edges_before_vertices_is_an_error() {
    let mut solver = CoverSolver::new();
    assert!(solver.run_line("E {<0,1>}").is_err());
}

#[test]
fn test_vertex_count_below_two_is_an_error() {
    let mut solver = CoverSolver::new();
    assert!(solver.run_line("V 1").is_err());
    assert!(solver.run_line("V 0").is_err());
}

#[test]
fn test_second_edge_set_requires_a_new_vertex_command() {
    let mut solver = CoverSolver::new();
    solver.run_script("V 3\nE {<0,1>}").unwrap();
    assert!(solver.run_line("E {<1,2>}").is_err());
    // A fresh V recovers.
    solver.run_line("V 3").unwrap();
    let out = solver.run_line("E {<1,2>}").unwrap();
    assert!(out.is_some());
}

#[test]
fn test_out_of_bounds_edge_fails_the_whole_command() {
    let mut solver = CoverSolver::new();
    solver.run_line("V 3").unwrap();
    assert!(solver.run_line("E {<0,1>,<0,5>}").is_err());
    // Nothing was captured; submitting a valid set still works.
    let out = solver.run_line("E {<0,1>}").unwrap();
    assert!(out.is_some());
}

#[test]
fn test_blank_lines_are_ignored() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("\nV 3\n\nE {<0,1>,<1,2>}\n\n").unwrap();
    assert_eq!(out.as_deref(), Some("1\n"));
}

#[test]
fn test_invalid_command_is_an_error() {
    let mut solver = CoverSolver::new();
    assert!(solver.run_line("Q 3").is_err());
    assert!(solver.run_line("V x").is_err());
    assert!(solver.run_line("E 0,1").is_err());
    assert!(solver.run_line("s 0").is_err());
}

#[test]
fn test_check_cover_config_passes_on_valid_input() {
    let mut solver = CoverSolver::new_with_config(SolverConfig::checked());
    let out = solver.run_script("V 4\nE {<0,1>,<1,2>,<2,3>,<3,0>}").unwrap();
    let text = out.unwrap();
    assert!(text == "0 2\n" || text == "1 3\n");
}

#[test]
fn test_script_with_no_output() {
    let mut solver = CoverSolver::new();
    let out = solver.run_script("V 4\n").unwrap();
    assert_eq!(out, None);
}
