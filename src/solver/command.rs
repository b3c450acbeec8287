//! Line-command frontend: parsing and the input state machine.
//!
//! Three commands, one per line. `V n` starts a fresh graph, `E {...}`
//! submits the edge set and reports the minimum vertex cover, `s a b`
//! queries a shortest path. Edges may only follow a vertex count, and a new
//! vertex count is required before a second edge set.

use anyhow::{bail, Context, Result};
use tracing::{debug, trace};

use super::config::SolverConfig;
use super::graph::{EdgeSet, Graph};
use super::path::shortest_path;
use super::search::find_minimum_cover;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `V n`: rebuild the graph with `n` vertices, dropping all edges.
    Vertices(usize),
    /// `E {<a,b>,...}`: submit the edge set and compute the minimum cover.
    Edges(Vec<(usize, usize)>),
    /// `s a b`: shortest path from `a` to `b`.
    Path(usize, usize),
}

/// Parses one input line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    trace!(head, rest, "parse command");
    match head {
        "V" => {
            let n = rest
                .parse::<usize>()
                .context("V needs a non-negative vertex count")?;
            Ok(Some(Command::Vertices(n)))
        }
        "E" => Ok(Some(Command::Edges(parse_edge_list(rest)?))),
        "s" => {
            let mut parts = rest.split_whitespace();
            let a = parts
                .next()
                .context("s needs a source vertex")?
                .parse::<usize>()
                .context("source must be a non-negative integer")?;
            let b = parts
                .next()
                .context("s needs a destination vertex")?
                .parse::<usize>()
                .context("destination must be a non-negative integer")?;
            if parts.next().is_some() {
                bail!("s takes exactly two vertices");
            }
            Ok(Some(Command::Path(a, b)))
        }
        _ => bail!("invalid command '{}'", head),
    }
}

/// Parses `{<a,b>,<c,d>,...}` into pairs, `{}` into none. Pairs are taken
/// as written; self-loop and duplicate handling happens at evaluation.
fn parse_edge_list(text: &str) -> Result<Vec<(usize, usize)>> {
    let inner = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .context("E needs an edge set wrapped in '{' and '}'")?
        .trim();
    let mut pairs = Vec::new();
    let mut rest = inner;
    while !rest.is_empty() {
        let after_open = rest
            .trim_start()
            .strip_prefix('<')
            .context("expected '<' to open an edge")?;
        let (body, tail) = after_open
            .split_once('>')
            .context("expected '>' to close an edge")?;
        let (a, b) = body.split_once(',').context("an edge is a '<u,v>' pair")?;
        let u = a
            .trim()
            .parse::<usize>()
            .context("edge endpoint must be a non-negative integer")?;
        let v = b
            .trim()
            .parse::<usize>()
            .context("edge endpoint must be a non-negative integer")?;
        pairs.push((u, v));
        rest = match tail.trim_start().strip_prefix(',') {
            Some(next) => next,
            None => {
                if !tail.trim().is_empty() {
                    bail!("edges must be separated by ','");
                }
                ""
            }
        };
    }
    Ok(pairs)
}

/// Input progress. Edge submission requires `VerticesSet`; path queries
/// require `EdgesCaptured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputState {
    Empty,
    VerticesSet,
    EdgesCaptured,
}

/// Evaluates commands against the current graph. The graph and edge set are
/// only ever handed to the core in the `EdgesCaptured` state.
pub struct Engine {
    state: InputState,
    graph: Graph,
    edges: EdgeSet,
    config: SolverConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::new_with_config(SolverConfig::default())
    }

    pub fn new_with_config(config: SolverConfig) -> Self {
        Self {
            state: InputState::Empty,
            graph: Graph::default(),
            edges: EdgeSet::new(),
            config,
        }
    }

    /// Runs one command. Returns the output text for commands that produce
    /// any; errors leave the graph in a state where a fresh `V` recovers.
    pub fn eval(&mut self, cmd: Command) -> Result<Option<String>> {
        trace!(?cmd, state = ?self.state, "engine eval");
        match cmd {
            Command::Vertices(n) => {
                if n < 2 {
                    bail!("the set of vertices needs at least 2 elements");
                }
                self.graph.resize(n);
                self.edges.clear();
                self.state = InputState::VerticesSet;
                Ok(None)
            }
            Command::Edges(pairs) => {
                match self.state {
                    InputState::Empty => bail!("the number of vertices must be inputted first"),
                    InputState::EdgesCaptured => bail!(
                        "the set of edges has already been captured; enter a new vertex command first"
                    ),
                    InputState::VerticesSet => {}
                }
                // Validate every pair before touching the graph so a bad
                // one cannot leave a half-built edge set behind.
                for &(u, v) in &pairs {
                    if u != v && !self.graph.in_bounds(u, v) {
                        bail!(
                            "edge <{},{}> is out of bounds for a graph with {} vertices",
                            u,
                            v,
                            self.graph.vertex_count()
                        );
                    }
                }
                for (u, v) in pairs {
                    // Self-loops are dropped, duplicates in either
                    // orientation collapse to the first occurrence.
                    if self.edges.insert(u, v) {
                        self.graph.add_edge(u, v)?;
                    }
                }
                self.state = InputState::EdgesCaptured;
                debug!(
                    vertex_count = self.graph.vertex_count(),
                    num_edges = self.edges.len(),
                    "edge set captured"
                );
                let cover = find_minimum_cover(&self.graph, &self.edges, &self.config)?;
                Ok(Some(format_cover(&cover)))
            }
            Command::Path(a, b) => {
                if self.state != InputState::EdgesCaptured {
                    bail!("not enough information provided for graph input");
                }
                if !self.graph.in_bounds(a, b) {
                    bail!("the vertices specified are not in the graph");
                }
                match shortest_path(&self.graph, a, b) {
                    Some(p) => Ok(Some(format_path(&p))),
                    None => bail!("no path exists between {} and {}", a, b),
                }
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn format_cover(cover: &[usize]) -> String {
    let mut out = cover
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

fn format_path(path: &[usize]) -> String {
    let mut out = path
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("-");
    out.push('\n');
    out
}
