//! CNF encoding of "the graph has a vertex cover of size k".
//!
//! The encoding uses n*k variables x[r][i] meaning "vertex r occupies cover
//! position i". Three clause families force any satisfying assignment to
//! pick exactly k distinct vertices (one per position), and a fourth forces
//! every edge to have a selected endpoint. Position slots are what let the
//! pairwise families pin the cardinality to exactly k without a dedicated
//! cardinality constraint.

use tracing::trace;

use super::cnf::{BoolLit, Cnf};
use super::graph::EdgeSet;

/// The CNF instance for one (vertex_count, k) pair together with the
/// variable layout needed to decode a model. Built fresh per k; literal
/// indices from different k values are never comparable.
#[derive(Debug, Clone)]
pub struct CoverEncoding {
    vertex_count: usize,
    k: usize,
    cnf: Cnf,
}

impl CoverEncoding {
    /// Emits all four clause families for a cover of size `k` over
    /// `vertex_count` vertices. Expects `1 <= k <= vertex_count`.
    pub fn new(vertex_count: usize, k: usize, edges: &EdgeSet) -> Self {
        let mut cnf = Cnf::new();
        // Row-major layout: x[r][i] lives at variable index r*k + i.
        cnf.new_vars(vertex_count * k);
        let mut enc = Self {
            vertex_count,
            k,
            cnf,
        };
        enc.emit_position_coverage();
        enc.emit_one_position_per_vertex();
        enc.emit_one_vertex_per_position();
        enc.emit_edge_coverage(edges);
        trace!(
            vertex_count,
            k,
            num_clauses = enc.cnf.num_clauses(),
            "cover encoding built"
        );
        enc
    }

    /// Literal for "vertex `r` occupies cover position `i`".
    fn lit(&self, r: usize, i: usize) -> BoolLit {
        BoolLit::positive(r * self.k + i)
    }

    /// Family 1: every position is occupied by some vertex.
    fn emit_position_coverage(&mut self) {
        for i in 0..self.k {
            let clause: Vec<BoolLit> = (0..self.vertex_count).map(|r| self.lit(r, i)).collect();
            self.cnf.add_clause(clause);
        }
    }

    /// Family 2: no vertex occupies two positions.
    fn emit_one_position_per_vertex(&mut self) {
        for m in 0..self.vertex_count {
            for q in 1..self.k {
                for p in 0..q {
                    self.cnf
                        .add_clause([self.lit(m, p).negate(), self.lit(m, q).negate()]);
                }
            }
        }
    }

    /// Family 3: no position holds two vertices.
    fn emit_one_vertex_per_position(&mut self) {
        for m in 0..self.k {
            for q in 1..self.vertex_count {
                for p in 0..q {
                    self.cnf
                        .add_clause([self.lit(p, m).negate(), self.lit(q, m).negate()]);
                }
            }
        }
    }

    /// Family 4: each edge has an endpoint occupying some position. The
    /// clause collects both endpoints' position literals; a literal that is
    /// already present is skipped, keyed by identity, so no clause ever
    /// carries a duplicate.
    fn emit_edge_coverage(&mut self, edges: &EdgeSet) {
        for (u, v) in edges.iter() {
            let mut clause: Vec<BoolLit> = Vec::with_capacity(2 * self.k);
            for i in 0..self.k {
                for endpoint in [u, v] {
                    let lit = self.lit(endpoint, i);
                    if !clause.contains(&lit) {
                        clause.push(lit);
                    }
                }
            }
            self.cnf.add_clause(clause);
        }
    }

    pub fn cnf(&self) -> &Cnf {
        &self.cnf
    }

    /// Reads the selected cover out of a satisfying model: vertex `r` is in
    /// the cover iff it occupies any position. Ascending by construction.
    pub fn decode(&self, model: &[bool]) -> Vec<usize> {
        (0..self.vertex_count)
            .filter(|&r| (0..self.k).any(|i| model[r * self.k + i]))
            .collect()
    }
}
