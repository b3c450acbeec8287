use anyhow::Result;
use tracing::debug;
use varisat::cnf::CnfFormula;
use varisat::lit::Lit;
use varisat::solver::Solver;
use varisat::ExtendFormula;

use super::cnf::{BoolLit, Cnf};

/// Runs one blocking solve pass over `c` on a fresh solver instance.
///
/// Returns the model as one truth value per allocated variable when the
/// formula is satisfiable, `None` when it is not. The solver instance is
/// dropped when this returns; nothing is carried across calls.
pub fn solve_cnf(c: &Cnf) -> Result<Option<Vec<bool>>> {
    let mut solver = Solver::new();
    let mut f = CnfFormula::new();
    debug!(
        num_clauses = c.num_clauses(),
        num_vars = c.num_vars,
        "solve_cnf start"
    );
    for cl in &c.clauses {
        let lits: Vec<Lit> = cl.iter().map(to_varisat).collect();
        f.add_clause(&lits);
    }
    solver.add_formula(&f);
    if solver.solve().expect("solve") {
        let model = solver.model().expect("model");
        let mut vals = vec![false; c.num_vars];
        for lit in model {
            let d = lit.to_dimacs();
            let var = d.unsigned_abs() as usize - 1;
            if var < vals.len() {
                vals[var] = d > 0;
            }
        }
        debug!("solve_cnf: SAT");
        Ok(Some(vals))
    } else {
        debug!("solve_cnf: UNSAT");
        Ok(None)
    }
}

/// varisat variables are 1-based on the DIMACS side; ours are 0-based.
fn to_varisat(&BoolLit(var_idx, pol): &BoolLit) -> Lit {
    let dim = if pol {
        (var_idx as isize) + 1
    } else {
        -((var_idx as isize) + 1)
    };
    Lit::from_dimacs(dim)
}
