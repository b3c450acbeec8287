/// Boolean literal used in CNF clauses.
/// The first field is the zero-based variable index, the second is the polarity (true = positive).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoolLit(pub usize, pub bool);

impl BoolLit {
    pub fn positive(var: usize) -> Self {
        BoolLit(var, true)
    }

    pub fn negated(var: usize) -> Self {
        BoolLit(var, false)
    }

    /// Same variable, flipped polarity.
    pub fn negate(self) -> Self {
        BoolLit(self.0, !self.1)
    }
}

/// A simple CNF container holding clauses and the number of allocated variables.
#[derive(Clone, Debug, Default)]
pub struct Cnf {
    pub clauses: Vec<Vec<BoolLit>>,
    pub num_vars: usize,
}

impl Cnf {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            num_vars: 0,
        }
    }

    pub fn add_clause<I>(&mut self, clause: I)
    where
        I: IntoIterator<Item = BoolLit>,
    {
        self.clauses.push(clause.into_iter().collect());
    }

    pub fn new_var(&mut self) -> usize {
        let idx = self.num_vars;
        self.num_vars += 1;
        idx
    }

    /// Allocates `count` fresh variables, returning the index of the first.
    pub fn new_vars(&mut self, count: usize) -> usize {
        let first = self.num_vars;
        self.num_vars += count;
        first
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
}
