use anyhow::Result;
use tracing::trace;

pub mod cnf;
pub mod command;
pub mod config;
pub mod encode;
pub mod graph;
pub mod path;
pub mod sat;
pub mod search;

pub use config::SolverConfig;

use command::Engine;

/// Public facade over the command engine: feed it input lines, get back the
/// output text each command produces.
pub struct CoverSolver {
    engine: Engine,
}

impl CoverSolver {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    pub fn new_with_config(config: SolverConfig) -> Self {
        Self {
            engine: Engine::new_with_config(config),
        }
    }

    /// Evaluates a single input line. Blank lines produce no output.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>> {
        match command::parse_line(line)? {
            None => Ok(None),
            Some(cmd) => self.engine.eval(cmd),
        }
    }

    // Returns the accumulated output of all lines, if any produced output
    pub fn run_script(&mut self, input: &str) -> Result<Option<String>> {
        trace!(len = input.len(), "running script");
        let mut accumulated_output = String::new();
        let mut has_output = false;
        for line in input.lines() {
            if let Some(out) = self.run_line(line)? {
                accumulated_output.push_str(&out);
                has_output = true;
            }
        }
        if has_output {
            Ok(Some(accumulated_output))
        } else {
            Ok(None)
        }
    }
}

impl Default for CoverSolver {
    fn default() -> Self {
        Self::new()
    }
}
