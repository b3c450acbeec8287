/// Configuration options for the cover solver
#[derive(Clone, Debug, Default)]
pub struct SolverConfig {
    /// Verify each reported cover against the edge set after decoding
    pub check_cover: bool,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config with cover checking enabled
    pub fn checked() -> Self {
        Self { check_cover: true }
    }
}
