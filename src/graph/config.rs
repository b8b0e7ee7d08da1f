use crate::errors::VisibilityError;
use crate::float_types::{FULL_CIRCLE, Real};

/// Parameters of a visibility graph generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityConfig {
    /// Number of fixed-width angular sectors used to bound the neighbor search.
    pub neighbor_bin_count: usize,
    /// Nearest visible neighbors kept per sector.
    pub neighbors_per_bin: usize,
    /// Also produce line geometry of every edge, see [`DiagnosticLines`](super::DiagnosticLines).
    pub collect_diagnostics: bool,
    /// How many progress checkpoints are logged over a run.
    pub progress_steps: usize,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            neighbor_bin_count: 36,
            neighbors_per_bin: 10,
            collect_diagnostics: false,
            progress_steps: 10,
        }
    }
}

impl VisibilityConfig {
    pub const fn with_neighbor_bin_count(mut self, neighbor_bin_count: usize) -> Self {
        self.neighbor_bin_count = neighbor_bin_count;
        self
    }

    pub const fn with_neighbors_per_bin(mut self, neighbors_per_bin: usize) -> Self {
        self.neighbors_per_bin = neighbors_per_bin;
        self
    }

    pub const fn with_diagnostics(mut self, collect_diagnostics: bool) -> Self {
        self.collect_diagnostics = collect_diagnostics;
        self
    }

    pub const fn with_progress_steps(mut self, progress_steps: usize) -> Self {
        self.progress_steps = progress_steps;
        self
    }

    pub fn validate(&self) -> Result<(), VisibilityError> {
        if self.neighbor_bin_count == 0 {
            return Err(VisibilityError::InvalidConfig(
                "neighbor_bin_count must be at least 1".to_string(),
            ));
        }
        if self.neighbors_per_bin == 0 {
            return Err(VisibilityError::InvalidConfig(
                "neighbors_per_bin must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Angular width of one search sector in degrees.
    pub fn sector_width(&self) -> Real {
        FULL_CIRCLE / self.neighbor_bin_count as Real
    }

    /// Vertices processed between two progress checkpoints.
    pub fn progress_interval(&self, vertex_count: usize) -> usize {
        vertex_count.div_ceil(self.progress_steps.max(1)).max(1)
    }
}
