//! Parallel implementation of visibility generation.

use super::search::visibility_neighbors;
use super::traits::VisibilityOps;
use crate::errors::VisibilityError;
use crate::geometry::Vertex;
use crate::graph::{VertexId, VisibilityConfig};
use crate::index::ObstacleIndex;
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Parallel implementation of `VisibilityOps`.
///
/// Every worker owns its shadow cache and sector lists; the vertex list and the
/// obstacle index are shared read-only.
pub struct ParallelVisibilityOps;

impl Default for ParallelVisibilityOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelVisibilityOps {
    pub const fn new() -> Self {
        Self
    }
}

impl VisibilityOps for ParallelVisibilityOps {
    fn visibility_bins(
        &self,
        vertices: &[Vertex],
        index: &ObstacleIndex,
        config: &VisibilityConfig,
    ) -> Result<Vec<Vec<Vec<VertexId>>>, VisibilityError> {
        let interval = config.progress_interval(vertices.len());
        let processed = AtomicUsize::new(0);

        (0..vertices.len())
            .into_par_iter()
            .map(|vertex_id| {
                let bins = visibility_neighbors(vertex_id, vertices, index, config);

                // sampled, never waits on other workers
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % interval == 0 {
                    debug!(
                        "Visibility progress: {}/{} vertices ({}%)",
                        done,
                        vertices.len(),
                        done * 100 / vertices.len()
                    );
                }
                bins
            })
            .collect()
    }
}
