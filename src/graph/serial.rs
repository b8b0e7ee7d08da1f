//! Serial implementation of visibility generation.

use super::search::visibility_neighbors;
use super::traits::VisibilityOps;
use crate::errors::VisibilityError;
use crate::geometry::Vertex;
use crate::graph::{VertexId, VisibilityConfig};
use crate::index::ObstacleIndex;
use log::debug;

/// Serial implementation of `VisibilityOps`.
pub struct SerialVisibilityOps;

impl Default for SerialVisibilityOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialVisibilityOps {
    pub const fn new() -> Self {
        Self
    }
}

impl VisibilityOps for SerialVisibilityOps {
    fn visibility_bins(
        &self,
        vertices: &[Vertex],
        index: &ObstacleIndex,
        config: &VisibilityConfig,
    ) -> Result<Vec<Vec<Vec<VertexId>>>, VisibilityError> {
        let interval = config.progress_interval(vertices.len());
        let mut result = Vec::with_capacity(vertices.len());

        for vertex_id in 0..vertices.len() {
            result.push(visibility_neighbors(vertex_id, vertices, index, config)?);

            let done = vertex_id + 1;
            if done % interval == 0 {
                debug!(
                    "Visibility progress: {}/{} vertices ({}%)",
                    done,
                    vertices.len(),
                    done * 100 / vertices.len()
                );
            }
        }

        Ok(result)
    }
}
