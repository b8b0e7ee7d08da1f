//! Traits defining visibility generation operations for dependency inversion

use crate::errors::VisibilityError;
use crate::geometry::Vertex;
use crate::graph::{VertexId, VisibilityConfig};
use crate::index::ObstacleIndex;

/// Core visibility operations trait - runs the per-vertex search over a vertex set
pub trait VisibilityOps {
    /// For every vertex, in vertex order, its visible neighbors partitioned into bins.
    fn visibility_bins(
        &self,
        vertices: &[Vertex],
        index: &ObstacleIndex,
        config: &VisibilityConfig,
    ) -> Result<Vec<Vec<Vec<VertexId>>>, VisibilityError>;
}
