//! Visibility graph generation.
//!
//! The generator runs in two phases:
//! 1. *Extraction*: every distinct obstacle coordinate becomes a [`Vertex`] with its
//!    obstacle-local neighbors, and the obstacle → vertex table is built.
//! 2. *Search*: for every vertex, the nearest visible vertices per fixed angular
//!    sector are found with shadow culling, then re-partitioned into bins delimited
//!    by the vertex's local neighbors.
//!
//! The search is dispatched through [`VisibilityOps`]; with the `parallel` feature
//! it runs one rayon task per vertex.

pub mod bins;
pub mod config;
pub mod diagnostics;
pub mod neighbors;
pub mod search;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::VisibilityConfig;
pub use diagnostics::{DiagnosticLines, GenerationWarning};
pub use traits::VisibilityOps;

pub use serial::SerialVisibilityOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelVisibilityOps;

use crate::errors::VisibilityError;
use crate::float_types::Real;
use crate::geometry::{Obstacle, Position, Vertex};
use crate::index::{ObstacleId, ObstacleIndex};
use geo::{LineString, MultiLineString};
use hashbrown::HashMap;
use log::info;
use std::time::Instant;

/// Index of a vertex in [`VisibilityGraph::vertices`].
pub type VertexId = usize;

/// Vertices of an obstacle field together with their binned visibility neighbors.
///
/// Visibility may be asymmetric: `a` can list `b` while `b`, whose sector towards
/// `a` was already full of nearer vertices, does not list `a`.
#[derive(Debug, Clone)]
pub struct VisibilityGraph {
    vertices: Vec<Vertex>,
    lookup: HashMap<Position, VertexId>,
    bins: Vec<Vec<Vec<VertexId>>>,
    obstacle_vertices: Vec<Vec<VertexId>>,
    warnings: Vec<GenerationWarning>,
    lines: Option<DiagnosticLines>,
}

impl VisibilityGraph {
    /// Generates the graph for `obstacles`.
    pub fn generate(obstacles: Vec<Obstacle>, config: &VisibilityConfig) -> Result<Self, VisibilityError> {
        let index = ObstacleIndex::new(obstacles);
        Self::from_index(&index, config)
    }

    /// Generates the graph for an already indexed obstacle set.
    pub fn from_index(index: &ObstacleIndex, config: &VisibilityConfig) -> Result<Self, VisibilityError> {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialVisibilityOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelVisibilityOps::new();

        Self::from_index_with(&ops, index, config)
    }

    /// Generates the graph with an explicit [`VisibilityOps`] implementation.
    pub fn from_index_with<O: VisibilityOps>(
        ops: &O,
        index: &ObstacleIndex,
        config: &VisibilityConfig,
    ) -> Result<Self, VisibilityError> {
        config.validate()?;
        let start = Instant::now();
        info!(
            "Generating visibility graph for {} obstacles ({} sectors, {} neighbors per sector)",
            index.len(),
            config.neighbor_bin_count,
            config.neighbors_per_bin
        );

        let extraction = neighbors::extract_vertices(index);
        let bins = ops.visibility_bins(&extraction.vertices, index, config)?;

        let mut warnings: Vec<GenerationWarning> = extraction
            .hidden_edges
            .iter()
            .map(|(from, to)| GenerationWarning::HiddenObstacleEdge { from: *from, to: *to })
            .collect();
        warnings.extend(
            extraction
                .vertices
                .iter()
                .zip(&bins)
                .filter(|(_, vertex_bins)| vertex_bins.iter().all(Vec::is_empty))
                .map(|(vertex, _)| GenerationWarning::IsolatedVertex(vertex.position)),
        );

        let mut graph = Self {
            vertices: extraction.vertices,
            lookup: extraction.lookup,
            bins,
            obstacle_vertices: extraction.obstacle_vertices,
            warnings,
            lines: None,
        };
        if config.collect_diagnostics {
            graph.lines = Some(graph.diagnostic_geometry());
        }

        info!(
            "Generated visibility graph: {} vertices, {} edges, {} warnings in {:?}",
            graph.vertices.len(),
            graph.edge_count(),
            graph.warnings.len(),
            start.elapsed()
        );
        Ok(graph)
    }

    fn diagnostic_geometry(&self) -> DiagnosticLines {
        let obstacle_neighbors: Vec<LineString<Real>> = self
            .vertices
            .iter()
            .flat_map(|v| v.obstacle_neighbors().iter().map(move |n| diagnostics::segment(v.position, *n)))
            .collect();
        let visibility_neighbors: Vec<LineString<Real>> = self
            .vertices
            .iter()
            .zip(&self.bins)
            .flat_map(|(v, vertex_bins)| {
                let mut seen: Vec<VertexId> = vertex_bins.iter().flatten().copied().collect();
                seen.sort_unstable();
                seen.dedup();
                seen.into_iter()
                    .map(|id| diagnostics::segment(v.position, self.vertices[id].position))
                    .collect::<Vec<_>>()
            })
            .collect();
        DiagnosticLines {
            obstacle_neighbors: MultiLineString::new(obstacle_neighbors),
            visibility_neighbors: MultiLineString::new(visibility_neighbors),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertex_id(&self, position: &Position) -> Option<VertexId> {
        self.lookup.get(position).copied()
    }

    /// Binned visible neighbors of vertex `id`.
    pub fn bins(&self, id: VertexId) -> Option<&[Vec<VertexId>]> {
        self.bins.get(id).map(Vec::as_slice)
    }

    /// Binned visible neighbor positions of the vertex at `position`.
    pub fn neighbor_bins(&self, position: &Position) -> Option<Vec<Vec<Position>>> {
        let id = self.vertex_id(position)?;
        Some(
            self.bins[id]
                .iter()
                .map(|bin| bin.iter().map(|n| self.vertices[*n].position).collect())
                .collect(),
        )
    }

    /// All distinct visible neighbor positions of the vertex at `position`.
    pub fn visible_neighbors(&self, position: &Position) -> Option<Vec<Position>> {
        let id = self.vertex_id(position)?;
        let mut ids: Vec<VertexId> = self.bins[id].iter().flatten().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        Some(ids.into_iter().map(|n| self.vertices[n].position).collect())
    }

    /// Vertices of obstacle `id` in chain order.
    pub fn obstacle_vertices(&self, id: ObstacleId) -> Option<&[VertexId]> {
        self.obstacle_vertices.get(id).map(Vec::as_slice)
    }

    /// Number of distinct directed visibility edges.
    pub fn edge_count(&self) -> usize {
        self.bins
            .iter()
            .map(|vertex_bins| {
                let mut ids: Vec<VertexId> = vertex_bins.iter().flatten().copied().collect();
                ids.sort_unstable();
                ids.dedup();
                ids.len()
            })
            .sum()
    }

    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    /// Edge geometry, present when generated with `collect_diagnostics`.
    pub fn diagnostic_lines(&self) -> Option<&DiagnosticLines> {
        self.lines.as_ref()
    }

    /// The graph as a map from each vertex to its bins of neighbor vertices.
    pub fn into_map(self) -> HashMap<Vertex, Vec<Vec<Vertex>>> {
        let vertices = self.vertices;
        vertices
            .iter()
            .zip(self.bins)
            .map(|(vertex, vertex_bins)| {
                let neighbors = vertex_bins
                    .into_iter()
                    .map(|bin| bin.into_iter().map(|n| vertices[n].clone()).collect())
                    .collect();
                (vertex.clone(), neighbors)
            })
            .collect()
    }
}
