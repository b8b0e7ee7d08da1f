//! Obstacle-local neighbor extraction.
//!
//! Every distinct obstacle coordinate becomes one [`Vertex`]. Its local neighbors
//! are the coordinates directly before and after it on each obstacle it belongs
//! to, minus edges that another closed obstacle hides.

use crate::geometry::{Position, Vertex};
use crate::graph::VertexId;
use crate::index::ObstacleIndex;
use hashbrown::HashMap;
use log::debug;

/// Result of the extraction pass.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Vertices in order of first appearance over the obstacles.
    pub vertices: Vec<Vertex>,
    pub lookup: HashMap<Position, VertexId>,
    /// For each obstacle, its vertices in chain order.
    pub obstacle_vertices: Vec<Vec<VertexId>>,
    /// Obstacle edges dropped because another closed obstacle hides them.
    pub hidden_edges: Vec<(Position, Position)>,
}

pub fn extract_vertices(index: &ObstacleIndex) -> Extraction {
    let mut positions: Vec<Position> = Vec::new();
    let mut neighbors: Vec<Vec<Position>> = Vec::new();
    let mut lookup: HashMap<Position, VertexId> = HashMap::new();
    let mut obstacle_vertices: Vec<Vec<VertexId>> = Vec::with_capacity(index.len());
    let mut hidden_edges: Vec<(Position, Position)> = Vec::new();

    for (obstacle_id, obstacle) in index.iter() {
        let mut owned: Vec<VertexId> = Vec::with_capacity(obstacle.len());
        for (i, coordinate) in obstacle.coordinates().iter().enumerate() {
            let vertex_id = *lookup.entry(*coordinate).or_insert_with(|| {
                positions.push(*coordinate);
                neighbors.push(Vec::new());
                positions.len() - 1
            });
            if !owned.contains(&vertex_id) {
                owned.push(vertex_id);
            }

            let (previous, next) = obstacle.adjacent(i);
            for adjacent in [previous, next].into_iter().flatten() {
                if index.edge_hidden(obstacle_id, *coordinate, adjacent) {
                    hidden_edges.push((*coordinate, adjacent));
                } else {
                    neighbors[vertex_id].push(adjacent);
                }
            }
        }
        obstacle_vertices.push(owned);
    }

    let vertices: Vec<Vertex> = positions
        .into_iter()
        .zip(neighbors)
        .map(|(position, adjacent)| Vertex::new(position, adjacent))
        .collect();

    debug!(
        "Extracted {} vertices from {} obstacles ({} hidden edge ends)",
        vertices.len(),
        index.len(),
        hidden_edges.len()
    );

    Extraction {
        vertices,
        lookup,
        obstacle_vertices,
        hidden_edges,
    }
}
