use crate::float_types::Real;
use crate::geometry::Position;
use std::hash::{Hash, Hasher};

/// A deduplicated obstacle coordinate together with the positions it can see
/// along its own obstacles' edges.
///
/// Identity (equality and hashing) is the position alone.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Position,
    obstacle_neighbors: Vec<Position>,
}

impl Vertex {
    /// Neighbors are deduplicated and ordered by bearing from `position`.
    pub fn new<I: IntoIterator<Item = Position>>(position: Position, obstacle_neighbors: I) -> Self {
        let mut neighbors: Vec<(Real, Position)> = obstacle_neighbors
            .into_iter()
            .filter(|n| *n != position)
            .map(|n| (position.bearing_to(&n), n))
            .collect();
        neighbors.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut obstacle_neighbors: Vec<Position> = Vec::with_capacity(neighbors.len());
        for (_, n) in neighbors {
            if !obstacle_neighbors.contains(&n) {
                obstacle_neighbors.push(n);
            }
        }

        Self {
            position,
            obstacle_neighbors,
        }
    }

    pub fn obstacle_neighbors(&self) -> &[Position] {
        &self.obstacle_neighbors
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
