//! Spatial index over obstacle envelopes.
//!
//! Uses an R-tree to answer "which obstacles can block this segment" and a
//! coordinate table to answer "which obstacles own this vertex".

use crate::float_types::Real;
use crate::geometry::{Obstacle, Position};
use geo::Rect;
use hashbrown::HashMap;
use rstar::{AABB, RTree, RTreeObject};

pub type ObstacleId = usize;

/// An obstacle envelope stored in the R-tree.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexedObstacle {
    id: ObstacleId,
    envelope: AABB<[Real; 2]>,
}

impl IndexedObstacle {
    fn new(id: ObstacleId, obstacle: &Obstacle) -> Self {
        let rect = obstacle.envelope();
        Self {
            id,
            envelope: AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
        }
    }
}

impl RTreeObject for IndexedObstacle {
    type Envelope = AABB<[Real; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Immutable obstacle set with envelope and coordinate lookups.
#[derive(Clone)]
pub struct ObstacleIndex {
    obstacles: Vec<Obstacle>,
    tree: RTree<IndexedObstacle>,
    by_coordinate: HashMap<Position, Vec<ObstacleId>>,
}

impl ObstacleIndex {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        let indexed: Vec<IndexedObstacle> = obstacles
            .iter()
            .enumerate()
            .map(|(id, obstacle)| IndexedObstacle::new(id, obstacle))
            .collect();

        let mut by_coordinate: HashMap<Position, Vec<ObstacleId>> = HashMap::new();
        for (id, obstacle) in obstacles.iter().enumerate() {
            for coordinate in obstacle.coordinates() {
                let owners = by_coordinate.entry(*coordinate).or_default();
                if owners.last() != Some(&id) {
                    owners.push(id);
                }
            }
        }

        Self {
            obstacles,
            tree: RTree::bulk_load(indexed),
            by_coordinate,
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.obstacles.iter().enumerate()
    }

    /// Obstacles having `position` as one of their coordinates, in id order.
    pub fn obstacles_at(&self, position: &Position) -> &[ObstacleId] {
        self.by_coordinate
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Obstacles with at least one edge whose envelope intersects `rect`.
    pub fn intersecting(&self, rect: &Rect<Real>) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        let envelope = AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(move |indexed| (indexed.id, &self.obstacles[indexed.id]))
            .filter(move |(_, obstacle)| obstacle.can_intersect(rect))
    }

    /// Another closed obstacle than `owner` has `a..b` as one of its sides.
    ///
    /// Two closed obstacles sharing a side enclose it, so nothing may travel along it.
    pub fn is_shared_closed_edge(&self, owner: ObstacleId, a: Position, b: Position) -> bool {
        self.obstacles_at(&a).iter().any(|&id| {
            id != owner && self.obstacles[id].is_closed() && self.obstacles[id].has_line_segment(a, b)
        })
    }

    /// Whether obstacle `id` blocks the straight segment `a..b`.
    ///
    /// A side of the obstacle itself is only blocked when another closed obstacle
    /// shares it.
    pub fn segment_blocked_by(&self, id: ObstacleId, a: Position, b: Position) -> bool {
        let Some(obstacle) = self.obstacles.get(id) else {
            return false;
        };
        if obstacle.has_line_segment(a, b) {
            self.is_shared_closed_edge(id, a, b)
        } else {
            obstacle.occludes_segment(a, b)
        }
    }

    /// Whether the edge `a..b` of obstacle `owner` is hidden by some other closed
    /// obstacle: either shared with it, or running through it.
    pub fn edge_hidden(&self, owner: ObstacleId, a: Position, b: Position) -> bool {
        if self.is_shared_closed_edge(owner, a, b) {
            return true;
        }
        let rect = Rect::new(a.to_coord(), b.to_coord());
        self.intersecting(&rect).any(|(id, obstacle)| {
            id != owner && obstacle.is_closed() && !obstacle.has_line_segment(a, b) && obstacle.occludes_segment(a, b)
        })
    }
}

impl FromIterator<Obstacle> for ObstacleIndex {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
