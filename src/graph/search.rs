//! Bounded nearest-visible-neighbor search for a single vertex.

use crate::angle;
use crate::errors::VisibilityError;
use crate::float_types::Real;
use crate::geometry::{Position, ShadowArea, Vertex};
use crate::graph::{VertexId, VisibilityConfig, bins};
use crate::index::{BinIndex, ObstacleId, ObstacleIndex};
use geo::Rect;
use hashbrown::HashMap;
use log::trace;

/// Shadows cast on one source vertex, with a coarse angular index over them.
struct ShadowCache {
    index: BinIndex<usize>,
    shadows: Vec<ShadowArea>,
    by_obstacle: HashMap<ObstacleId, Option<usize>>,
}

impl ShadowCache {
    fn new() -> Self {
        Self {
            index: BinIndex::angular(),
            shadows: Vec::new(),
            by_obstacle: HashMap::new(),
        }
    }

    fn covers(&self, bearing: Real, distance: Real) -> Result<bool, VisibilityError> {
        Ok(self
            .index
            .query(bearing)?
            .iter()
            .any(|&shadow| self.shadows[shadow].covers(bearing, distance)))
    }

    /// The shadow of `obstacle_id`, computing and registering it on first sight.
    fn shadow_of(
        &mut self,
        obstacle_id: ObstacleId,
        index: &ObstacleIndex,
        source: &Position,
    ) -> Result<Option<ShadowArea>, VisibilityError> {
        if let Some(known) = self.by_obstacle.get(&obstacle_id) {
            return Ok(known.map(|i| self.shadows[i]));
        }
        let shadow = index
            .get(obstacle_id)
            .and_then(|obstacle| obstacle.shadow_area(source));
        let slot = match shadow {
            Some(shadow) => {
                let slot = self.shadows.len();
                self.index.add(shadow.from, shadow.to, slot)?;
                self.shadows.push(shadow);
                Some(slot)
            },
            None => None,
        };
        self.by_obstacle.insert(obstacle_id, slot);
        Ok(shadow)
    }
}

fn sector_of(bearing: Real, sector_width: Real, sector_count: usize) -> usize {
    let sector = (bearing / sector_width) as usize;
    if sector >= sector_count { 0 } else { sector }
}

/// Up to `neighbors_per_bin` nearest visible vertices per angular sector around
/// `vertices[vertex_id]`, re-partitioned by its obstacle-local neighbors.
pub fn visibility_neighbors(
    vertex_id: VertexId,
    vertices: &[Vertex],
    index: &ObstacleIndex,
    config: &VisibilityConfig,
) -> Result<Vec<Vec<VertexId>>, VisibilityError> {
    let Some(vertex) = vertices.get(vertex_id) else {
        return Ok(vec![Vec::new()]);
    };
    let origin = vertex.position;
    let own = index.obstacles_at(&origin);
    let sector_width = config.sector_width();
    let per_sector = config.neighbors_per_bin;

    let mut shadows = ShadowCache::new();
    let mut sectors: Vec<Vec<(Real, VertexId)>> = vec![Vec::new(); config.neighbor_bin_count];

    for (other_id, other) in vertices.iter().enumerate() {
        if other_id == vertex_id {
            continue;
        }
        let target = other.position;
        let bearing = origin.bearing_to(&target);
        let distance = origin.distance(&target);
        if bearing.is_nan() || distance.is_nan() {
            continue;
        }

        let sector = sector_of(bearing, sector_width, config.neighbor_bin_count);
        if sectors[sector].len() >= per_sector && sectors[sector].last().is_some_and(|(worst, _)| distance >= *worst) {
            continue;
        }
        if shadows.covers(bearing, distance)? {
            continue;
        }

        let envelope = Rect::new(origin.to_coord(), target.to_coord());
        let mut visible = true;
        for (obstacle_id, _) in index.intersecting(&envelope) {
            if !own.contains(&obstacle_id) {
                if let Some(shadow) = shadows.shadow_of(obstacle_id, index, &origin)? {
                    if shadow.covers(bearing, distance) {
                        visible = false;
                        break;
                    }
                    if !angle::is_between_equal(shadow.from, bearing, shadow.to) {
                        // the obstacle lies entirely beside this line of sight
                        continue;
                    }
                }
            }
            if index.segment_blocked_by(obstacle_id, origin, target) {
                visible = false;
                break;
            }
        }
        if !visible {
            continue;
        }

        let bucket = &mut sectors[sector];
        let at = bucket.partition_point(|(d, _)| *d <= distance);
        bucket.insert(at, (distance, other_id));
        bucket.truncate(per_sector);
    }

    let visible: Vec<(VertexId, Position)> = sectors
        .into_iter()
        .flatten()
        .map(|(_, id)| (id, vertices[id].position))
        .collect();
    trace!("Vertex {} at {} sees {} vertices", vertex_id, origin, visible.len());

    Ok(bins::sort_into_bins(origin, vertex.obstacle_neighbors(), &visible))
}
