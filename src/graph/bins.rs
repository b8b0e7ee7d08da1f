//! Re-partitioning of visible neighbors by obstacle-local neighbor directions.

use crate::angle;
use crate::float_types::Real;
use crate::geometry::Position;
use crate::graph::VertexId;

/// Sorts `visible` neighbors of the vertex at `origin` into bins delimited by its
/// `obstacle_neighbors` (ordered by bearing).
///
/// Each consecutive pair of local neighbors, wrapping from the last back to the
/// first, delimits one clockwise bin holding the visible neighbors inclusively
/// between them, plus the delimiting neighbors themselves when visible. A bin that
/// holds nothing but its delimiters faces into obstacle geometry and is dropped,
/// unless one of those delimiters appears in no other bin.
///
/// With fewer than two local neighbors, or when no bin holds anything besides its
/// delimiters, a single bin holds every visible neighbor. No visible neighbors at
/// all yields a single empty bin.
pub fn sort_into_bins(
    origin: Position,
    obstacle_neighbors: &[Position],
    visible: &[(VertexId, Position)],
) -> Vec<Vec<VertexId>> {
    let mut sorted: Vec<(Real, VertexId, Position)> = visible
        .iter()
        .map(|(id, position)| (origin.bearing_to(position), *id, *position))
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    let everything = || sorted.iter().map(|(_, id, _)| *id).collect::<Vec<_>>();

    if sorted.is_empty() {
        return vec![Vec::new()];
    }
    if obstacle_neighbors.len() < 2 {
        return vec![everything()];
    }

    let mut candidates: Vec<(Vec<VertexId>, bool)> = Vec::with_capacity(obstacle_neighbors.len());
    for (i, this) in obstacle_neighbors.iter().enumerate() {
        let next = &obstacle_neighbors[(i + 1) % obstacle_neighbors.len()];
        let from = origin.bearing_to(this);
        let to = origin.bearing_to(next);

        let mut members: Vec<(Real, VertexId, bool)> = sorted
            .iter()
            .filter(|(bearing, _, position)| {
                position == this || position == next || angle::is_between_equal(from, *bearing, to)
            })
            .map(|(bearing, id, position)| {
                let offset = if position == this { 0.0 } else { angle::difference(from, *bearing) };
                (offset, *id, position != this && position != next)
            })
            .collect();
        members.sort_by(|a, b| a.0.total_cmp(&b.0));

        let interior = members.iter().any(|(_, _, interior)| *interior);
        candidates.push((members.into_iter().map(|(_, id, _)| id).collect(), interior));
    }

    if !candidates.iter().any(|(_, interior)| *interior) {
        return vec![everything()];
    }
    let covered: Vec<VertexId> = candidates
        .iter()
        .filter(|(_, interior)| *interior)
        .flat_map(|(bin, _)| bin.iter().copied())
        .collect();
    candidates
        .into_iter()
        .filter(|(bin, interior)| *interior || bin.iter().any(|id| !covered.contains(id)))
        .map(|(bin, _)| bin)
        .collect()
}
