use crate::float_types::Real;
use crate::geometry::Position;
use crate::graph::VertexId;
use std::cmp::Ordering;

/// A candidate arrival of the wavefront at a vertex.
///
/// The wave reached `root` after travelling `distance_to_root_from_source` from the
/// source, and continues in a straight line from `root` to `position`. Events are
/// ordered by `distance_from_source` only, ascending.
#[derive(Debug, Clone, Copy)]
pub struct VertexEvent {
    pub vertex: VertexId,
    pub position: Position,
    pub root: Position,
    pub distance_to_root_from_source: Real,
    pub distance_from_source: Real,
}

impl VertexEvent {
    pub fn new(vertex: VertexId, position: Position, root: Position, distance_to_root_from_source: Real) -> Self {
        Self {
            vertex,
            position,
            root,
            distance_to_root_from_source,
            distance_from_source: distance_to_root_from_source + root.distance(&position),
        }
    }
}

impl PartialEq for VertexEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VertexEvent {}

impl PartialOrd for VertexEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_from_source.total_cmp(&other.distance_from_source)
    }
}
