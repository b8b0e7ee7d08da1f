//! Side channel of a generation run: edge geometry and non-fatal warnings.

use crate::float_types::Real;
use crate::geometry::Position;
use geo::{LineString, MultiLineString};
use std::fmt;

/// Something worth reporting that did not stop the generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationWarning {
    /// (IsolatedVertex) A vertex sees no other vertex at all
    IsolatedVertex(Position),
    /// (HiddenObstacleEdge) An obstacle edge runs through or along another closed obstacle
    HiddenObstacleEdge { from: Position, to: Position },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::IsolatedVertex(position) => {
                write!(f, "(IsolatedVertex) Vertex at {} has no visibility neighbors", position)
            },
            GenerationWarning::HiddenObstacleEdge { from, to } => {
                write!(f, "(HiddenObstacleEdge) Edge {} -> {} is hidden by another obstacle", from, to)
            },
        }
    }
}

/// Line geometry of every obstacle-neighbor and visibility-neighbor relation,
/// one two-point line string per directed edge.
#[derive(Debug, Clone)]
pub struct DiagnosticLines {
    pub obstacle_neighbors: MultiLineString<Real>,
    pub visibility_neighbors: MultiLineString<Real>,
}

pub(crate) fn segment(from: Position, to: Position) -> LineString<Real> {
    LineString::new(vec![from.to_coord(), to.to_coord()])
}
