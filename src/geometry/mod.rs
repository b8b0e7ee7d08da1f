//! Planar geometry: positions, segment predicates, obstacles and their shadows.

pub mod obstacle;
pub mod position;
pub mod segment;
pub mod shadow;
pub mod vertex;

pub use obstacle::Obstacle;
pub use position::Position;
pub use segment::Orientation;
pub use shadow::ShadowArea;
pub use vertex::Vertex;
