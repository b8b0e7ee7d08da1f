//! Spatial and angular indices.
//!
//! [`BinIndex`] gives constant-time bucket lookups at bounded precision for hot-path
//! shadow checks; [`CircularIntervalTree`] gives exact circular interval semantics;
//! [`ObstacleIndex`] narrows obstacle candidates by envelope.

pub mod bin_index;
pub mod interval_tree;
pub mod obstacle_index;

pub use bin_index::{BinIndex, MAX_BIN_COUNT};
pub use interval_tree::{CircularInterval, CircularIntervalTree, IntervalId};
pub use obstacle_index::{ObstacleId, ObstacleIndex};
