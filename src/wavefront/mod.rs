//! Event ordering for wavefront (continuous Dijkstra) propagation over a visibility graph.

pub mod event;
pub mod queue;

pub use event::VertexEvent;
pub use queue::EventQueue;
