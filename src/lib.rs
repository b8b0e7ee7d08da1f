//! An optionally multithreaded **visibility graph** generator for 2D obstacle fields,
//! built around bounded nearest-visible-neighbor search with [shadow](geometry::ShadowArea)
//! culling over circular angular indices.
//!
//! Every obstacle coordinate becomes a [`Vertex`]. For each vertex the generator keeps
//! the nearest visible vertices per fixed angular sector, then partitions them into
//! bins delimited by the vertex's neighbors on its own obstacles. The resulting
//! [`VisibilityGraph`] feeds a wavefront (continuous Dijkstra) route search, whose
//! event ordering lives in [`wavefront`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod angle;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod graph;
pub mod index;
pub mod wavefront;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::VisibilityError;
pub use geometry::{Obstacle, Position, Vertex};
pub use graph::{VisibilityConfig, VisibilityGraph};
