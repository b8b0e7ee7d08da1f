// main.rs
//
// Builds a small obstacle field, generates its visibility graph and walks a
// wavefront from one corner. Run with RUST_LOG=debug to see progress output.

use hvgraph::float_types::Real;
use hvgraph::wavefront::{EventQueue, VertexEvent};
use hvgraph::{Obstacle, Position, VisibilityConfig, VisibilityError, VisibilityGraph};
use log::{info, warn};

fn square(x: Real, y: Real, size: Real) -> Result<Obstacle, VisibilityError> {
    Obstacle::new([(x, y), (x + size, y), (x + size, y + size), (x, y + size), (x, y)])
}

fn main() -> Result<(), VisibilityError> {
    env_logger::init();

    let obstacles = vec![
        square(0.0, 0.0, 2.0)?,
        square(6.0, 1.0, 3.0)?,
        square(3.0, 6.0, 1.5)?,
        // a wall
        Obstacle::new([(-2.0, 4.0), (2.0, 4.5), (5.0, 4.0)])?,
        // a lone pole
        Obstacle::from_point(Position::new(10.0, 8.0))?,
    ];

    let config = VisibilityConfig::default()
        .with_neighbors_per_bin(4)
        .with_diagnostics(true);
    let graph = VisibilityGraph::generate(obstacles, &config)?;

    for warning in graph.warnings() {
        warn!("{}", warning);
    }
    for vertex in graph.vertices() {
        if let Some(bins) = graph.neighbor_bins(&vertex.position) {
            info!("{} -> {} bins: {:?}", vertex.position, bins.len(), bins);
        }
    }
    if let Some(lines) = graph.diagnostic_lines() {
        info!(
            "{} obstacle edges, {} visibility edges",
            lines.obstacle_neighbors.0.len(),
            lines.visibility_neighbors.0.len()
        );
    }

    // Settle vertices in order of travel distance from the first corner.
    let source = Position::new(0.0, 0.0);
    let mut queue = EventQueue::new();
    if let Some(start) = graph.vertex_id(&source) {
        queue.push(VertexEvent::new(start, source, source, 0.0));
    }
    while let Some(event) = queue.pop_unsettled() {
        info!("reached {} after {:.3}", event.position, event.distance_from_source);
        for neighbor in graph.visible_neighbors(&event.position).unwrap_or_default() {
            if let Some(id) = graph.vertex_id(&neighbor) {
                if !queue.is_settled(id) {
                    queue.push(VertexEvent::new(id, neighbor, event.position, event.distance_from_source));
                }
            }
        }
    }
    info!("settled {} of {} vertices", queue.settled_count(), graph.vertices().len());

    Ok(())
}
