mod destination;
mod nav_graph;

pub use destination::*;
pub use nav_graph::*;
