mod europe;

pub use europe::{EUROPE_GRAPH, id, route_graph};
