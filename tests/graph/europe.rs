use std::sync::LazyLock;

use travel_router::{Cost, Duration, RouteGraph, RoutesData};

/// Travel connections between european countries, plus a disconnected Iceland - Greenland pair.
pub static EUROPE_GRAPH: LazyLock<RouteGraph<String>> = LazyLock::new(|| {
    let routes = include_str!("../data/routes.json");
    let data: RoutesData = routes.parse().unwrap();
    data.into_graph().unwrap()
});

pub fn id(location: &str) -> String {
    location.to_string()
}

/// Builds a graph from `(source, destination, cost, duration)` edges.
pub fn route_graph(edges: &[(&str, &str, f64, f64)]) -> RouteGraph<String> {
    let mut graph = RouteGraph::new();
    for &(source, destination, cost, duration) in edges {
        graph
            .add_edge(
                id(source),
                id(destination),
                Cost::from_amount(cost),
                Duration::from_hours(duration),
            )
            .unwrap();
    }
    graph
}
