#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod records;
mod routing;

pub use error::{GraphError, LoadError, RouteError};
pub use graph::dijkstra::{ShortestPath, shortest_path};
pub use graph::{Adjacency, CombinedWeights, EdgeWeights, RouteGraph};
pub use model::{BEST_ROUTE_DURATION_FACTOR, Cost, Criterion, Duration, combined_weight};
pub use records::{RouteRecord, RoutesData};
pub use routing::route::{Leg, Route, RouteResponse};
