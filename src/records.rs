use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Cost, Duration, LoadError, RouteGraph};

/// A travel connection between two locations, as found in the routes data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord<L> {
    pub source: L,
    pub destination: L,
    pub cost: Cost,
    pub duration: Duration,
}

/// The routes data document: `{ "routes": [{ "source", "destination", "cost", "duration" }] }`.
/// Any other field of the document (e.g. locations positions) is ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutesData {
    pub routes: Vec<RouteRecord<String>>,
}

impl RoutesData {
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the graph of all the routes.
    pub fn into_graph(self) -> Result<RouteGraph<String>, LoadError> {
        let count = self.routes.len();
        let graph = RouteGraph::from_records(self.routes)?;
        info!(
            "Graph initialized with {count} routes and {} locations",
            graph.all_locations().len()
        );
        Ok(graph)
    }
}

impl FromStr for RoutesData {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
