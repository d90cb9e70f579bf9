use std::fmt::{Debug, Display};
use std::hash::Hash;

use itertools::Itertools;
use serde::Serialize;

use crate::{Cost, Criterion, Duration, RouteError, RouteGraph};

/// A route found by one of the graph queries.
/// The cost is reported by the cheapest and best routes, the duration by the quickest and best.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<L> {
    #[serde(rename = "type")]
    pub criterion: Criterion,
    pub path: Vec<L>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

/// A single connection along a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg<'a, L> {
    pub from: &'a L,
    pub to: &'a L,
    pub cost: Cost,
    pub duration: Duration,
}

impl<L> Route<L> {
    pub fn start(&self) -> Option<&L> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&L> {
        self.path.last()
    }

    /// Gets the connections between each pair of consecutive locations of the path, with the
    /// weights they have in the given graph.
    pub fn legs<'a>(&'a self, graph: &RouteGraph<L>) -> Vec<Leg<'a, L>>
    where
        L: Debug + Clone + Ord + Hash,
    {
        self.path
            .iter()
            .tuple_windows()
            .filter_map(|(from, to)| {
                let (cost, duration) = graph.edge(from, to)?;
                Some(Leg {
                    from,
                    to,
                    cost,
                    duration,
                })
            })
            .collect()
    }

    /// Sums the cost and the duration of every leg of the route.
    pub fn totals(&self, graph: &RouteGraph<L>) -> (Cost, Duration)
    where
        L: Debug + Clone + Ord + Hash,
    {
        self.legs(graph)
            .iter()
            .fold((Cost::ZERO, Duration::ZERO), |(cost, duration), leg| {
                (cost + leg.cost, duration + leg.duration)
            })
    }
}

impl<L: Display> Route<L> {
    /// Human readable summary of the route.
    pub fn message(&self) -> String {
        let path = self.path.iter().join(" → ");
        let (start, end) = match self.start().zip(self.end()) {
            Some((start, end)) => (start.to_string(), end.to_string()),
            None => Default::default(),
        };
        let cost = self.cost.unwrap_or(Cost::ZERO);
        let duration = self.duration.unwrap_or(Duration::ZERO);

        match self.criterion {
            Criterion::Cheapest => format!(
                "Cheapest route from {start} to {end} costs ${cost} with the route being:\n{path}"
            ),
            Criterion::Quickest => format!(
                "Quickest route from {start} to {end} is {duration} hour(s) with the route being:\n{path}"
            ),
            Criterion::Best => format!(
                "Most efficient route from {start} to {end} is:\n{path}\nCost: ${cost}, Duration: {duration} hours"
            ),
        }
    }
}

/// Outcome of a route query as handed to the presentation layer:
/// either the route, or `{ "error": "No route from A to B" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteResponse<L> {
    Found(Route<L>),
    Error { error: String },
}

impl<L: Display> From<Result<Route<L>, RouteError<L>>> for RouteResponse<L> {
    fn from(result: Result<Route<L>, RouteError<L>>) -> Self {
        match result {
            Ok(route) => Self::Found(route),
            Err(error) => Self::Error {
                error: error.to_string(),
            },
        }
    }
}
