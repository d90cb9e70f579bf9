use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::model::combined_weight;
use crate::{Cost, Duration, GraphError, RouteRecord};

pub mod dijkstra;

/// Weights of the edges exiting each location, keyed by the neighbor location.
/// Edges are undirected, therefore every edge is stored once for each direction.
pub type Adjacency<L, W> = FxHashMap<L, FxHashMap<L, W>>;

/// Weighted view of the graph edges the shortest path search runs on.
pub trait EdgeWeights<L> {
    /// Gets an iterator over all the edges exiting the given location.
    /// For each edge returns the neighbor location and the edge weight.
    /// Returns an empty iterator if the location has no edges.
    fn exiting_edges<'a>(&'a self, location: &L) -> impl Iterator<Item = (&'a L, f64)>
    where
        L: 'a;
}

impl<L, W> EdgeWeights<L> for Adjacency<L, W>
where
    L: Eq + Hash,
    W: Copy + Into<f64>,
{
    fn exiting_edges<'a>(&'a self, location: &L) -> impl Iterator<Item = (&'a L, f64)>
    where
        L: 'a,
    {
        self.get(location)
            .into_iter()
            .flatten()
            .map(|(neighbor, &weight)| (neighbor, weight.into()))
    }
}

/// Edges weighted by `cost + 100 * duration`, computed on the fly from the cost and duration
/// adjacencies of a graph.
#[derive(Debug, Clone, Copy)]
pub struct CombinedWeights<'g, L> {
    cost_edges: &'g Adjacency<L, Cost>,
    duration_edges: &'g Adjacency<L, Duration>,
}

impl<L: Eq + Hash> EdgeWeights<L> for CombinedWeights<'_, L> {
    fn exiting_edges<'a>(&'a self, location: &L) -> impl Iterator<Item = (&'a L, f64)>
    where
        L: 'a,
    {
        let durations = self.duration_edges.get(location);

        self.cost_edges
            .get(location)
            .into_iter()
            .flatten()
            .filter_map(move |(neighbor, &cost)| {
                let duration = *durations?.get(neighbor)?;
                Some((neighbor, combined_weight(cost, duration)))
            })
    }
}

/// Undirected graph of travel connections between locations.
///
/// Every edge carries a cost and a duration, stored symmetrically in two parallel adjacencies.
/// The graph is built once by inserting edges and then queried without further mutation.
#[derive(Debug, Clone)]
pub struct RouteGraph<L> {
    locations: BTreeSet<L>,
    cost_edges: Adjacency<L, Cost>,
    duration_edges: Adjacency<L, Duration>,
    routes: Vec<RouteRecord<L>>,
}

impl<L> Default for RouteGraph<L> {
    fn default() -> Self {
        Self {
            locations: BTreeSet::new(),
            cost_edges: FxHashMap::default(),
            duration_edges: FxHashMap::default(),
            routes: vec![],
        }
    }
}

impl<L: Debug + Clone + Ord + Hash> RouteGraph<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph by inserting every record as an edge, in order.
    pub fn from_records(
        records: impl IntoIterator<Item = RouteRecord<L>>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for RouteRecord {
            source,
            destination,
            cost,
            duration,
        } in records
        {
            graph.add_edge(source, destination, cost, duration)?;
        }
        Ok(graph)
    }

    /// Inserts the undirected edge between source and destination.
    ///
    /// Self-edges are ignored. Inserting an edge between two already connected locations
    /// overwrites both of its weights. Weights must be finite and non-negative, otherwise the
    /// graph is left untouched and an error is returned.
    pub fn add_edge(
        &mut self,
        source: L,
        destination: L,
        cost: Cost,
        duration: Duration,
    ) -> Result<(), GraphError> {
        if source == destination {
            debug!("Skipping self-edge at {source:?}");
            return Ok(());
        }

        if !cost.amount().is_finite() || cost.amount() < 0.0 {
            warn!("Rejecting edge {source:?} - {destination:?} with cost {cost}");
            return Err(GraphError::InvalidCost(cost.amount()));
        }

        if !duration.hours().is_finite() || duration.hours() < 0.0 {
            warn!("Rejecting edge {source:?} - {destination:?} with duration {duration}");
            return Err(GraphError::InvalidDuration(duration.hours()));
        }

        self.locations.insert(source.clone());
        self.locations.insert(destination.clone());

        insert_symmetric(&mut self.cost_edges, &source, &destination, cost);
        insert_symmetric(&mut self.duration_edges, &source, &destination, duration);

        self.routes.push(RouteRecord {
            source,
            destination,
            cost,
            duration,
        });

        Ok(())
    }

    /// Returns true only if the location belongs to at least one edge of the graph.
    pub fn contains_location(&self, location: &L) -> bool {
        self.locations.contains(location)
    }

    /// Gets all the locations of the graph sorted by their identifier.
    pub fn all_locations(&self) -> Vec<&L> {
        self.locations.iter().collect()
    }

    pub(crate) const fn locations(&self) -> &BTreeSet<L> {
        &self.locations
    }

    /// Gets every inserted edge in insertion order, including the ones later overwritten.
    pub fn routes(&self) -> &[RouteRecord<L>] {
        &self.routes
    }

    /// Gets the cost and the duration of the edge between the two locations, in any direction.
    pub fn edge(&self, from: &L, to: &L) -> Option<(Cost, Duration)> {
        self.cost(from, to).zip(self.duration(from, to))
    }

    pub fn cost(&self, from: &L, to: &L) -> Option<Cost> {
        self.cost_edges.get(from)?.get(to).copied()
    }

    pub fn duration(&self, from: &L, to: &L) -> Option<Duration> {
        self.duration_edges.get(from)?.get(to).copied()
    }

    pub const fn cost_weights(&self) -> &Adjacency<L, Cost> {
        &self.cost_edges
    }

    pub const fn duration_weights(&self) -> &Adjacency<L, Duration> {
        &self.duration_edges
    }

    pub const fn combined_weights(&self) -> CombinedWeights<'_, L> {
        CombinedWeights {
            cost_edges: &self.cost_edges,
            duration_edges: &self.duration_edges,
        }
    }
}

fn insert_symmetric<L, W>(edges: &mut Adjacency<L, W>, source: &L, destination: &L, weight: W)
where
    L: Clone + Eq + Hash,
    W: Copy,
{
    edges
        .entry(source.clone())
        .or_default()
        .insert(destination.clone(), weight);
    edges
        .entry(destination.clone())
        .or_default()
        .insert(source.clone(), weight);
}
