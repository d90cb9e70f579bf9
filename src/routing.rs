pub mod route;

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::{
    Cost, Criterion, Duration, EdgeWeights, Route, RouteError, RouteGraph, ShortestPath,
    shortest_path,
};

impl<L: Debug + Clone + Ord + Hash> RouteGraph<L> {
    /// Finds the route from start to end that minimizes the total cost.
    pub fn find_cheapest_route(&self, start: &L, end: &L) -> Result<Route<L>, RouteError<L>> {
        let ShortestPath { distance, path } =
            self.find_path(Criterion::Cheapest, self.cost_weights(), start, end)?;

        Ok(Route {
            criterion: Criterion::Cheapest,
            path,
            cost: Some(Cost::from_amount(distance)),
            duration: None,
        })
    }

    /// Finds the route from start to end that minimizes the total duration.
    pub fn find_quickest_route(&self, start: &L, end: &L) -> Result<Route<L>, RouteError<L>> {
        let ShortestPath { distance, path } =
            self.find_path(Criterion::Quickest, self.duration_weights(), start, end)?;

        Ok(Route {
            criterion: Criterion::Quickest,
            path,
            cost: None,
            duration: Some(Duration::from_hours(distance)),
        })
    }

    /// Finds the route from start to end that minimizes `cost + 100 * duration`.
    /// The route reports the total cost and the total duration of its edges, which are not
    /// necessarily the lowest ones on their own.
    pub fn find_best_route(&self, start: &L, end: &L) -> Result<Route<L>, RouteError<L>> {
        let ShortestPath { path, .. } =
            self.find_path(Criterion::Best, &self.combined_weights(), start, end)?;

        let mut route = Route {
            criterion: Criterion::Best,
            path,
            cost: None,
            duration: None,
        };
        let (cost, duration) = route.totals(self);
        route.cost = Some(cost);
        route.duration = Some(duration);

        Ok(route)
    }

    pub fn find_route(
        &self,
        criterion: Criterion,
        start: &L,
        end: &L,
    ) -> Result<Route<L>, RouteError<L>> {
        match criterion {
            Criterion::Cheapest => self.find_cheapest_route(start, end),
            Criterion::Quickest => self.find_quickest_route(start, end),
            Criterion::Best => self.find_best_route(start, end),
        }
    }

    fn find_path<W: EdgeWeights<L>>(
        &self,
        criterion: Criterion,
        weights: &W,
        start: &L,
        end: &L,
    ) -> Result<ShortestPath<L>, RouteError<L>> {
        debug!("Finding {criterion} route {start:?} -> {end:?}");

        let path = shortest_path(self, weights, start, end);
        if !path.is_found() {
            return Err(RouteError::NoRouteFound {
                start: start.clone(),
                end: end.clone(),
                criterion,
            });
        }

        Ok(path)
    }
}
