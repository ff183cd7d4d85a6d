#[cfg(test)]
#[path = "../../../tests/unit/models/solution/plan_test.rs"]
mod plan_test;

use super::Route;
use crate::models::common::{Distance, NodeIdx};
use crate::models::problem::Instance;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A set of routes. Solutions are values: operators produce new solutions instead of mutating
/// the ones kept by the search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a new instance of `Solution`.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    /// Returns routes consuming the solution.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Returns amount of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns total distance of all routes.
    pub fn distance(&self, instance: &Instance) -> Distance {
        self.routes.iter().map(|route| route.distance(instance)).sum()
    }

    /// Returns all served customers.
    pub fn customers<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = NodeIdx> + 'a {
        self.routes.iter().flat_map(move |route| route.customers(instance))
    }

    /// Returns a copy of the solution without `[depot start, depot end]` routes.
    pub fn without_empty_routes(&self, instance: &Instance) -> Self {
        Self::new(self.routes.iter().filter(|route| !route.is_empty_tour(instance)).cloned().collect())
    }

    /// Returns true if any route is `[depot start, depot end]`.
    pub fn has_empty_routes(&self, instance: &Instance) -> bool {
        self.routes.iter().any(|route| route.is_empty_tour(instance))
    }

    /// Returns routes as lists of node ids.
    pub fn ids(&self, instance: &Instance) -> Vec<Vec<String>> {
        self.routes.iter().map(|route| route.ids(instance)).collect()
    }
}

impl From<Vec<Route>> for Solution {
    fn from(routes: Vec<Route>) -> Self {
        Self::new(routes)
    }
}

/// A lexicographic cost of the solution: amount of routes first, total distance second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolutionCost {
    /// Amount of routes.
    pub routes: usize,
    /// Total distance.
    pub distance: Distance,
}

impl SolutionCost {
    /// Creates a new instance of `SolutionCost`.
    pub fn new(routes: usize, distance: Distance) -> Self {
        Self { routes, distance }
    }

    /// Returns true if this cost is strictly better than other one.
    pub fn is_better_than(&self, other: &SolutionCost) -> bool {
        self.routes < other.routes || (self.routes == other.routes && self.distance < other.distance)
    }
}

impl PartialOrd for SolutionCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.routes.cmp(&other.routes) {
            Ordering::Equal => self.distance.partial_cmp(&other.distance),
            ordering => Some(ordering),
        }
    }
}

impl Display for SolutionCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "routes: {}, distance: {:.3}", self.routes, self.distance)
    }
}
