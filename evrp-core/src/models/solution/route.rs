#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::{Distance, NodeIdx};
use crate::models::problem::Instance;

/// An ordered sequence of node indices which starts at the depot and ends at the depot end copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Route {
    nodes: Vec<NodeIdx>,
}

impl Route {
    /// Creates a new instance of `Route`.
    pub fn new(nodes: Vec<NodeIdx>) -> Self {
        Self { nodes }
    }

    /// Creates a route without any visits between depots.
    pub fn empty(instance: &Instance) -> Self {
        Self::new(vec![instance.depot_start(), instance.depot_end()])
    }

    /// Creates a route which serves given nodes in order.
    pub fn with_visits(instance: &Instance, visits: &[NodeIdx]) -> Self {
        let mut nodes = Vec::with_capacity(visits.len() + 2);
        nodes.push(instance.depot_start());
        nodes.extend_from_slice(visits);
        nodes.push(instance.depot_end());

        Self::new(nodes)
    }

    /// Returns route nodes.
    pub fn nodes(&self) -> &[NodeIdx] {
        self.nodes.as_slice()
    }

    /// Returns amount of nodes including depots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if route has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if route is exactly `[depot start, depot end]`.
    pub fn is_empty_tour(&self, instance: &Instance) -> bool {
        self.nodes.as_slice() == [instance.depot_start(), instance.depot_end()]
    }

    /// Returns a copy of the route with node inserted at given position.
    pub fn inserted(&self, position: usize, node: NodeIdx) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes[..position]);
        nodes.push(node);
        nodes.extend_from_slice(&self.nodes[position..]);

        Self::new(nodes)
    }

    /// Inserts node at given position.
    pub fn insert(&mut self, position: usize, node: NodeIdx) {
        self.nodes.insert(position, node);
    }

    /// Keeps only nodes specified by the predicate.
    pub fn retain(&mut self, predicate: impl FnMut(&NodeIdx) -> bool) {
        self.nodes.retain(predicate)
    }

    /// Returns true if route contains given node.
    pub fn contains(&self, node: NodeIdx) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns customers served by the route.
    pub fn customers<'a>(&'a self, instance: &'a Instance) -> impl Iterator<Item = NodeIdx> + 'a {
        self.nodes.iter().copied().filter(move |&idx| instance.is_customer(idx))
    }

    /// Returns true if route serves at least one customer.
    pub fn has_customers(&self, instance: &Instance) -> bool {
        self.customers(instance).next().is_some()
    }

    /// Returns total route distance.
    pub fn distance(&self, instance: &Instance) -> Distance {
        self.nodes.windows(2).map(|arc| instance.distance(arc[0], arc[1])).sum()
    }

    /// Returns route node ids.
    pub fn ids(&self, instance: &Instance) -> Vec<String> {
        self.nodes.iter().map(|&idx| instance.id(idx).to_string()).collect()
    }
}

impl From<Vec<NodeIdx>> for Route {
    fn from(nodes: Vec<NodeIdx>) -> Self {
        Self::new(nodes)
    }
}
