//! The construction module contains the route evaluator and the heuristic which builds an
//! initial solution.

mod evaluator;
pub use self::evaluator::{InfeasibleRoute, RouteEvaluator};

pub mod heuristics;
