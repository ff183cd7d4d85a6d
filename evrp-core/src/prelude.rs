//! This module reimports commonly used types.

pub use crate::construction::heuristics::NearestNeighborConstruction;
pub use crate::construction::{InfeasibleRoute, RouteEvaluator};

pub use crate::models::common::{Distance, Energy, Location, NodeIdx, Timestamp};
pub use crate::models::problem::{ArcMatrix, Instance, Node, NodeKind, VehicleParams, WirelessCoverage};
pub use crate::models::solution::{Route, Solution, SolutionCost};

pub use crate::solver::{Solver, SolverConfig, SolverOutput};

pub use alns::prelude::*;
