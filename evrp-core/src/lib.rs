//! Core crate contains the main building blocks to solve the ***Electric Vehicle Routing Problem
//! with Time Windows and Partial Recharge*** (EVRPTW-PR) with an adaptive large neighbourhood
//! search, optionally taking in-motion wireless charging into account.
//!
//! # Key points
//!
//! - a static instance model with a dense arc matrix (distance, travel time, net energy)
//! - a route evaluator which simulates arrival time and battery level along a route
//! - destroy (ruin) and repair (recreate) operators for customers, routes and stations
//! - an orchestrator which selects operators adaptively and accepts candidates with annealing
//!
//! # Examples
//!
//! A minimal run on a hand made instance:
//!
//! ```
//! use evrp_core::prelude::*;
//! use std::sync::Arc;
//!
//! let nodes = vec![
//!     Node::new("D0", NodeKind::DepotStart, Location::new(0., 0.), 0., 0., 1000., 0.),
//!     Node::new("S1", NodeKind::Station, Location::new(5., 0.), 0., 0., 1000., 0.),
//!     Node::new("C1", NodeKind::Customer, Location::new(3., 4.), 10., 0., 1000., 10.),
//! ];
//! let vehicle = VehicleParams::new(100., 200., 3.39, 1., 1.);
//! let instance = Arc::new(Instance::new(nodes, vehicle, WirelessCoverage::None, 0)?);
//! let evaluator = Arc::new(RouteEvaluator::new(instance));
//! let config = SolverConfig { iterations: 10, ..SolverConfig::default() };
//!
//! let output = Solver::new(evaluator, config, Arc::new(Environment::new_repeatable(0)))?.solve()?;
//!
//! assert_eq!(output.best_route_count, 1);
//! assert_eq!(output.best_distance, 10.);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;

pub use alns;
