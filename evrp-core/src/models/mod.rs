//! A collection of models to represent the problem and its solution.

pub mod common;
pub mod problem;
pub mod solution;
