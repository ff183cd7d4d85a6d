//! This crate exposes generic building blocks of an adaptive large neighbourhood search (ALNS):
//! adaptive operator pools with segment based weight recalibration, an annealing schedule with
//! its acceptance rule and some helper functionality (randomization, timing, quotas, logging).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod acceptance;
pub mod prelude;
pub mod selection;
pub mod utils;
