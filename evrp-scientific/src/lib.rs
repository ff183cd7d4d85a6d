//! Scientific crate contains logic to read EVRPTW benchmark instances and write their solutions.
//!
//!
//! # Supported formats
//!
//! - **evrptw**: the text format of EVRPTW instances introduced by Schneider, Stenger and Goeke:
//!   a node table with depot (`d`), recharging station (`f`) and customer (`c`) rows followed by
//!   vehicle parameter lines with values enclosed in slashes
//! - **text solution**: `Route k: <node ids>` lines followed by total distance and vehicle count

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use evrp_core as core;

pub mod common;
pub mod evrptw;
