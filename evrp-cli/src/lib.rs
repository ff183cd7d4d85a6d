//! A crate which exposes command line tooling around the EVRPTW-PR solver: configuration
//! loading, interruption handling and result reporting.
//!
//! # Examples
//!
//! ```
//! use evrp_cli::extensions::solve::config::{create_solver_config, read_config};
//! use std::io::BufReader;
//!
//! let config = read_config(BufReader::new(r#"{ "schedule": { "iterations": 100 } }"#.as_bytes()))?;
//! let config = create_solver_config(&config)?;
//!
//! assert_eq!(config.iterations, 100);
//! # Ok::<(), evrp_cli::core::prelude::GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use evrp_core as core;
pub use evrp_scientific as scientific;

pub mod extensions;
