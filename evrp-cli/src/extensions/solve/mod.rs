//! Contains logic used by solve command.

pub mod config;
pub mod interruption;
pub mod summary;
