//! A command line interface to *Electric Vehicle Routing Problem* solver.
//!

#[cfg(test)]
#[path = "../../evrp-core/tests/helpers/macros.rs"]
#[macro_use]
mod macros;

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("EVRPTW-PR Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to electric vehicle routing problem solver")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'").into()),
        None => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
