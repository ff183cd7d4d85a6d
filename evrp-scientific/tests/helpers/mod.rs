#[cfg(test)]
#[path = "../../../evrp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

pub use self::evrptw::*;

use crate::evrptw::EvrptwProblem;
use evrp_core::prelude::*;
use std::fs::File;
use std::io::BufReader;

pub fn get_test_resource(resource_path: &str) -> std::io::Result<File> {
    let mut path = std::env::current_dir()?;
    path.push("tests");
    path.push(resource_path);

    File::open(path)
}

pub fn create_c10_sample_instance(dummies: usize) -> Instance {
    BufReader::new(get_test_resource("../../data/evrptw/c10_sample.txt").unwrap())
        .read_evrptw(WirelessCoverage::None, dummies)
        .unwrap()
}

pub fn to_solution(instance: &Instance, routes: &[&[&str]]) -> Solution {
    routes
        .iter()
        .map(|ids| Route::new(ids.iter().map(|id| instance.find(id).expect("unknown id")).collect()))
        .collect::<Vec<_>>()
        .into()
}
