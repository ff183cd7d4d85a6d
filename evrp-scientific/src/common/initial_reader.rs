#[cfg(test)]
#[path = "../../tests/unit/common/initial_reader_test.rs"]
mod initial_reader_test;

use crate::common::read_line;
use evrp_core::prelude::*;
use std::io::{BufReader, Read};

/// Reads initial solution from a buffer in the text solution format. Routes may list depots
/// explicitly or only their visits. Lines other than routes are ignored.
/// NOTE: Solution feasibility is not checked.
pub fn read_init_solution<R: Read>(mut reader: BufReader<R>, instance: &Instance) -> GenericResult<Solution> {
    let mut buffer = String::new();
    let mut routes = vec![];

    while read_line(&mut reader, &mut buffer)? > 0 {
        let Some((prefix, ids)) = buffer.split_once(':') else { continue };
        if !prefix.trim_start().starts_with("Route") {
            continue;
        }

        let nodes = ids
            .split_whitespace()
            .map(|id| instance.find(id).ok_or_else(|| format!("unknown node id in initial solution: '{id}'")))
            .collect::<Result<Vec<_>, _>>()?;

        let route = match nodes.first() {
            Some(&first) if first == instance.depot_start() => Route::new(nodes),
            _ => Route::with_visits(instance, nodes.as_slice()),
        };

        routes.push(route);
    }

    Ok(Solution::new(routes))
}
