#[cfg(test)]
#[path = "../../tests/unit/common/text_writer_test.rs"]
mod text_writer_test;

use evrp_core::prelude::*;
use std::io::{BufWriter, Write};

/// Writes routes as `Route k: <node ids>` lines followed by `Distance` and `Vehicles` lines.
pub fn write_text_solution<W: Write>(
    writer: &mut BufWriter<W>,
    instance: &Instance,
    solution: &Solution,
) -> GenericResult<()> {
    for (route, number) in solution.routes().iter().filter(|route| !route.is_empty_tour(instance)).zip(1..) {
        writer.write_all(format!("Route {number}: {}\n", route.ids(instance).join(" ")).as_bytes())?;
    }

    let vehicles = solution.routes().iter().filter(|route| !route.is_empty_tour(instance)).count();
    writer.write_all(format!("Distance {:.2}\n", solution.distance(instance)).as_bytes())?;
    writer.write_all(format!("Vehicles {vehicles}\n").as_bytes())?;
    writer.flush()?;

    Ok(())
}
