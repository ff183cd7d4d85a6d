#[cfg(test)]
#[path = "../../tests/unit/evrptw/writer_test.rs"]
mod writer_test;

use crate::common::write_text_solution;
use evrp_core::prelude::*;
use std::io::{BufWriter, Write};

/// A trait to write EVRPTW solution.
pub trait EvrptwSolution<W: Write> {
    /// Writes EVRPTW solution in the text format.
    fn write_evrptw(&self, instance: &Instance, writer: &mut BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> EvrptwSolution<W> for Solution {
    fn write_evrptw(&self, instance: &Instance, writer: &mut BufWriter<W>) -> GenericResult<()> {
        write_text_solution(writer, instance, self)
    }
}
