#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use evrp_core::prelude::*;
use std::io::prelude::*;
use std::io::{BufReader, Read};

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Parses a float value of the named field.
pub(crate) fn parse_float(value: &str, field: &str) -> GenericResult<Float> {
    value.trim().parse::<Float>().map_err(|err| format!("cannot parse {field} from '{value}': {err}").into())
}
