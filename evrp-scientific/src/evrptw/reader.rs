#[cfg(test)]
#[path = "../../tests/unit/evrptw/reader_test.rs"]
mod reader_test;

use crate::common::*;
use evrp_core::prelude::*;
use std::collections::HashMap;
use std::io::{BufReader, Read};

/// A trait to read EVRPTW problem.
pub trait EvrptwProblem {
    /// Reads EVRPTW problem with given wireless coverage. `dummies` specifies how many replicas of
    /// every station are added.
    fn read_evrptw(self, coverage: WirelessCoverage, dummies: usize) -> GenericResult<Instance>;
}

impl<R: Read> EvrptwProblem for BufReader<R> {
    fn read_evrptw(self, coverage: WirelessCoverage, dummies: usize) -> GenericResult<Instance> {
        read_evrptw_format(self, coverage, dummies)
    }
}

impl EvrptwProblem for String {
    fn read_evrptw(self, coverage: WirelessCoverage, dummies: usize) -> GenericResult<Instance> {
        read_evrptw_format(BufReader::new(self.as_bytes()), coverage, dummies)
    }
}

fn read_evrptw_format<R: Read>(
    reader: BufReader<R>,
    coverage: WirelessCoverage,
    dummies: usize,
) -> GenericResult<Instance> {
    let mut reader = EvrptwReader { buffer: String::new(), reader, parameters: HashMap::default() };

    let nodes = reader.read_definitions()?;
    let vehicle = reader.create_vehicle()?;

    Instance::new(nodes, vehicle, coverage, dummies)
}

const PARAMETER_NAMES: [&str; 5] = ["Q", "C", "r", "g", "v"];

struct EvrptwReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    parameters: HashMap<String, Float>,
}

impl<R: Read> EvrptwReader<R> {
    fn read_definitions(&mut self) -> GenericResult<Vec<Node>> {
        self.read_header()?;

        let mut nodes = vec![];
        while read_line(&mut self.reader, &mut self.buffer)? > 0 {
            let line = self.buffer.trim();

            if line.is_empty() {
                continue;
            } else if line.contains('/') {
                let (name, value) = parse_parameter(line)?;
                self.parameters.insert(name, value);
            } else {
                nodes.push(parse_node(line)?);
            }
        }

        Ok(nodes)
    }

    fn read_header(&mut self) -> GenericResult<()> {
        read_line(&mut self.reader, &mut self.buffer)?;

        if self.buffer.split_whitespace().next() == Some("StringID") {
            Ok(())
        } else {
            Err("cannot find header line which starts with 'StringID'".into())
        }
    }

    fn create_vehicle(&self) -> GenericResult<VehicleParams> {
        let values = PARAMETER_NAMES
            .iter()
            .map(|name| {
                self.parameters.get(*name).copied().ok_or_else(|| format!("missing vehicle parameter '{name}'").into())
            })
            .collect::<GenericResult<Vec<_>>>()?;

        // the file lists consumption rate before inverse recharge rate
        let &[battery, load, consumption, recharge, velocity] = values.as_slice() else {
            return Err("cannot read vehicle parameters".into());
        };

        Ok(VehicleParams::new(battery, load, recharge, consumption, velocity))
    }
}

fn parse_node(line: &str) -> GenericResult<Node> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let &[id, kind, x, y, demand, ready, due, service] = tokens.as_slice() else {
        return Err(format!("cannot read node line: '{line}'").into());
    };

    let kind = match kind {
        "d" => NodeKind::DepotStart,
        "f" => NodeKind::Station,
        "c" => NodeKind::Customer,
        _ => return Err(format!("unknown type '{kind}' of node '{id}'").into()),
    };

    let location = Location::new(parse_float(x, "x")?, parse_float(y, "y")?);

    Ok(Node::new(
        id,
        kind,
        location,
        parse_float(demand, "demand")?,
        parse_float(ready, "ready time")?,
        parse_float(due, "due date")?,
        parse_float(service, "service time")?,
    ))
}

/// Parses lines like `Q Vehicle fuel tank capacity /77.75/`.
fn parse_parameter(line: &str) -> GenericResult<(String, Float)> {
    let mut parts = line.split('/');
    let name = parts.next().and_then(|description| description.split_whitespace().next());
    let value = parts.next();

    match (name, value) {
        (Some(name), Some(value)) => Ok((name.to_string(), parse_float(value, name)?)),
        _ => Err(format!("cannot read parameter line: '{line}'").into()),
    }
}
