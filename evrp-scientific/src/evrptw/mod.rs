//! Contains functionality to read EVRPTW problem and write its solution.

mod reader;
pub use self::reader::EvrptwProblem;

mod writer;
pub use self::writer::EvrptwSolution;
