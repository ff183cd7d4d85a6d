//! Contains common text reading and writing functionality.

mod initial_reader;
pub use self::initial_reader::read_init_solution;

mod text_reader;
pub(crate) use self::text_reader::*;

mod text_writer;
pub use self::text_writer::write_text_solution;
