//! Common models.

mod primitives;
pub use self::primitives::*;
