//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod quota;
pub use self::quota::*;

mod random;
pub use self::random::*;

mod statistics;
pub use self::statistics::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
