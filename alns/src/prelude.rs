//! This module reimports a common used types.

pub use crate::acceptance::Annealing;
pub use crate::selection::{AdaptivePool, OperatorRecord};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Timer;
pub use crate::utils::{GenericError, GenericResult};
pub use crate::utils::{Random, RandomGen};
