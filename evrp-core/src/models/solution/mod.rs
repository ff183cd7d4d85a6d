//! Solution domain models.

mod route;
pub use self::route::Route;

mod plan;
pub use self::plan::{Solution, SolutionCost};
