//! Heuristics which build an initial solution.

mod nearest_neighbor;
pub use self::nearest_neighbor::NearestNeighborConstruction;
