use alns::utils::Float;

/// Specifies an index of a node within the instance.
pub type NodeIdx = usize;

/// Specifies distance.
pub type Distance = Float;

/// Specifies time.
pub type Timestamp = Float;

/// Specifies battery energy.
pub type Energy = Float;

/// Specifies a load demand.
pub type Demand = Float;

/// Represents a point on a plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> Distance {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
