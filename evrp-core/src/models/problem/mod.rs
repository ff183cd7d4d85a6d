//! Problem domain models.

mod arcs;
pub use self::arcs::ArcMatrix;

mod instance;
pub use self::instance::Instance;

mod node;
pub use self::node::{Node, NodeKind};

mod vehicle;
pub use self::vehicle::VehicleParams;

mod wireless;
pub use self::wireless::{WIRELESS_CHARGE_RATE, WirelessCoverage};
