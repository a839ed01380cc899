mod clock;
mod driver;
mod marker;

pub use clock::{FrameClock, SteppedClock};
pub use driver::{AnimationDriver, DriverStats, node_radius};
pub use marker::{Marker, MarkerStep};
