//! # Motion
//!
//! Infers coarse movement state from a stream of GPS position fixes.
//!
//! The tracker keeps the last seen fix, derives an instantaneous speed,
//! classifies the device as stationary or moving, and decides when the
//! rider should be asked to confirm their vehicle. It performs no I/O and
//! none of its operations can fail; wall-clock time enters through the
//! [`Clock`] trait so the prompt cooldown is testable.

mod clock;
mod fix;
mod geo;
mod report;
mod tracker;

pub use self::clock::{Clock, SystemClock};
pub use self::fix::PositionFix;
pub use self::geo::haversine_meters;
pub use self::report::{MotionReport, MotionState, VehicleMode};
pub use self::tracker::MotionTracker;
