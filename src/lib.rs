//! # Journey
//!
//! Session layer for the movement-inference widget. A
//! [`TrackingSession`] owns one [`MotionTracker`], names the place of
//! the session's first fix through a [`ReverseGeocode`] lookup, and
//! [`watch::pump`] moves a stream of session commands into updates for
//! whatever presentation layer sits on top.

mod session;
pub mod watch;

pub use motion::{
    Clock, MotionReport, MotionState, MotionTracker, PositionFix, SystemClock, VehicleMode,
};
pub use nominatim::ReverseGeocode;

pub use self::session::{SessionUpdate, TrackingSession};
pub use self::watch::{PumpSummary, SessionCommand};
