use serde::{Deserialize, Serialize};

/// One position sample reported by an external location source.
///
/// Immutable once created. Coordinate ranges are not validated; callers
/// passing out-of-range values get unspecified distance results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Milliseconds since the Unix epoch at which the fix was taken.
    pub timestamp_ms: i64,
    /// Speed over ground in metres per second, when the receiver reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_speed_mps: Option<f64>,
}

impl PositionFix {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, timestamp_ms: i64) -> Self {
        Self { latitude, longitude, timestamp_ms, reported_speed_mps: None }
    }

    #[must_use]
    pub const fn with_speed(mut self, speed_mps: f64) -> Self {
        self.reported_speed_mps = Some(speed_mps);
        self
    }
}
