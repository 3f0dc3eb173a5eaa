use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Coarse movement classification derived from the estimated speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
    Stationary,
    Moving,
}

impl Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stationary => f.write_str("stationary"),
            Self::Moving => f.write_str("moving"),
        }
    }
}

/// Transport mode confirmed by the rider after a selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleMode {
    Car,
    Bus,
}

impl Display for VehicleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => f.write_str("car"),
            Self::Bus => f.write_str("bus"),
        }
    }
}

/// Outcome of ingesting one fix, consumed by a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionReport {
    /// Estimated speed, rounded to whole km/h.
    pub speed_kmh: i64,
    pub motion_state: MotionState,
    /// Whether the rider should be asked to confirm their vehicle now.
    pub prompt_vehicle_selection: bool,
    /// Metres travelled since the previous fix; absent on the first fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_last_meters: Option<f64>,
    /// The mode last confirmed by the rider, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mode: Option<VehicleMode>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let report = MotionReport {
            speed_kmh: 36,
            motion_state: MotionState::Moving,
            prompt_vehicle_selection: true,
            distance_from_last_meters: None,
            current_mode: Some(VehicleMode::Bus),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "speedKmh": 36,
                "motionState": "moving",
                "promptVehicleSelection": true,
                "currentMode": "bus",
            })
        );
    }

    #[test]
    fn modes_render_lowercase() {
        assert_eq!(VehicleMode::Car.to_string(), "car");
        assert_eq!(VehicleMode::Bus.to_string(), "bus");
        assert_eq!(MotionState::Stationary.to_string(), "stationary");
    }
}
