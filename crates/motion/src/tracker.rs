use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::fix::PositionFix;
use crate::geo::haversine_meters;
use crate::report::{MotionReport, MotionState, VehicleMode};

const MOVING_SPEED_KMH: i64 = 5;
const PROMPT_DISTANCE_M: f64 = 200.0;
const PROMPT_WINDOW_MS: i64 = 15 * 1000; // fixes further apart than this never prompt
const PROMPT_COOLDOWN_MS: i64 = 60 * 1000; // 1 minute
const MIN_INTERVAL_SECS: f64 = 0.5; // floor for the speed divisor
const MPS_TO_KMH: f64 = 3.6;

#[derive(Debug, Clone, Default)]
struct TrackerState {
    last_fix: Option<PositionFix>,
    last_prompt_ms: i64,
    vehicle_mode: Option<VehicleMode>,
}

/// Infers movement from a stream of position fixes.
///
/// One instance owns the state for one fix stream. Fixes are expected in
/// non-decreasing timestamp order, delivered sequentially by the caller;
/// the tracker performs no I/O and none of its operations can fail.
pub struct MotionTracker<C = SystemClock>
where
    C: Clock,
{
    clock: C,
    state: TrackerState,
}

impl MotionTracker {
    /// Creates a tracker driven by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MotionTracker<C>
where
    C: Clock,
{
    /// Creates a tracker with an explicit clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock, state: TrackerState::default() }
    }

    /// Ingests one fix and reports the inferred motion.
    ///
    /// The previous fix is replaced on every call, so distance, speed, and
    /// the prompt window are always measured against the immediately
    /// preceding fix.
    pub fn ingest_fix(&mut self, fix: &PositionFix) -> MotionReport {
        let now_ms = self.clock.now_ms();

        if let Some(last) = &self.state.last_fix
            && fix.timestamp_ms < last.timestamp_ms
        {
            warn!(
                timestamp_ms = fix.timestamp_ms,
                last_timestamp_ms = last.timestamp_ms,
                "Received out-of-order position fix"
            );
        }

        let distance = self.state.last_fix.as_ref().map(|last| haversine_meters(last, fix));
        let speed_kmh = self.estimate_speed_kmh(fix, distance);

        let prompt = self.should_prompt(fix, distance, now_ms);
        if prompt {
            debug!(now_ms, "Requesting vehicle selection");
            self.state.last_prompt_ms = now_ms;
        }

        self.state.last_fix = Some(*fix);

        MotionReport {
            speed_kmh,
            motion_state: classify(speed_kmh),
            prompt_vehicle_selection: prompt,
            distance_from_last_meters: distance,
            current_mode: self.state.vehicle_mode,
        }
    }

    /// Records the rider's confirmed transport mode.
    ///
    /// Purely a state update for presentation; distance and speed
    /// computation are unaffected.
    pub fn set_vehicle_mode(&mut self, mode: VehicleMode) {
        debug!(mode = %mode, "Vehicle mode set");
        self.state.vehicle_mode = Some(mode);
    }

    /// Forgets the previous fix and the prompt cooldown.
    ///
    /// The selected vehicle mode survives a reset.
    pub fn reset(&mut self) {
        debug!("Tracker state reset");
        self.state.last_fix = None;
        self.state.last_prompt_ms = 0;
    }

    #[must_use]
    pub const fn vehicle_mode(&self) -> Option<VehicleMode> {
        self.state.vehicle_mode
    }

    #[must_use]
    pub const fn last_fix(&self) -> Option<&PositionFix> {
        self.state.last_fix.as_ref()
    }

    /// A finite reported speed wins; otherwise the speed is derived from
    /// the distance to the previous fix, with the interval floored at
    /// half a second to keep near-simultaneous fixes from blowing up the
    /// divisor.
    fn estimate_speed_kmh(&self, fix: &PositionFix, distance: Option<f64>) -> i64 {
        if let Some(reported) = fix.reported_speed_mps.filter(|mps| mps.is_finite()) {
            return round_kmh(reported * MPS_TO_KMH);
        }

        let (Some(last), Some(meters)) = (&self.state.last_fix, distance) else {
            return 0;
        };

        let interval_secs =
            secs_between(last.timestamp_ms, fix.timestamp_ms).max(MIN_INTERVAL_SECS);
        round_kmh(meters / interval_secs * MPS_TO_KMH)
    }

    fn should_prompt(&self, fix: &PositionFix, distance: Option<f64>, now_ms: i64) -> bool {
        let (Some(last), Some(meters)) = (&self.state.last_fix, distance) else {
            return false;
        };

        let gap_ms = fix.timestamp_ms.saturating_sub(last.timestamp_ms);
        meters >= PROMPT_DISTANCE_M
            && gap_ms <= PROMPT_WINDOW_MS
            && now_ms.saturating_sub(self.state.last_prompt_ms) > PROMPT_COOLDOWN_MS
    }
}

const fn classify(speed_kmh: i64) -> MotionState {
    if speed_kmh < MOVING_SPEED_KMH { MotionState::Stationary } else { MotionState::Moving }
}

#[allow(clippy::cast_precision_loss)]
fn secs_between(from_ms: i64, to_ms: i64) -> f64 {
    to_ms.saturating_sub(from_ms) as f64 / 1000.0
}

#[allow(clippy::cast_possible_truncation)]
fn round_kmh(value: f64) -> i64 {
    value.round() as i64
}
