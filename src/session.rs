use motion::{Clock, MotionReport, MotionTracker, PositionFix, SystemClock, VehicleMode};
use nominatim::ReverseGeocode;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What the presentation layer receives for every ingested fix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub report: MotionReport,
    /// Current place label, if any lookup has succeeded so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
    /// Whether this update came from the session's first fix.
    pub first_fix: bool,
}

/// One tracked journey: a motion tracker, a reverse geocoder, and the
/// current place label.
pub struct TrackingSession<G, C = SystemClock>
where
    G: ReverseGeocode,
    C: Clock,
{
    id: Uuid,
    tracker: MotionTracker<C>,
    geocoder: G,
    place_name: Option<String>,
}

impl<G> TrackingSession<G>
where
    G: ReverseGeocode,
{
    /// Creates a session driven by the system clock.
    #[must_use]
    pub fn new(geocoder: G) -> Self {
        Self::with_clock(geocoder, SystemClock)
    }
}

impl<G, C> TrackingSession<G, C>
where
    G: ReverseGeocode,
    C: Clock,
{
    /// Creates a session with an explicit clock.
    #[must_use]
    pub fn with_clock(geocoder: G, clock: C) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "Tracking session started");
        Self { id, tracker: MotionTracker::with_clock(clock), geocoder, place_name: None }
    }

    /// Runs one fix through the tracker, naming the place when it is the
    /// session's first fix.
    ///
    /// Geocoding failures are non-fatal; the previous label is kept.
    pub async fn handle_fix(&mut self, fix: &PositionFix) -> SessionUpdate {
        let first_fix = self.tracker.last_fix().is_none();
        let report = self.tracker.ingest_fix(fix);

        if first_fix {
            self.refresh_place(fix).await;
        }
        if report.prompt_vehicle_selection {
            info!(session = %self.id, speed_kmh = report.speed_kmh, "Vehicle selection prompted");
        }

        SessionUpdate { report, place_name: self.place_name.clone(), first_fix }
    }

    /// Records the rider's vehicle selection.
    pub fn select_vehicle(&mut self, mode: VehicleMode) {
        info!(session = %self.id, mode = %mode, "Vehicle selected");
        self.tracker.set_vehicle_mode(mode);
    }

    /// Clears the tracker state. The next fix is a first fix again and
    /// re-arms the place lookup; the label is kept until a new lookup
    /// succeeds.
    pub fn reset(&mut self) {
        info!(session = %self.id, "Session reset");
        self.tracker.reset();
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn place_name(&self) -> Option<&str> {
        self.place_name.as_deref()
    }

    #[must_use]
    pub const fn vehicle_mode(&self) -> Option<VehicleMode> {
        self.tracker.vehicle_mode()
    }

    async fn refresh_place(&mut self, fix: &PositionFix) {
        match self.geocoder.reverse(fix.latitude, fix.longitude).await {
            Ok(Some(place)) => {
                if let Some(label) = place.label() {
                    info!(session = %self.id, place = %label, "Place resolved");
                    self.place_name = Some(label);
                }
            }
            Ok(None) => {
                debug!(session = %self.id, "No place for the first fix");
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "Reverse geocode failed");
            }
        }
    }
}
