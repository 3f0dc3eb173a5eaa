//! Single-consumer pump realizing the "one producer, sequential
//! delivery" contract between a location source and a session.

use motion::{Clock, PositionFix, VehicleMode};
use nominatim::ReverseGeocode;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::session::{SessionUpdate, TrackingSession};

/// Input accepted by the pump. One channel carries all three kinds so
/// selections and resets stay ordered relative to fixes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Fix(PositionFix),
    SelectVehicle(VehicleMode),
    Reset,
}

/// Counters reported when the pump finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpSummary {
    pub fixes: u64,
    pub prompts: u64,
    pub selections: u64,
}

/// Drains commands into the session until the source closes or the
/// update receiver is gone, then reports what happened.
pub async fn pump<G, C>(
    mut session: TrackingSession<G, C>, mut commands: mpsc::Receiver<SessionCommand>,
    updates: mpsc::Sender<SessionUpdate>,
) -> PumpSummary
where
    G: ReverseGeocode,
    C: Clock,
{
    let mut summary = PumpSummary::default();

    while let Some(command) = commands.recv().await {
        match command {
            SessionCommand::Fix(fix) => {
                let update = session.handle_fix(&fix).await;
                summary.fixes += 1;
                if update.report.prompt_vehicle_selection {
                    summary.prompts += 1;
                }
                if updates.send(update).await.is_err() {
                    warn!(session = %session.id(), "Update receiver dropped; stopping pump");
                    break;
                }
            }
            SessionCommand::SelectVehicle(mode) => {
                session.select_vehicle(mode);
                summary.selections += 1;
            }
            SessionCommand::Reset => session.reset(),
        }
    }

    info!(
        session = %session.id(),
        fixes = summary.fixes,
        prompts = summary.prompts,
        selections = summary.selections,
        "Tracking pump finished"
    );
    summary
}
