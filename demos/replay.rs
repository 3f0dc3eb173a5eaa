//! Replays a short synthetic drive through a tracking session.
//!
//! The place label comes from the public Nominatim service, so the
//! label step degrades to "unknown" when offline.

use anyhow::Result;
use journey::watch::{self, SessionCommand};
use journey::{PositionFix, TrackingSession, VehicleMode};
use nominatim::{Client, Config};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let geocoder = Client::new(Config::default())?;
    let session = TrackingSession::new(geocoder);

    let (command_tx, command_rx) = mpsc::channel(16);
    let (update_tx, mut update_rx) = mpsc::channel(16);
    let pump = tokio::spawn(watch::pump(session, command_rx, update_tx));
    let printer = tokio::spawn(async move {
        while let Some(update) = update_rx.recv().await {
            info!(
                place = update.place_name.as_deref().unwrap_or("unknown"),
                speed_kmh = update.report.speed_kmh,
                state = %update.report.motion_state,
                prompt = update.report.prompt_vehicle_selection,
                "Update"
            );
        }
    });

    // Six fixes heading north out of the Auckland CBD, 10 s apart and
    // roughly 300 m each.
    let start = chrono::Utc::now().timestamp_millis();
    for step in 0..6 {
        let latitude = -36.8485 + f64::from(step) * 0.0027;
        let timestamp = start + i64::from(step) * 10_000;
        let fix = PositionFix::new(latitude, 174.7633, timestamp).with_speed(8.0);
        command_tx.send(SessionCommand::Fix(fix)).await?;
    }
    command_tx.send(SessionCommand::SelectVehicle(VehicleMode::Bus)).await?;
    drop(command_tx);

    let summary = pump.await?;
    printer.await?;
    info!(fixes = summary.fixes, prompts = summary.prompts, "Replay finished");

    Ok(())
}
