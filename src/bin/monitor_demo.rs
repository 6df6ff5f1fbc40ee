//! Demo client: runs a monitoring session against the simulator and
//! applies a grip pattern, printing what the screens would render.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use tremor_core::config::ConfigLoader;
use tremor_core::control::{ControlSettings, GripPattern, ProstheticController};
use tremor_core::dashboard::DailySummary;
use tremor_core::hal::SourceFactory;
use tremor_core::monitor::TremorMonitor;
use tremor_core::notify::TracingNotifier;
use tremor_core::reports;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ConfigLoader::new().load_system_config()?;
    tracing::info!(summary = ?config.get_summary(), "configuration loaded");

    let source = SourceFactory::create(&config.hal)?;
    let mut monitor = TremorMonitor::new(&config.monitor, source);

    if config.monitor.monitoring_enabled {
        monitor.start().await?;
        for _ in 0..10 {
            tokio::time::sleep(Duration::from_millis(config.monitor.tick_interval_ms)).await;
            let snapshot = monitor.snapshot();
            println!(
                "{:>6.1} Hz  amplitude {:>5.1}  {:<13} history {:>2}/{}",
                snapshot.reading.frequency_hz,
                snapshot.reading.amplitude,
                snapshot.status.label(),
                snapshot.history.len(),
                config.monitor.history_capacity,
            );
            if let Some(alert) = snapshot.alert {
                println!("  !! {}: {}", alert.title, alert.description);
            }
        }
        monitor.stop();
    }

    let notifier = TracingNotifier;
    let mut controller = ProstheticController::new(config.device.start_connected);
    let settings = ControlSettings {
        grip: GripPattern::Power,
        ..Default::default()
    };
    controller.apply(settings, &notifier)?;

    let summary = DailySummary::demo();
    println!(
        "today: {:.1}h active, {} grip changes, {:.1} Hz average",
        summary.active_hours, summary.grip_changes, summary.average_frequency_hz
    );

    let report = reports::report_for(Default::default());
    let peak = reports::peak_intensity(&report.trend);
    for entry in &report.trend {
        println!("{}: intensity {:>2} (peak {})", entry.day, entry.intensity, peak);
    }

    Ok(())
}
