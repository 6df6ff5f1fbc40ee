//! Tremor-Core: tremor monitoring and prosthetic control core
//!
//! This library implements the behavioral core of a tremor-assist
//! client. It features:
//!
//! - A tremor status monitor: timer-driven sampling, amplitude
//!   classification, a bounded history window, and a severe-tremor
//!   alert gate
//! - A reading-source abstraction with a uniform-random simulator and a
//!   deterministic scripted double
//! - Prosthetic grip-pattern control with connection-gated apply
//! - A dashboard status feed and demo report data
//! - Configuration management with TOML loading and validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tremor_core::config::MonitorConfig;
//! use tremor_core::hal::SimulatedTremorSource;
//! use tremor_core::monitor::TremorMonitor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SimulatedTremorSource::seeded(42);
//!     let mut monitor = TremorMonitor::new(&MonitorConfig::default(), Box::new(source));
//!
//!     monitor.start().await?;
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!
//!     let snapshot = monitor.snapshot();
//!     println!("{} ({} samples)", snapshot.status.label(), snapshot.history.len());
//!
//!     monitor.stop();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod control;
pub mod dashboard;
pub mod error;
pub mod hal;
pub mod monitor;
pub mod notify;
pub mod reports;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, MonitorConfig, SystemConfig};
pub use control::{ControlSettings, GripPattern, ProstheticController};
pub use error::{TremorError, TremorResult};
pub use hal::{
    ReadingSource, ScriptedSource, SimulatedTremorSource, SourceError, TremorReading,
};
pub use monitor::{
    classify, should_alert, MonitorSnapshot, SessionState, TremorMonitor, TremorStatus,
};
pub use notify::{Notice, Notifier, TracingNotifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "tremor-core");
    }
}
