// src/monitor/session.rs
//! Monitoring session state
//!
//! The session is an explicit object owned by the monitor: the sampling
//! task mutates it through a back-reference and the presentation layer
//! only ever receives read-only snapshots.

use crate::config::constants::monitor;
use crate::config::MonitorConfig;
use crate::hal::types::TremorReading;
use crate::monitor::alert::{active_alert, should_alert, AlertNotice};
use crate::monitor::classifier::{StatusBands, TremorStatus};
use crate::monitor::history::AmplitudeHistory;
use serde::Serialize;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Not monitoring; ticks are suspended
    Idle,
    /// Monitoring; one reading commits per tick
    Running,
}

/// Result of committing one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub status: TremorStatus,
    pub alert_raised: bool,
}

/// Read-only view-model snapshot for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorSnapshot {
    pub reading: TremorReading,
    pub status: TremorStatus,
    pub history: Vec<f32>,
    pub monitoring: bool,
    pub alerts_enabled: bool,
    pub alert: Option<AlertNotice>,
}

/// Per-screen monitoring session
///
/// Lives only as long as the monitoring view; a fresh session starts
/// from the display seed the reference client shows before its first
/// sample (4.2 Hz / 65 / mild) with an empty history window.
pub struct MonitorSession {
    bands: StatusBands,
    current: TremorReading,
    status: TremorStatus,
    history: AmplitudeHistory,
    monitoring: bool,
    alerts_enabled: bool,
    ticks_committed: u64,
}

impl MonitorSession {
    /// Create a fresh session from monitor configuration
    pub fn new(config: &MonitorConfig) -> Self {
        let bands = StatusBands {
            mild_floor: config.mild_amplitude_floor,
            severe_floor: config.severe_amplitude_floor,
        };
        let seed = TremorReading {
            timestamp_ms: 0,
            sequence: 0,
            frequency_hz: monitor::SEED_FREQUENCY_HZ,
            amplitude: monitor::SEED_AMPLITUDE,
        };

        Self {
            bands,
            current: seed,
            status: bands.classify(seed.amplitude),
            history: AmplitudeHistory::new(config.history_capacity),
            monitoring: false,
            alerts_enabled: config.alerts_enabled,
            ticks_committed: 0,
        }
    }

    /// Commit one reading: classify it and roll the history window
    ///
    /// Returns `None` without mutating anything when the session is not
    /// monitoring, so a stale timer write degrades to a no-op.
    pub fn apply_reading(&mut self, reading: TremorReading) -> Option<TickOutcome> {
        if !self.monitoring {
            return None;
        }

        self.current = reading;
        self.status = self.bands.classify(reading.amplitude);
        self.history.push(reading.amplitude);
        self.ticks_committed += 1;

        Some(TickOutcome {
            status: self.status,
            alert_raised: should_alert(self.status, self.alerts_enabled),
        })
    }

    pub fn set_monitoring(&mut self, monitoring: bool) {
        self.monitoring = monitoring;
    }

    pub fn set_alerts_enabled(&mut self, alerts_enabled: bool) {
        self.alerts_enabled = alerts_enabled;
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring
    }

    pub fn alerts_enabled(&self) -> bool {
        self.alerts_enabled
    }

    pub fn state(&self) -> SessionState {
        if self.monitoring {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    /// Readings committed since the session was created
    pub fn ticks_committed(&self) -> u64 {
        self.ticks_committed
    }

    /// Read-only snapshot with the alert gate re-evaluated
    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            reading: self.current,
            status: self.status,
            history: self.history.values(),
            monitoring: self.monitoring,
            alerts_enabled: self.alerts_enabled,
            alert: active_alert(self.status, self.alerts_enabled),
        }
    }
}
