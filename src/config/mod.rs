// src/config/mod.rs
//! Configuration management for the tremor-assist core

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};

use crate::hal::simulator::SimulatorConfig;
use serde::{Deserialize, Serialize};

/// Complete system configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SystemConfig {
    #[serde(default)]
    pub monitor: MonitorConfig,

    #[serde(default)]
    pub hal: HalSettings,

    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Tremor monitor settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MonitorConfig {
    #[serde(default = "defaults::tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "defaults::history_capacity")]
    pub history_capacity: usize,

    #[serde(default = "defaults::mild_amplitude_floor")]
    pub mild_amplitude_floor: f32,

    #[serde(default = "defaults::severe_amplitude_floor")]
    pub severe_amplitude_floor: f32,

    #[serde(default = "defaults::monitoring_enabled")]
    pub monitoring_enabled: bool,

    #[serde(default = "defaults::alerts_enabled")]
    pub alerts_enabled: bool,
}

/// Reading source selection and per-source settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HalSettings {
    #[serde(default = "defaults::source_kind")]
    pub source: SourceKind,

    pub simulator: Option<SimulatorConfig>,
}

/// Available reading source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Simulator,
    Scripted,
}

/// Prosthetic device settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeviceSettings {
    #[serde(default = "defaults::device_name")]
    pub name: String,

    #[serde(default = "defaults::firmware_version")]
    pub firmware_version: String,

    #[serde(default = "defaults::start_connected")]
    pub start_connected: bool,
}

/// Dashboard feed settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "defaults::refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

/// Default value providers using constants
mod defaults {
    use super::SourceKind;
    use crate::config::constants::*;

    pub fn tick_interval_ms() -> u64 { monitor::DEFAULT_TICK_INTERVAL_MS }
    pub fn history_capacity() -> usize { monitor::DEFAULT_HISTORY_CAPACITY }
    pub fn mild_amplitude_floor() -> f32 { monitor::MILD_AMPLITUDE_FLOOR }
    pub fn severe_amplitude_floor() -> f32 { monitor::SEVERE_AMPLITUDE_FLOOR }
    pub fn monitoring_enabled() -> bool { true }
    pub fn alerts_enabled() -> bool { true }

    pub fn source_kind() -> SourceKind { SourceKind::Simulator }

    pub fn device_name() -> String { device::DEFAULT_DEVICE_NAME.to_string() }
    pub fn firmware_version() -> String { device::DEFAULT_FIRMWARE_VERSION.to_string() }
    pub fn start_connected() -> bool { true }

    pub fn refresh_interval_ms() -> u64 { dashboard::DEFAULT_REFRESH_INTERVAL_MS }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::tick_interval_ms(),
            history_capacity: defaults::history_capacity(),
            mild_amplitude_floor: defaults::mild_amplitude_floor(),
            severe_amplitude_floor: defaults::severe_amplitude_floor(),
            monitoring_enabled: defaults::monitoring_enabled(),
            alerts_enabled: defaults::alerts_enabled(),
        }
    }
}

impl Default for HalSettings {
    fn default() -> Self {
        Self {
            source: defaults::source_kind(),
            simulator: Some(SimulatorConfig::default()),
        }
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            name: defaults::device_name(),
            firmware_version: defaults::firmware_version(),
            start_connected: defaults::start_connected(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_interval_ms: defaults::refresh_interval_ms(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            hal: HalSettings::default(),
            device: DeviceSettings::default(),
            dashboard: DashboardSettings::default(),
        }
    }
}

impl SystemConfig {
    /// Validate configuration consistency
    pub fn validate_consistency(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.monitor.tick_interval_ms < monitor::MIN_TICK_INTERVAL_MS
            || self.monitor.tick_interval_ms > monitor::MAX_TICK_INTERVAL_MS
        {
            errors.push(format!(
                "Tick interval out of range: {} ms (allowed {}..={} ms)",
                self.monitor.tick_interval_ms,
                monitor::MIN_TICK_INTERVAL_MS,
                monitor::MAX_TICK_INTERVAL_MS
            ));
        }

        if self.monitor.history_capacity == 0
            || self.monitor.history_capacity > monitor::MAX_HISTORY_CAPACITY
        {
            errors.push(format!(
                "History capacity out of range: {} (allowed 1..={})",
                self.monitor.history_capacity,
                monitor::MAX_HISTORY_CAPACITY
            ));
        }

        if !self.monitor.mild_amplitude_floor.is_finite()
            || !self.monitor.severe_amplitude_floor.is_finite()
            || self.monitor.mild_amplitude_floor >= self.monitor.severe_amplitude_floor
        {
            errors.push(format!(
                "Status bands must satisfy mild floor < severe floor, got {} and {}",
                self.monitor.mild_amplitude_floor, self.monitor.severe_amplitude_floor
            ));
        }

        // An absent [hal.simulator] table falls back to defaults at
        // source construction; only a present table can be invalid.
        if let Some(sim) = &self.hal.simulator {
            if let Err(e) = sim.validate() {
                errors.push(format!("Simulator configuration invalid: {}", e));
            }
        }

        if self.dashboard.refresh_interval_ms == 0 {
            errors.push("Dashboard refresh interval must be non-zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Get configuration summary for display/logging
    pub fn get_summary(&self) -> ConfigSummary {
        ConfigSummary {
            tick_interval_ms: self.monitor.tick_interval_ms,
            history_capacity: self.monitor.history_capacity,
            source: self.hal.source,
            monitoring_enabled: self.monitor.monitoring_enabled,
            alerts_enabled: self.monitor.alerts_enabled,
        }
    }
}

/// Configuration summary for display/logging
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub tick_interval_ms: u64,
    pub history_capacity: usize,
    pub source: SourceKind,
    pub monitoring_enabled: bool,
    pub alerts_enabled: bool,
}
