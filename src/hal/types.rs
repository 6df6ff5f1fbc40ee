// src/hal/types.rs
//! Core types for reading-source abstraction

use serde::{Deserialize, Serialize};

/// Single tremor reading produced by a source on one sampling tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TremorReading {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    /// Monotonic per-source sample counter
    pub sequence: u32,
    /// Tremor frequency in Hz
    pub frequency_hz: f32,
    /// Dimensionless tremor intensity
    pub amplitude: f32,
}

/// Device information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub firmware_version: String,
    pub serial_number: String,
}

/// Device connection status reported alongside readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub is_connected: bool,
    pub battery_percent: u8,
    pub samples_generated: u64,
    pub last_error: Option<String>,
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self {
            is_connected: false,
            battery_percent: crate::config::constants::device::DEFAULT_BATTERY_PERCENT,
            samples_generated: 0,
            last_error: None,
        }
    }
}
