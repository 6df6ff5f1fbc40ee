// src/config/constants.rs
//! System-wide configuration constants

/// Tremor monitor constants
pub mod monitor {
    /// Sampling tick interval in the reference behavior
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
    pub const MIN_TICK_INTERVAL_MS: u64 = 100;
    pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

    /// Rolling display window of recent amplitudes
    pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
    pub const MAX_HISTORY_CAPACITY: usize = 1024;

    /// Amplitudes below this are classified Normal
    pub const MILD_AMPLITUDE_FLOOR: f32 = 40.0;
    /// Amplitudes at or above this are classified Severe
    pub const SEVERE_AMPLITUDE_FLOOR: f32 = 70.0;

    /// Display seed shown before the first sample arrives
    pub const SEED_FREQUENCY_HZ: f32 = 4.2;
    pub const SEED_AMPLITUDE: f32 = 65.0;
}

/// Simulated reading source constants
pub mod simulation {
    /// Tremor frequency domain in Hz
    pub const FREQUENCY_MIN_HZ: f32 = 3.0;
    pub const FREQUENCY_MAX_HZ: f32 = 8.0;

    /// Dimensionless amplitude intensity domain
    pub const AMPLITUDE_MIN: f32 = 30.0;
    pub const AMPLITUDE_MAX: f32 = 100.0;
}

/// Prosthetic device constants
pub mod device {
    pub const DEFAULT_BATTERY_PERCENT: u8 = 85;
    pub const DEFAULT_FIRMWARE_VERSION: &str = "2.1.0";
    pub const DEFAULT_DEVICE_NAME: &str = "Tremor Assist Prosthetic";
}

/// Prosthetic control constants
pub mod control {
    pub const DEFAULT_ADAPTIVE_DAMPING: u8 = 75;
    pub const DEFAULT_RESPONSIVENESS: u8 = 60;
    pub const SETTING_SCALE_MAX: u8 = 100;
}

/// Dashboard feed constants
pub mod dashboard {
    /// Status refresh cadence of the dashboard ticker
    pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;
}
