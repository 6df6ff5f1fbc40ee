// src/hal/simulator.rs
//! Simulated tremor reading source
//!
//! Draws frequency and amplitude independently and uniformly at random
//! within their configured domains on every call, the way the reference
//! client synthesizes its sensor feed. No correlation between the two is
//! modeled.

use crate::config::constants::simulation;
use crate::hal::traits::{ReadingSource, SourceError};
use crate::hal::types::{DeviceInfo, DeviceStatus, TremorReading};
use crate::utils::time::{SystemTimeProvider, TimeProvider};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulatorConfig {
    /// Half-open frequency domain in Hz, drawn as [min, max)
    pub frequency_min_hz: f32,
    pub frequency_max_hz: f32,

    /// Half-open amplitude domain, drawn as [min, max)
    pub amplitude_min: f32,
    pub amplitude_max: f32,

    /// Fixed RNG seed for reproducible streams; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            frequency_min_hz: simulation::FREQUENCY_MIN_HZ,
            frequency_max_hz: simulation::FREQUENCY_MAX_HZ,
            amplitude_min: simulation::AMPLITUDE_MIN,
            amplitude_max: simulation::AMPLITUDE_MAX,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), SourceError> {
        let ranges = [
            ("frequency", self.frequency_min_hz, self.frequency_max_hz),
            ("amplitude", self.amplitude_min, self.amplitude_max),
        ];

        for (field, min, max) in ranges {
            if !min.is_finite() || !max.is_finite() {
                return Err(SourceError::Configuration(format!(
                    "{} range must be finite, got {}..{}",
                    field, min, max
                )));
            }
            if min >= max {
                return Err(SourceError::Configuration(format!(
                    "{} range must be ascending, got {}..{}",
                    field, min, max
                )));
            }
        }

        Ok(())
    }
}

/// Simulated tremor source
pub struct SimulatedTremorSource {
    config: SimulatorConfig,
    rng: StdRng,
    sequence: u32,
    samples_generated: u64,
    initialized: bool,
    time_provider: Box<dyn TimeProvider + Send + Sync>,
}

impl SimulatedTremorSource {
    /// Create a simulator with configuration validation
    pub fn new(config: SimulatorConfig) -> Result<Self, SourceError> {
        Self::with_time_provider(config, Box::new(SystemTimeProvider))
    }

    /// Create a simulator with an injected time provider
    pub fn with_time_provider(
        config: SimulatorConfig,
        time_provider: Box<dyn TimeProvider + Send + Sync>,
    ) -> Result<Self, SourceError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            rng,
            sequence: 0,
            samples_generated: 0,
            initialized: false,
            time_provider,
        })
    }

    /// Create a seeded simulator over the default domains
    pub fn seeded(seed: u64) -> Self {
        let config = SimulatorConfig {
            seed: Some(seed),
            ..Default::default()
        };
        // Default domains always pass validation
        Self::new(config).expect("default simulator config is valid")
    }
}

#[async_trait]
impl ReadingSource for SimulatedTremorSource {
    async fn initialize(&mut self) -> Result<(), SourceError> {
        self.config.validate()?;
        self.sequence = 0;
        self.samples_generated = 0;
        self.initialized = true;
        Ok(())
    }

    async fn next_reading(&mut self) -> Result<TremorReading, SourceError> {
        if !self.initialized {
            return Err(SourceError::NotInitialized);
        }

        let frequency_hz = self
            .rng
            .gen_range(self.config.frequency_min_hz..self.config.frequency_max_hz);
        let amplitude = self
            .rng
            .gen_range(self.config.amplitude_min..self.config.amplitude_max);

        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        self.samples_generated += 1;

        Ok(TremorReading {
            timestamp_ms: self.time_provider.now_millis(),
            sequence,
            frequency_hz,
            amplitude,
        })
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            name: "Tremor Simulator".to_string(),
            firmware_version: env!("CARGO_PKG_VERSION").to_string(),
            serial_number: format!("SIM-{:08X}", self.config.seed.unwrap_or(0) as u32),
        }
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus {
            is_connected: self.initialized,
            samples_generated: self.samples_generated,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::MockTimeProvider;

    #[test]
    fn test_config_validation() {
        assert!(SimulatorConfig::default().validate().is_ok());

        let inverted = SimulatorConfig {
            amplitude_min: 100.0,
            amplitude_max: 30.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let non_finite = SimulatorConfig {
            frequency_max_hz: f32::NAN,
            ..Default::default()
        };
        assert!(non_finite.validate().is_err());
    }

    #[tokio::test]
    async fn test_readings_stay_in_domain() {
        let mut source = SimulatedTremorSource::seeded(7);
        source.initialize().await.unwrap();

        for _ in 0..200 {
            let reading = source.next_reading().await.unwrap();
            assert!(reading.frequency_hz >= simulation::FREQUENCY_MIN_HZ);
            assert!(reading.frequency_hz < simulation::FREQUENCY_MAX_HZ);
            assert!(reading.amplitude >= simulation::AMPLITUDE_MIN);
            assert!(reading.amplitude < simulation::AMPLITUDE_MAX);
        }
    }

    #[tokio::test]
    async fn test_sequence_numbers_increment() {
        let mut source = SimulatedTremorSource::seeded(7);
        source.initialize().await.unwrap();

        let mut last = None;
        for _ in 0..10 {
            let reading = source.next_reading().await.unwrap();
            if let Some(prev) = last {
                assert_eq!(reading.sequence, prev + 1);
            }
            last = Some(reading.sequence);
        }
        assert_eq!(source.status().samples_generated, 10);
    }

    #[tokio::test]
    async fn test_seeded_streams_are_reproducible() {
        let mut a = SimulatedTremorSource::seeded(42);
        let mut b = SimulatedTremorSource::seeded(42);
        a.initialize().await.unwrap();
        b.initialize().await.unwrap();

        for _ in 0..20 {
            let ra = a.next_reading().await.unwrap();
            let rb = b.next_reading().await.unwrap();
            assert_eq!(ra.frequency_hz, rb.frequency_hz);
            assert_eq!(ra.amplitude, rb.amplitude);
        }
    }

    #[tokio::test]
    async fn test_reading_before_initialize_fails() {
        let mut source = SimulatedTremorSource::seeded(1);
        let result = source.next_reading().await;
        assert!(matches!(result, Err(SourceError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_timestamps_follow_time_provider() {
        let config = SimulatorConfig {
            seed: Some(3),
            ..Default::default()
        };
        let mut source = SimulatedTremorSource::with_time_provider(
            config,
            Box::new(MockTimeProvider::new(1_000)),
        )
        .unwrap();
        source.initialize().await.unwrap();

        let reading = source.next_reading().await.unwrap();
        assert_eq!(reading.timestamp_ms, 1_000);
    }
}
