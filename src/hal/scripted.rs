// src/hal/scripted.rs
//! Deterministic scripted reading source
//!
//! Replays a fixed amplitude sequence behind the same trait as the
//! simulator, so tests and demos can drive the monitor with known input.

use crate::config::constants::monitor;
use crate::hal::traits::{ReadingSource, SourceError};
use crate::hal::types::{DeviceInfo, DeviceStatus, TremorReading};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared observer of how many readings a scripted source has produced
///
/// The source itself moves into the sampling task; the handle stays with
/// the caller, which is how tests assert that a stopped or disposed
/// session draws nothing further.
#[derive(Debug, Clone, Default)]
pub struct DrawCounter(Arc<AtomicUsize>);

impl DrawCounter {
    /// Number of readings drawn so far
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Scripted tremor source replaying fixed amplitudes
pub struct ScriptedSource {
    script: VecDeque<f32>,
    script_len: usize,
    frequency_hz: f32,
    sequence: u32,
    draws: DrawCounter,
}

impl ScriptedSource {
    /// Build a source that replays the given amplitudes in order
    pub fn from_amplitudes<I>(amplitudes: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let script: VecDeque<f32> = amplitudes.into_iter().collect();
        let script_len = script.len();
        Self {
            script,
            script_len,
            frequency_hz: monitor::SEED_FREQUENCY_HZ,
            sequence: 0,
            draws: DrawCounter::default(),
        }
    }

    /// Fixed frequency attached to every replayed reading
    pub fn with_frequency(mut self, frequency_hz: f32) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Observer handle counting readings drawn from this source
    pub fn draw_counter(&self) -> DrawCounter {
        self.draws.clone()
    }

    /// Amplitudes not yet replayed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl ReadingSource for ScriptedSource {
    async fn initialize(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    async fn next_reading(&mut self) -> Result<TremorReading, SourceError> {
        let amplitude = self
            .script
            .pop_front()
            .ok_or(SourceError::Exhausted(self.script_len))?;

        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);
        self.draws.0.fetch_add(1, Ordering::SeqCst);

        Ok(TremorReading {
            timestamp_ms: sequence as u64 * monitor::DEFAULT_TICK_INTERVAL_MS,
            sequence,
            frequency_hz: self.frequency_hz,
            amplitude,
        })
    }

    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            name: "Scripted Source".to_string(),
            firmware_version: env!("CARGO_PKG_VERSION").to_string(),
            serial_number: "SCRIPT-0000".to_string(),
        }
    }

    fn status(&self) -> DeviceStatus {
        DeviceStatus {
            is_connected: true,
            samples_generated: self.draws.count() as u64,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_amplitudes_in_order() {
        let mut source = ScriptedSource::from_amplitudes([20.0, 45.0, 75.0]);
        let counter = source.draw_counter();

        for expected in [20.0, 45.0, 75.0] {
            let reading = source.next_reading().await.unwrap();
            assert_eq!(reading.amplitude, expected);
        }

        assert_eq!(counter.count(), 3);
        assert_eq!(source.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exhaustion_is_an_error() {
        let mut source = ScriptedSource::from_amplitudes([50.0]);
        source.next_reading().await.unwrap();

        let result = source.next_reading().await;
        assert!(matches!(result, Err(SourceError::Exhausted(1))));
    }

    #[tokio::test]
    async fn test_custom_frequency() {
        let mut source = ScriptedSource::from_amplitudes([50.0]).with_frequency(6.5);
        let reading = source.next_reading().await.unwrap();
        assert_eq!(reading.frequency_hz, 6.5);
    }
}
