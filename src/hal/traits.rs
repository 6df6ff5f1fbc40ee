// src/hal/traits.rs
//! Reading-source trait for tremor data acquisition

use crate::hal::types::{DeviceInfo, DeviceStatus, TremorReading};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by reading sources
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Source configuration error: {0}")]
    Configuration(String),

    #[error("Source is not initialized")]
    NotInitialized,

    #[error("Scripted source exhausted after {0} readings")]
    Exhausted(usize),
}

/// Main trait for tremor reading sources
///
/// The monitor core polls a source once per tick; a source may be the
/// bundled simulator, a scripted test double, or a real device driver.
#[async_trait]
pub trait ReadingSource: Send {
    /// Prepare the source for sampling
    async fn initialize(&mut self) -> Result<(), SourceError>;

    /// Produce the next reading
    async fn next_reading(&mut self) -> Result<TremorReading, SourceError>;

    /// Get source device information
    fn device_info(&self) -> DeviceInfo;

    /// Get current device status
    fn status(&self) -> DeviceStatus;
}
