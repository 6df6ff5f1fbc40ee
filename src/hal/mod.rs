// src/hal/mod.rs
//! Hardware abstraction layer for tremor reading sources

pub mod scripted;
pub mod simulator;
pub mod traits;
pub mod types;

pub use scripted::{DrawCounter, ScriptedSource};
pub use simulator::{SimulatedTremorSource, SimulatorConfig};
pub use traits::{ReadingSource, SourceError};
pub use types::{DeviceInfo, DeviceStatus, TremorReading};

use crate::config::{HalSettings, SourceKind};

/// Factory for reading sources selected by configuration
pub struct SourceFactory;

impl SourceFactory {
    /// Build the configured reading source
    ///
    /// Scripted sources carry their own replay data, so they cannot be
    /// constructed from configuration alone.
    pub fn create(settings: &HalSettings) -> Result<Box<dyn ReadingSource>, SourceError> {
        match settings.source {
            SourceKind::Simulator => {
                let config = settings.simulator.clone().unwrap_or_default();
                Ok(Box::new(SimulatedTremorSource::new(config)?))
            }
            SourceKind::Scripted => Err(SourceError::Configuration(
                "scripted sources are built from an explicit amplitude script".to_string(),
            )),
        }
    }
}
