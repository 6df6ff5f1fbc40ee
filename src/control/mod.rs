// src/control/mod.rs
//! Prosthetic control: grip selection and tremor compensation settings

pub mod grip;

pub use grip::GripPattern;

use crate::config::constants::control;
use crate::notify::{Notice, Notifier};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Control errors
#[derive(Debug, Clone, Error)]
pub enum ControlError {
    #[error("Prosthetic device is not connected")]
    NotConnected,

    #[error("Invalid control settings: {}", .0.join("; "))]
    InvalidSettings(Vec<String>),
}

/// Grip and tremor-compensation settings sent to the device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    pub grip: GripPattern,
    /// Damping strength on a 0-100 scale
    pub adaptive_damping: u8,
    pub stabilization_mode: bool,
    /// Response speed on a 0-100 scale
    pub responsiveness: u8,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            grip: GripPattern::default(),
            adaptive_damping: control::DEFAULT_ADAPTIVE_DAMPING,
            stabilization_mode: true,
            responsiveness: control::DEFAULT_RESPONSIVENESS,
        }
    }
}

impl ControlSettings {
    /// Validate setting ranges, accumulating every violation
    pub fn validate(&self) -> Result<(), ControlError> {
        let mut errors = Vec::new();

        if self.adaptive_damping > control::SETTING_SCALE_MAX {
            errors.push(format!(
                "adaptive_damping {} exceeds {}",
                self.adaptive_damping,
                control::SETTING_SCALE_MAX
            ));
        }
        if self.responsiveness > control::SETTING_SCALE_MAX {
            errors.push(format!(
                "responsiveness {} exceeds {}",
                self.responsiveness,
                control::SETTING_SCALE_MAX
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ControlError::InvalidSettings(errors))
        }
    }
}

/// Controller applying settings to the prosthetic device
///
/// There is no real device link; connection state gates the apply path
/// exactly as the client's send-to-device action is gated.
pub struct ProstheticController {
    settings: ControlSettings,
    connected: bool,
}

impl ProstheticController {
    pub fn new(connected: bool) -> Self {
        Self {
            settings: ControlSettings::default(),
            connected,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Flip the connection state, reporting the transition
    pub fn toggle_connection(&mut self, notifier: &dyn Notifier) -> bool {
        self.connected = !self.connected;
        let notice = if self.connected {
            Notice::success("Device Connected", "Successfully paired with prosthetic device")
        } else {
            Notice::success("Device Disconnected", "Prosthetic device disconnected")
        };
        notifier.notify(notice);
        self.connected
    }

    pub fn settings(&self) -> ControlSettings {
        self.settings
    }

    pub fn select_grip(&mut self, grip: GripPattern) {
        self.settings.grip = grip;
    }

    /// Apply settings to the device
    ///
    /// Fails when disconnected; on success the selected grip becomes
    /// active and a confirmation notice is emitted.
    pub fn apply(
        &mut self,
        settings: ControlSettings,
        notifier: &dyn Notifier,
    ) -> Result<(), ControlError> {
        if !self.connected {
            notifier.notify(Notice::destructive(
                "Connection Error",
                "Please connect to your prosthetic device first.",
            ));
            return Err(ControlError::NotConnected);
        }

        settings.validate()?;
        self.settings = settings;

        tracing::info!(
            grip = %settings.grip,
            adaptive_damping = settings.adaptive_damping,
            stabilization = settings.stabilization_mode,
            responsiveness = settings.responsiveness,
            "control settings applied"
        );
        notifier.notify(Notice::success(
            "Settings Updated",
            format!("{} grip pattern activated.", settings.grip),
        ));
        Ok(())
    }
}
