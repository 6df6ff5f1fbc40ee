// src/error.rs
//! Unified error handling
//!
//! Subsystem errors stay close to their modules; this type aggregates
//! them so callers composing the whole system propagate one error.

use thiserror::Error;

/// Unified error type for the tremor-assist core
#[derive(Debug, Error)]
pub enum TremorError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Source(#[from] crate::hal::SourceError),

    #[error(transparent)]
    Control(#[from] crate::control::ControlError),
}

/// Result type alias for tremor-assist operations
pub type TremorResult<T> = Result<T, TremorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlError;
    use crate::hal::SourceError;

    #[test]
    fn test_subsystem_errors_convert() {
        let err: TremorError = SourceError::NotInitialized.into();
        assert!(matches!(err, TremorError::Source(_)));

        let err: TremorError = ControlError::NotConnected.into();
        assert!(matches!(err, TremorError::Control(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TremorError>();
    }

    #[test]
    fn test_display_passes_through() {
        let err: TremorError = SourceError::NotInitialized.into();
        assert_eq!(err.to_string(), "Source is not initialized");
    }
}
