// src/monitor/classifier.rs
//! Tremor status classification
//!
//! A status is a pure function of the latest amplitude. Bands are closed
//! on their lower bound and open on their upper bound, so exactly one
//! status applies to any amplitude in the sampled domain.

use crate::config::constants::monitor;
use serde::{Deserialize, Serialize};

/// Severity classification of a tremor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TremorStatus {
    Normal,
    Mild,
    Severe,
}

impl TremorStatus {
    /// Human-readable status label shown by the client
    pub fn label(&self) -> &'static str {
        match self {
            TremorStatus::Normal => "Normal Range",
            TremorStatus::Mild => "Mild Tremor",
            TremorStatus::Severe => "Severe Tremor",
        }
    }
}

impl std::fmt::Display for TremorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TremorStatus::Normal => write!(f, "normal"),
            TremorStatus::Mild => write!(f, "mild"),
            TremorStatus::Severe => write!(f, "severe"),
        }
    }
}

/// Amplitude bands separating the three statuses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBands {
    /// Amplitudes below this are Normal
    pub mild_floor: f32,
    /// Amplitudes at or above this are Severe
    pub severe_floor: f32,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            mild_floor: monitor::MILD_AMPLITUDE_FLOOR,
            severe_floor: monitor::SEVERE_AMPLITUDE_FLOOR,
        }
    }
}

impl StatusBands {
    /// Classify an amplitude against these bands
    ///
    /// Total over all inputs: values below the bands (including -inf)
    /// map to Normal, values above map to Severe, and non-finite values
    /// fall through to Severe.
    pub fn classify(&self, amplitude: f32) -> TremorStatus {
        if amplitude < self.mild_floor {
            TremorStatus::Normal
        } else if amplitude < self.severe_floor {
            TremorStatus::Mild
        } else {
            TremorStatus::Severe
        }
    }
}

/// Classify an amplitude against the default bands
pub fn classify(amplitude: f32) -> TremorStatus {
    StatusBands::default().classify(amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(39.9), TremorStatus::Normal);
        assert_eq!(classify(40.0), TremorStatus::Mild);
        assert_eq!(classify(69.9), TremorStatus::Mild);
        assert_eq!(classify(70.0), TremorStatus::Severe);
    }

    #[test]
    fn test_out_of_domain_amplitudes_are_total() {
        assert_eq!(classify(-10.0), TremorStatus::Normal);
        assert_eq!(classify(f32::NEG_INFINITY), TremorStatus::Normal);
        assert_eq!(classify(250.0), TremorStatus::Severe);
        assert_eq!(classify(f32::INFINITY), TremorStatus::Severe);
        assert_eq!(classify(f32::NAN), TremorStatus::Severe);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TremorStatus::Normal.label(), "Normal Range");
        assert_eq!(TremorStatus::Mild.label(), "Mild Tremor");
        assert_eq!(TremorStatus::Severe.label(), "Severe Tremor");
    }

    proptest! {
        #[test]
        fn prop_classification_is_monotonic(a in 30.0f32..100.0, b in 30.0f32..100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(lo) <= classify(hi));
        }

        #[test]
        fn prop_exactly_one_status_in_domain(amplitude in 30.0f32..100.0) {
            let status = classify(amplitude);
            let expected = if amplitude < 40.0 {
                TremorStatus::Normal
            } else if amplitude < 70.0 {
                TremorStatus::Mild
            } else {
                TremorStatus::Severe
            };
            prop_assert_eq!(status, expected);
        }
    }
}
