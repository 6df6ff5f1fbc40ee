// src/monitor/alert.rs
//! Severe-tremor alert gate
//!
//! The gate is stateless beyond its two inputs and is re-evaluated on
//! every state change. No de-duplication, cooldown, or auto-dismiss
//! exists; the reference behavior has none.

use crate::monitor::classifier::TremorStatus;
use serde::{Deserialize, Serialize};

/// Alert shown iff the status is severe and alerting is enabled
pub fn should_alert(status: TremorStatus, alerts_enabled: bool) -> bool {
    status == TremorStatus::Severe && alerts_enabled
}

/// Inline alert banner content for the monitoring view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertNotice {
    pub title: String,
    pub description: String,
}

impl AlertNotice {
    /// Banner raised for a severe tremor
    pub fn severe_tremor() -> Self {
        Self {
            title: "High Tremor Detected".to_string(),
            description: "Consider activating stabilization mode".to_string(),
        }
    }
}

/// Evaluate the gate, producing banner content when it opens
pub fn active_alert(status: TremorStatus, alerts_enabled: bool) -> Option<AlertNotice> {
    should_alert(status, alerts_enabled).then(AlertNotice::severe_tremor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_gate_truth_table() {
        assert!(should_alert(TremorStatus::Severe, true));
        assert!(!should_alert(TremorStatus::Severe, false));
        assert!(!should_alert(TremorStatus::Mild, true));
        assert!(!should_alert(TremorStatus::Normal, true));
    }

    #[test]
    fn test_active_alert_carries_banner_content() {
        let notice = active_alert(TremorStatus::Severe, true).unwrap();
        assert_eq!(notice.title, "High Tremor Detected");

        assert!(active_alert(TremorStatus::Severe, false).is_none());
        assert!(active_alert(TremorStatus::Normal, true).is_none());
    }
}
