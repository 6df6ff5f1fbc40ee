// src/reports.rs
//! Demo report data
//!
//! Trend rows and grip usage shares are hard-coded demo figures, the
//! same ones the reference client charts. Export and share surfaces are
//! intentionally absent.

use crate::control::GripPattern;
use serde::{Deserialize, Serialize};

/// Report aggregation period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Day,
    Week,
    Month,
}

impl Default for ReportPeriod {
    fn default() -> Self {
        ReportPeriod::Week
    }
}

impl ReportPeriod {
    pub fn all() -> [ReportPeriod; 3] {
        [ReportPeriod::Day, ReportPeriod::Week, ReportPeriod::Month]
    }
}

/// One day of tremor trend data
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendEntry {
    pub day: &'static str,
    pub intensity: u32,
    pub frequency_hz: f32,
}

/// Share of time spent in one grip pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GripUsage {
    pub grip: GripPattern,
    pub percent: u32,
}

/// Weekly report payload for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub period: ReportPeriod,
    pub trend: Vec<TrendEntry>,
    pub grip_usage: Vec<GripUsage>,
}

/// Weekly tremor intensity/frequency rows
pub fn weekly_trend() -> Vec<TrendEntry> {
    vec![
        TrendEntry { day: "Mon", intensity: 45, frequency_hz: 4.2 },
        TrendEntry { day: "Tue", intensity: 38, frequency_hz: 3.8 },
        TrendEntry { day: "Wed", intensity: 52, frequency_hz: 4.6 },
        TrendEntry { day: "Thu", intensity: 41, frequency_hz: 4.1 },
        TrendEntry { day: "Fri", intensity: 48, frequency_hz: 4.4 },
        TrendEntry { day: "Sat", intensity: 35, frequency_hz: 3.6 },
        TrendEntry { day: "Sun", intensity: 42, frequency_hz: 4.0 },
    ]
}

/// Grip usage shares over the reporting window
pub fn grip_usage() -> Vec<GripUsage> {
    vec![
        GripUsage { grip: GripPattern::Precision, percent: 35 },
        GripUsage { grip: GripPattern::Power, percent: 25 },
        GripUsage { grip: GripPattern::Tripod, percent: 20 },
        GripUsage { grip: GripPattern::Hook, percent: 12 },
        GripUsage { grip: GripPattern::Spherical, percent: 8 },
    ]
}

/// Assemble the report payload for a period
pub fn report_for(period: ReportPeriod) -> WeeklyReport {
    WeeklyReport {
        period,
        trend: weekly_trend(),
        grip_usage: grip_usage(),
    }
}

/// Highest trend intensity, used to scale the bar chart
pub fn peak_intensity(trend: &[TrendEntry]) -> u32 {
    trend.iter().map(|entry| entry.intensity).max().unwrap_or(0)
}
