// src/dashboard.rs
//! Dashboard status feed
//!
//! The dashboard shows its own status badge, refreshed on a slower
//! cadence by drawing one of the three statuses uniformly at random.
//! This feed is deliberately independent of the monitoring screen's
//! classifier; the two are separate demo illustrations and are not
//! synchronized.

use crate::config::DashboardSettings;
use crate::monitor::classifier::TremorStatus;
use crate::utils::time::current_timestamp_millis;
use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Dashboard badge state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStatus {
    pub status: TremorStatus,
    pub updated_at_ms: u64,
}

/// Hard-coded daily summary card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySummary {
    pub active_hours: f32,
    pub grip_changes: u32,
    pub average_frequency_hz: f32,
}

impl DailySummary {
    /// Demo figures shown by the reference client
    pub fn demo() -> Self {
        Self {
            active_hours: 8.2,
            grip_changes: 12,
            average_frequency_hz: 4.1,
        }
    }
}

/// Draw a dashboard status uniformly from the three severities
pub fn draw_status<R: Rng>(rng: &mut R) -> TremorStatus {
    match rng.gen_range(0..3) {
        0 => TremorStatus::Normal,
        1 => TremorStatus::Mild,
        _ => TremorStatus::Severe,
    }
}

/// Periodically refreshed dashboard feed
pub struct DashboardFeed {
    state: Arc<RwLock<DashboardStatus>>,
    refresh_interval: Duration,
    seed: Option<u64>,
    ticker: Option<JoinHandle<()>>,
}

impl DashboardFeed {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            state: Arc::new(RwLock::new(DashboardStatus {
                status: TremorStatus::Normal,
                updated_at_ms: current_timestamp_millis(),
            })),
            refresh_interval: Duration::from_millis(settings.refresh_interval_ms),
            seed: None,
            ticker: None,
        }
    }

    /// Fix the RNG seed for a reproducible badge sequence
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start the refresh ticker; idempotent while running
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.ticker = Some(spawn_ticker(
            Arc::downgrade(&self.state),
            self.refresh_interval,
            self.seed,
        ));
    }

    /// Stop the refresh ticker
    pub fn stop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }

    /// Current badge state
    pub fn status(&self) -> DashboardStatus {
        *self.state.read()
    }
}

impl Drop for DashboardFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_ticker(
    state: Weak<RwLock<DashboardStatus>>,
    period: Duration,
    seed: Option<u64>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(state) = state.upgrade() else {
                return;
            };

            let status = draw_status(&mut rng);
            *state.write() = DashboardStatus {
                status,
                updated_at_ms: current_timestamp_millis(),
            };
            tracing::trace!(%status, "dashboard badge refreshed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_status_covers_all_severities() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(draw_status(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_demo_summary_figures() {
        let summary = DailySummary::demo();
        assert_eq!(summary.active_hours, 8.2);
        assert_eq!(summary.grip_changes, 12);
        assert_eq!(summary.average_frequency_hz, 4.1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_refreshes_on_its_own_cadence() {
        let mut feed = DashboardFeed::new(&DashboardSettings::default()).with_seed(5);
        let initial = feed.status();
        feed.start();

        tokio::time::sleep(Duration::from_millis(5100)).await;
        let refreshed = feed.status();
        assert!(refreshed.updated_at_ms >= initial.updated_at_ms);

        feed.stop();
        let stopped = feed.status();
        tokio::time::sleep(Duration::from_millis(15_000)).await;
        assert_eq!(feed.status(), stopped);
    }
}
