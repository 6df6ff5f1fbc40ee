// src/monitor/sampler.rs
//! Timer-driven tremor monitor
//!
//! `TremorMonitor` owns the session object and the sampling task. The
//! task polls the reading source once per tick and commits the result
//! through a weak back-reference; a session that has been dropped fails
//! the upgrade and the tick becomes a no-op instead of a stale write.

use crate::config::MonitorConfig;
use crate::hal::traits::{ReadingSource, SourceError};
use crate::monitor::session::{MonitorSession, MonitorSnapshot, SessionState};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Tremor monitor driving one session from one reading source
pub struct TremorMonitor {
    session: Arc<RwLock<MonitorSession>>,
    source: Arc<Mutex<Box<dyn ReadingSource>>>,
    tick_interval: Duration,
    sampler: Option<JoinHandle<()>>,
    source_initialized: bool,
}

impl TremorMonitor {
    /// Create an idle monitor over a reading source
    pub fn new(config: &MonitorConfig, source: Box<dyn ReadingSource>) -> Self {
        Self {
            session: Arc::new(RwLock::new(MonitorSession::new(config))),
            source: Arc::new(Mutex::new(source)),
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            sampler: None,
            source_initialized: false,
        }
    }

    /// Start monitoring
    ///
    /// Initializes the source on first start and spawns the sampling
    /// task. The first sample lands one full interval out; resuming
    /// never produces an immediate reading. Idempotent while running.
    pub async fn start(&mut self) -> Result<(), SourceError> {
        if self.sampler.is_some() {
            return Ok(());
        }

        if !self.source_initialized {
            self.source.lock().await.initialize().await?;
            self.source_initialized = true;
        }

        self.session.write().set_monitoring(true);
        self.sampler = Some(spawn_sampler(
            Arc::downgrade(&self.session),
            Arc::clone(&self.source),
            self.tick_interval,
        ));

        tracing::debug!(interval_ms = self.tick_interval.as_millis() as u64, "monitoring started");
        Ok(())
    }

    /// Stop monitoring
    ///
    /// Cancels the pending tick by aborting the sampling task. A tick
    /// already committing under the session lock completes; nothing
    /// samples afterwards until `start` is called again.
    pub fn stop(&mut self) {
        if let Some(handle) = self.sampler.take() {
            handle.abort();
            tracing::debug!("monitoring stopped");
        }
        self.session.write().set_monitoring(false);
    }

    /// Toggle the severe-tremor alert gate
    pub fn set_alerts_enabled(&self, enabled: bool) {
        self.session.write().set_alerts_enabled(enabled);
    }

    /// Read-only snapshot for the presentation layer
    pub fn snapshot(&self) -> MonitorSnapshot {
        self.session.read().snapshot()
    }

    /// Current session lifecycle state
    pub fn state(&self) -> SessionState {
        self.session.read().state()
    }

    pub fn is_monitoring(&self) -> bool {
        self.session.read().is_monitoring()
    }
}

impl Drop for TremorMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_sampler(
    session: Weak<RwLock<MonitorSession>>,
    source: Arc<Mutex<Box<dyn ReadingSource>>>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // First tick one full period out, matching the reference timer.
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(session) = session.upgrade() else {
                return;
            };

            let reading = match source.lock().await.next_reading().await {
                Ok(reading) => reading,
                Err(error) => {
                    tracing::warn!(%error, "reading source failed, sampler exiting");
                    session.write().set_monitoring(false);
                    return;
                }
            };

            let outcome = session.write().apply_reading(reading);
            match outcome {
                Some(outcome) if outcome.alert_raised => {
                    tracing::warn!(
                        amplitude = reading.amplitude,
                        frequency_hz = reading.frequency_hz,
                        "severe tremor alert"
                    );
                }
                Some(outcome) => {
                    tracing::trace!(
                        status = %outcome.status,
                        amplitude = reading.amplitude,
                        "tick committed"
                    );
                }
                // Monitoring was switched off under us; stop sampling.
                None => return,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::scripted::ScriptedSource;

    #[tokio::test(start_paused = true)]
    async fn test_no_immediate_sample_on_start() {
        let source = ScriptedSource::from_amplitudes([50.0; 8]);
        let counter = source.draw_counter();

        let mut monitor = TremorMonitor::new(&MonitorConfig::default(), Box::new(source));
        monitor.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(counter.count(), 0);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent_while_running() {
        let source = ScriptedSource::from_amplitudes([50.0; 8]);
        let counter = source.draw_counter();

        let mut monitor = TremorMonitor::new(&MonitorConfig::default(), Box::new(source));
        monitor.start().await.unwrap();
        monitor.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert_eq!(counter.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_source_failure_ends_the_session() {
        let source = ScriptedSource::from_amplitudes([50.0]);

        let mut monitor = TremorMonitor::new(&MonitorConfig::default(), Box::new(source));
        monitor.start().await.unwrap();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!monitor.is_monitoring());
        assert_eq!(monitor.snapshot().history, vec![50.0]);
    }
}
