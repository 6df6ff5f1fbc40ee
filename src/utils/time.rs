use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time provider trait for dependency injection and testing
pub trait TimeProvider: Send + Sync {
    fn now_millis(&self) -> u64;
    fn now_secs(&self) -> u64 {
        self.now_millis() / 1000
    }
}

/// System time provider using the actual system clock
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> u64 {
        current_timestamp_millis()
    }
}

/// Mock time provider for deterministic testing
pub struct MockTimeProvider {
    current_time: AtomicU64,
}

impl MockTimeProvider {
    pub fn new(initial_time_millis: u64) -> Self {
        Self {
            current_time: AtomicU64::new(initial_time_millis),
        }
    }

    pub fn advance_by(&self, millis: u64) {
        self.current_time.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.store(millis, Ordering::Relaxed);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.current_time.load(Ordering::Relaxed)
    }
}

/// Wall-clock timestamp in milliseconds since the Unix epoch
pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
