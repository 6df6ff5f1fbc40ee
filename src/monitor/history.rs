// src/monitor/history.rs
//! Bounded rolling window of recent amplitudes for chart display

use std::collections::VecDeque;

/// Fixed-capacity FIFO of raw amplitude values
///
/// Pushing beyond capacity evicts the oldest entry first; iteration
/// yields oldest to newest for chronological rendering. Display-only:
/// no aggregation is performed on the window.
#[derive(Debug, Clone)]
pub struct AmplitudeHistory {
    window: VecDeque<f32>,
    capacity: usize,
}

impl AmplitudeHistory {
    /// Create a history window; capacity 0 is clamped to 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, evicting the oldest entry beyond capacity
    pub fn push(&mut self, value: f32) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(value);
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.window.iter()
    }

    /// Snapshot of the window, oldest to newest
    pub fn values(&self) -> Vec<f32> {
        self.window.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let mut history = AmplitudeHistory::new(20);
        for i in 0..5 {
            history.push(i as f32);
        }

        assert_eq!(history.len(), 5);
        assert_eq!(history.values(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_push_beyond_capacity_evicts_oldest() {
        let mut history = AmplitudeHistory::new(20);
        for i in 0..25 {
            history.push(i as f32);
        }

        assert_eq!(history.len(), 20);
        let expected: Vec<f32> = (5..25).map(|i| i as f32).collect();
        assert_eq!(history.values(), expected);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = AmplitudeHistory::new(0);
        history.push(1.0);
        history.push(2.0);

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.values(), vec![2.0]);
    }

    #[test]
    fn test_clear_empties_the_window() {
        let mut history = AmplitudeHistory::new(4);
        history.push(1.0);
        history.clear();
        assert!(history.is_empty());
    }

    proptest! {
        #[test]
        fn prop_window_holds_the_most_recent_suffix(
            values in proptest::collection::vec(30.0f32..100.0, 0..64),
            capacity in 1usize..32,
        ) {
            let mut history = AmplitudeHistory::new(capacity);
            for &v in &values {
                history.push(v);
            }

            let start = values.len().saturating_sub(capacity);
            prop_assert_eq!(history.values(), values[start..].to_vec());
        }
    }
}
