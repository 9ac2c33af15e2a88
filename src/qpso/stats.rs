//! Hypervolume tracking for stagnation detection
//!
//! The engine records one hypervolume value per generation. Stagnation is
//! judged on the delta between consecutive generations only; the
//! "previous" value advances on every check regardless of outcome, so
//! slow cumulative drift never triggers a stop.

/// Minimum consecutive-generation hypervolume improvement below which the
/// run is considered stagnant.
pub const STAGNATION_EPSILON: f64 = 1e-9;

/// Engine-owned hypervolume bookkeeping
#[derive(Debug, Clone, Default)]
pub struct HypervolumeTracker {
    previous: f64,
    current: f64,
    history: Vec<f64>,
}

impl HypervolumeTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this generation's hypervolume and append it to the history
    pub fn record(&mut self, hypervolume: f64) {
        self.current = hypervolume;
        self.history.push(hypervolume);
    }

    /// Check whether the hypervolume has stagnated since the last check
    ///
    /// Advances the previous value to the current one unconditionally.
    pub fn check_stagnation(&mut self) -> bool {
        let delta = self.current - self.previous;
        self.previous = self.current;
        delta < STAGNATION_EPSILON
    }

    /// The most recently recorded hypervolume
    pub fn current(&self) -> f64 {
        self.current
    }

    /// All recorded values, one per completed generation
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_grows_one_per_record() {
        let mut tracker = HypervolumeTracker::new();
        for i in 0..5 {
            tracker.record(i as f64);
        }
        assert_eq!(tracker.history().len(), 5);
        assert_eq!(tracker.current(), 4.0);
    }

    #[test]
    fn test_flat_values_stagnate() {
        let mut tracker = HypervolumeTracker::new();
        tracker.record(1.0);
        assert!(!tracker.check_stagnation()); // first delta is 1.0
        tracker.record(1.0);
        assert!(tracker.check_stagnation());
    }

    #[test]
    fn test_improvement_resets_on_every_check() {
        let mut tracker = HypervolumeTracker::new();
        tracker.record(1.0);
        tracker.check_stagnation();
        // Improvement well above the epsilon: not stagnant
        tracker.record(1.5);
        assert!(!tracker.check_stagnation());
        // No further improvement: stagnant on the consecutive delta,
        // even though cumulative growth since the start is large
        tracker.record(1.5 + 1e-12);
        assert!(tracker.check_stagnation());
    }

    #[test]
    fn test_tiny_improvement_counts_as_stagnation() {
        let mut tracker = HypervolumeTracker::new();
        tracker.record(1.0);
        tracker.check_stagnation();
        tracker.record(1.0 + STAGNATION_EPSILON / 2.0);
        assert!(tracker.check_stagnation());
    }
}
