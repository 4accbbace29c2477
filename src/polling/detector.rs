//! Change detector
//!
//! Holds the baseline snapshot and decides whether a newly fetched snapshot
//! is a change. Each baseline replacement bumps a monotonic version.

/// Outcome of observing a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// First snapshot seen, stored as baseline without counting as a change
    Initial,
    /// Structurally equal to the baseline, discarded
    Unchanged,
    /// Differs from the baseline (or there was none), now the baseline
    Changed {
        /// Baseline version after the replacement
        version: u64,
    },
}

impl Observation {
    /// Check if this observation should trigger a resync
    pub fn is_change(&self) -> bool {
        matches!(self, Observation::Changed { .. })
    }
}

/// Baseline tracker for a single poller
///
/// - `baseline`: last successfully fetched snapshot, if any
/// - `version`: number of baseline replacements so far (monotonic)
#[derive(Debug, Clone)]
pub struct ChangeDetector<S> {
    /// Last observed snapshot
    baseline: Option<S>,
    /// Baseline version, bumped on every change
    version: u64,
}

impl<S: PartialEq> Default for ChangeDetector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq> ChangeDetector<S> {
    /// Create a detector with no baseline
    pub fn new() -> Self {
        Self {
            baseline: None,
            version: 0,
        }
    }

    /// Seed the baseline without reporting a change
    ///
    /// Used for the startup fetch. Does not bump the version.
    pub fn seed(&mut self, snapshot: S) -> Observation {
        self.baseline = Some(snapshot);
        Observation::Initial
    }

    /// Compare a freshly fetched snapshot against the baseline
    ///
    /// A snapshot arriving while there is no baseline is a change: an
    /// empty baseline never equals an actual value.
    pub fn observe(&mut self, snapshot: S) -> Observation {
        if self.baseline.as_ref() == Some(&snapshot) {
            return Observation::Unchanged;
        }

        self.baseline = Some(snapshot);
        self.version += 1;
        Observation::Changed {
            version: self.version,
        }
    }

    /// Get the current baseline
    pub fn baseline(&self) -> Option<&S> {
        self.baseline.as_ref()
    }

    /// Check if a baseline has been established
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Get the baseline version
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct AppConfig {
        resources: Vec<String>,
        delete_dependents: bool,
    }

    fn config(resources: &[&str]) -> AppConfig {
        AppConfig {
            resources: resources.iter().map(|r| r.to_string()).collect(),
            delete_dependents: false,
        }
    }

    #[test]
    fn test_new() {
        let detector: ChangeDetector<AppConfig> = ChangeDetector::new();
        assert!(!detector.has_baseline());
        assert_eq!(detector.version(), 0);
    }

    #[test]
    fn test_seed_is_not_a_change() {
        let mut detector = ChangeDetector::new();

        let obs = detector.seed(config(&["pods"]));
        assert_eq!(obs, Observation::Initial);
        assert!(!obs.is_change());
        assert_eq!(detector.version(), 0);
        assert_eq!(detector.baseline(), Some(&config(&["pods"])));
    }

    #[test]
    fn test_structural_equality() {
        let mut detector = ChangeDetector::new();
        detector.seed(config(&["pods", "services"]));

        // Different allocation, same content
        let obs = detector.observe(config(&["pods", "services"]));
        assert_eq!(obs, Observation::Unchanged);
        assert_eq!(detector.version(), 0);
    }

    #[test]
    fn test_change_replaces_baseline() {
        let mut detector = ChangeDetector::new();
        detector.seed(config(&["pods"]));

        let mut changed = config(&["pods"]);
        changed.delete_dependents = true;

        let obs = detector.observe(changed.clone());
        assert_eq!(obs, Observation::Changed { version: 1 });
        assert_eq!(detector.baseline(), Some(&changed));
    }

    #[test]
    fn test_first_observation_without_baseline() {
        let mut detector = ChangeDetector::new();

        let obs = detector.observe(config(&["pods"]));
        assert_eq!(obs, Observation::Changed { version: 1 });
    }

    #[test]
    fn test_sequence_with_two_transitions() {
        let mut detector = ChangeDetector::new();
        detector.seed("a");

        let changes: Vec<_> = ["a", "a", "b", "b", "c"]
            .into_iter()
            .map(|s| detector.observe(s))
            .filter(Observation::is_change)
            .collect();

        assert_eq!(
            changes,
            vec![
                Observation::Changed { version: 1 },
                Observation::Changed { version: 2 },
            ]
        );
        assert_eq!(detector.baseline(), Some(&"c"));
    }

    #[test]
    fn test_change_back_to_earlier_value() {
        let mut detector = ChangeDetector::new();
        detector.seed(1);

        assert!(detector.observe(2).is_change());
        // Only the immediately preceding snapshot matters
        assert!(detector.observe(1).is_change());
        assert_eq!(detector.version(), 2);
    }
}
