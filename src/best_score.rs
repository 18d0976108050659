//! Best score tracking
//!
//! A single persisted scalar that only ever goes up.

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::KeyValueStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// A score qualifies only if it strictly beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.value
    }

    /// Record a finished run's score. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.value = score;
        true
    }

    /// Load from storage (absent or unreadable means zero)
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(BEST_SCORE_KEY) {
            Some(value) => {
                log::info!("Loaded best score {}", value);
                Self::new(value)
            }
            None => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        store.set(BEST_SCORE_KEY, self.value);
        log::info!("Best score saved ({})", self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_record_requires_strictly_greater() {
        let mut best = BestScore::new(100);
        assert!(!best.record(100));
        assert!(!best.record(50));
        assert_eq!(best.value(), 100);
        assert!(best.record(101));
        assert_eq!(best.value(), 101);
    }

    #[test]
    fn test_zero_score_never_qualifies_over_fresh_best() {
        let mut best = BestScore::default();
        assert!(!best.record(0));
    }

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        BestScore::new(420).save(&mut store);
        assert_eq!(BestScore::load(&store).value(), 420);
    }
}
