//! Score tracking for a ride

use serde::{Deserialize, Serialize};

use crate::display_distance;
use crate::tuning::Tuning;

/// Current and best score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Score of the ride in progress (or the one that just ended)
    pub score: u64,
    /// Best crash score seen so far
    pub best: u64,
}

impl Session {
    pub fn new(best: u64) -> Self {
        Self { score: 0, best }
    }

    /// Start a fresh ride, keeping the record
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Credit one tick of riding
    pub fn advance(&mut self, is_boosting: bool, tuning: &Tuning) -> u64 {
        let gained = if is_boosting {
            tuning.boost_score_per_tick
        } else {
            tuning.cruise_score_per_tick
        };
        self.score = self.score.saturating_add(gained);
        self.score
    }

    /// Promote `score` to the record if it beats it
    ///
    /// Returns the (possibly unchanged) best and whether it changed.
    pub fn record_if_best(&mut self, score: u64) -> (u64, bool) {
        if score > self.best {
            self.best = score;
            (self.best, true)
        } else {
            (self.best, false)
        }
    }

    /// Meters shown on the HUD
    pub fn distance(&self) -> u64 {
        display_distance(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_rates() {
        let tuning = Tuning::standard();
        let mut s = Session::new(0);
        assert_eq!(s.advance(false, &tuning), 1);
        assert_eq!(s.advance(true, &tuning), 3);
        assert_eq!(s.advance(false, &tuning), 4);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut s = Session { score: 500, best: 800 };
        s.reset();
        assert_eq!(s.score, 0);
        assert_eq!(s.best, 800);
    }

    #[test]
    fn test_record_if_best() {
        let mut s = Session::new(100);
        assert_eq!(s.record_if_best(99), (100, false));
        assert_eq!(s.record_if_best(100), (100, false));
        assert_eq!(s.record_if_best(101), (101, true));
        assert_eq!(s.best, 101);
    }

    #[test]
    fn test_distance_is_presentation_only() {
        let s = Session { score: 1239, best: 0 };
        assert_eq!(s.distance(), 123);
        assert_eq!(s.score, 1239);
    }

    proptest! {
        #[test]
        fn prop_best_is_running_max(start in 0u64..10_000, crashes in proptest::collection::vec(0u64..20_000, 0..50)) {
            let mut s = Session::new(start);
            for score in crashes {
                let before = s.best;
                let (best, changed) = s.record_if_best(score);
                prop_assert!(best >= before);
                prop_assert_eq!(best, before.max(score));
                prop_assert_eq!(changed, score > before);
            }
        }
    }
}
