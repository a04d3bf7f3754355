//! Per-process game statistics

use super::Phase;

/// Results across the games played in one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n - 1]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Returns `false` (and records nothing) if `outcome` is not a final phase.
    pub fn record(&mut self, outcome: Phase, guesses_used: usize) -> bool {
        match outcome {
            Phase::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let slot = guesses_used.max(1);
                if self.guess_distribution.len() < slot {
                    self.guess_distribution.resize(slot, 0);
                }
                self.guess_distribution[slot - 1] += 1;
                true
            }
            Phase::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
                true
            }
            Phase::Setting | Phase::Playing => false,
        }
    }

    /// Win percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn ignores_unfinished_games() {
        let mut stats = Statistics::default();
        assert!(!stats.record(Phase::Playing, 3));
        assert!(!stats.record(Phase::Setting, 0));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn tracks_wins_losses_and_streaks() {
        let mut stats = Statistics::default();
        assert!(stats.record(Phase::Won, 3));
        assert!(stats.record(Phase::Won, 1));
        assert!(stats.record(Phase::Lost, 5));
        assert!(stats.record(Phase::Won, 3));

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.guess_distribution, vec![1, 0, 2]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
