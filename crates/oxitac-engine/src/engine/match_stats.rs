use crate::core::mark::Mark;

/// Win/loss/draw tallies across a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl MatchStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    /// Records a finished game's winner (`None` for a draw).
    pub const fn record_outcome(&mut self, winner: Option<Mark>) {
        match winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    #[must_use]
    pub const fn wins(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallies_accumulate() {
        let mut stats = MatchStats::new();
        stats.record_outcome(Some(Mark::X));
        stats.record_outcome(Some(Mark::O));
        stats.record_outcome(Some(Mark::X));
        stats.record_outcome(None);

        assert_eq!(stats.wins(Mark::X), 2);
        assert_eq!(stats.wins(Mark::O), 1);
        assert_eq!(stats.draws(), 1);
        assert_eq!(stats.games_played(), 4);
    }

    #[test]
    fn test_reset() {
        let mut stats = MatchStats::new();
        stats.record_outcome(Some(Mark::O));
        stats.reset();
        assert_eq!(stats, MatchStats::new());
    }
}
