//! Headless computer-versus-computer matches.

use crate::games::cube::{Difficulty, Mark, Outcome};
use crate::orchestrator::Orchestrator;
use crate::players::ComputerPlayer;
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, instrument};

/// Tally of a series of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MatchSummary {
    /// Difficulty of the X player.
    pub x: Difficulty,
    /// Difficulty of the O player.
    pub o: Difficulty,
    /// Games played.
    #[new(default)]
    pub games: usize,
    /// Games won by X.
    #[new(default)]
    pub x_wins: usize,
    /// Games won by O.
    #[new(default)]
    pub o_wins: usize,
    /// Drawn games.
    #[new(default)]
    pub draws: usize,
}

impl MatchSummary {
    /// Adds one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X ({}) vs O ({}): {} games, X won {}, O won {}, {} drawn",
            self.x, self.o, self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games between two computer players without delay.
#[instrument]
pub async fn run_matches(
    x: Difficulty,
    o: Difficulty,
    games: usize,
    first: Mark,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::new(x, o);
    for game in 0..games {
        let mut orchestrator = Orchestrator::new(
            first,
            Box::new(ComputerPlayer::new(format!("X ({})", x), x, Duration::ZERO)),
            Box::new(ComputerPlayer::new(format!("O ({})", o), o, Duration::ZERO)),
            None,
        );
        let outcome = orchestrator.run().await?;
        summary.record(outcome);
        info!(game, %outcome, "Match game finished");
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies() {
        let mut summary = MatchSummary::new(Difficulty::Easy, Difficulty::Hard);
        summary.record(Outcome::Won(Mark::X));
        summary.record(Outcome::Won(Mark::O));
        summary.record(Outcome::Won(Mark::O));
        assert_eq!(summary.games, 3);
        assert_eq!(summary.o_wins, 2);
        assert_eq!(summary.draws, 0);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = MatchSummary::new(Difficulty::Medium, Difficulty::Hard);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["x"], "medium");
        assert_eq!(json["games"], 0);
    }

    #[tokio::test]
    async fn test_every_game_is_decided() {
        let summary = run_matches(Difficulty::Easy, Difficulty::Medium, 5, Mark::X)
            .await
            .unwrap();
        assert_eq!(summary.games, 5);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 5);
    }
}
