//! Tests for game sessions against the computer.

use cube_tictactoe::{
    ComputerMove, Difficulty, GameSession, Mark, Outcome, SessionConfig, SessionError, run_matches,
};

#[test]
fn test_full_game_against_hard_computer() {
    let mut session = GameSession::new(SessionConfig::default().with_difficulty(Difficulty::Hard));
    while session.outcome() == Outcome::InProgress {
        if session.is_computer_turn() {
            assert!(session.play_computer_now().is_some());
        } else {
            let index = session.game().board().empty_indices()[0];
            session.play(index).unwrap();
        }
    }
    assert!(session.outcome().is_terminal());
    let status = session.status_text();
    assert!(status.starts_with("Winner:") || status == "It's a draw!");
}

#[test]
fn test_human_cannot_move_for_computer() {
    let mut session = GameSession::new(SessionConfig::default().with_computer_mark(Mark::X));
    assert!(session.is_computer_turn());
    assert_eq!(session.play(0), Err(SessionError::ComputerToMove));
}

#[test]
fn test_reset_bumps_generation_and_drops_old_moves() {
    let mut session = GameSession::new(SessionConfig::default());
    session.play(13).unwrap();
    let turn = session.computer_turn().unwrap();
    let index = turn.select().unwrap();

    session.reset();
    assert_eq!(session.generation(), turn.generation + 1);
    assert_eq!(
        session.apply_computer_move(ComputerMove {
            generation: turn.generation,
            index,
        }),
        None
    );
    assert_eq!(session.game().board().empty_indices().len(), 27);
}

#[tokio::test]
async fn test_simulated_series_adds_up() {
    let summary = run_matches(Difficulty::Medium, Difficulty::Hard, 3, Mark::X)
        .await
        .unwrap();
    assert_eq!(summary.games, 3);
    assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 3);
}
