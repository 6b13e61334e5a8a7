use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameSession, Scores};
use tictactoe_common::log;

use crate::game_ui::tictactoe::{HELP, RULES, describe_error, mode_banner, render_session};
use crate::state::ClientCommand;

/// Drives `session` from line commands until `exit` or end of input and
/// returns the final score.
pub async fn run_tictactoe_game<R, W>(
    session: &mut GameSession,
    rng: &mut SessionRng,
    opponent_delay: Duration,
    input: R,
    output: &mut W,
) -> std::io::Result<Scores>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", mode_banner(session.mode()))?;
    writeln!(output, "{}", render_session(session))?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ClientCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark(index) => {
                if let Err(err) = session.play_human_move(index) {
                    writeln!(output, "{}", describe_error(&err))?;
                    continue;
                }
                writeln!(output, "{}", render_session(session))?;

                if session.needs_opponent_move() {
                    play_opponent_turn(session, rng, opponent_delay, output).await?;
                }
            }
            ClientCommand::PlayAgain => {
                session.play_again();
                writeln!(output, "{}", render_session(session))?;
            }
            ClientCommand::ResetScores => {
                session.reset_scores();
                writeln!(output, "{}", mode_banner(session.mode()))?;
                writeln!(output, "{}", render_session(session))?;
            }
            ClientCommand::SetMode(mode) => {
                session.set_mode(mode);
                writeln!(output, "{}", mode_banner(mode))?;
                writeln!(output, "{}", render_session(session))?;
            }
            ClientCommand::Quit => {
                session.quit();
                writeln!(output, "{}", mode_banner(session.mode()))?;
                writeln!(output, "{}", render_session(session))?;
            }
            ClientCommand::Rules => writeln!(output, "{}", RULES)?,
            ClientCommand::Help => writeln!(output, "{}", HELP)?,
            ClientCommand::Exit => break,
        }
        output.flush()?;
    }

    Ok(session.scores())
}

async fn play_opponent_turn<W: Write>(
    session: &mut GameSession,
    rng: &mut SessionRng,
    opponent_delay: Duration,
    output: &mut W,
) -> std::io::Result<()> {
    output.flush()?;
    if !opponent_delay.is_zero() {
        tokio::time::sleep(opponent_delay).await;
    }

    match session.play_opponent_move(rng) {
        Ok(Some(outcome)) => {
            writeln!(output, "AI plays cell {}", outcome.index + 1)?;
            writeln!(output, "{}", render_session(session))?;
        }
        Ok(None) => {}
        Err(err) => {
            log!("Opponent failed to move: {}", err);
            writeln!(output, "{}", describe_error(&err))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{GameMode, GameStatus, Mark, Player};
    use tokio::io::BufReader;

    async fn run(session: &mut GameSession, seed: u64, script: &str) -> (Scores, String) {
        let mut rng = SessionRng::new(seed);
        let mut output = Vec::new();
        let scores = run_tictactoe_game(
            session,
            &mut rng,
            Duration::ZERO,
            BufReader::new(script.as_bytes()),
            &mut output,
        )
        .await
        .unwrap();
        (scores, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_multi_player_game_to_a_win() {
        let mut session = GameSession::new(GameMode::Multi);
        let (scores, output) = run(&mut session, 0, "1\n4\n2\n5\n3\nexit\n").await;

        assert_eq!(scores, Scores { x_wins: 1, o_wins: 0 });
        assert_eq!(session.status(), GameStatus::Won(Player::X));
        assert!(output.starts_with("Mode 2 Players - X starts"));
        assert!(output.contains("*X*|*X*|*X*"));
        assert!(output.contains("Player X wins!"));
    }

    #[tokio::test]
    async fn test_single_player_move_gets_an_answer() {
        let mut session = GameSession::new(GameMode::Single);
        let (_, output) = run(&mut session, 42, "5\n").await;

        assert_eq!(session.board().empty_count(), 7);
        assert_eq!(session.board().get(4), Some(Mark::X));
        assert_eq!(session.current_player(), Player::X);
        assert!(output.contains("AI thinking ..."));
        assert!(output.contains("AI plays cell"));
    }

    #[tokio::test]
    async fn test_occupied_cell_is_reported_and_ignored() {
        let mut session = GameSession::new(GameMode::Multi);
        let (_, output) = run(&mut session, 0, "5\n5\n").await;

        assert!(output.contains("Cell 5 is already taken"));
        assert_eq!(session.board().empty_count(), 8);
        assert_eq!(session.current_player(), Player::O);
    }

    #[tokio::test]
    async fn test_mode_switch_clears_score() {
        let mut session = GameSession::new(GameMode::Multi);
        let script = "1\n4\n2\n5\n3\nmode single\n";
        let (scores, output) = run(&mut session, 0, script).await;

        assert_eq!(scores, Scores::default());
        assert_eq!(session.mode(), GameMode::Single);
        assert!(output.contains("Mode 1 Player - You are X"));
        assert!(output.trim_end().ends_with("Your turn (X)"));
    }

    #[tokio::test]
    async fn test_play_again_keeps_score_and_bad_input_is_survivable() {
        let mut session = GameSession::new(GameMode::Multi);
        let script = "1\n4\n2\n5\n3\n7\nagain\nundo\n12\nrules\n";
        let (scores, output) = run(&mut session, 0, script).await;

        assert_eq!(scores.x_wins, 1);
        assert_eq!(session.board().empty_count(), 9);
        assert!(output.contains("The game is over, type 'again' to play again"));
        assert!(output.contains("Unknown command 'undo'"));
        assert!(output.contains("Cell must be a number from 1 to 9, got '12'"));
        assert!(output.contains("Tic Tac Toe Rules:"));
    }
}
