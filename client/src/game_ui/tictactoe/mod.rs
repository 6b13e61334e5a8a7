use tictactoe_common::{GameError, MoveRejection};
use tictactoe_common::games::tictactoe::{
    Board, GameMode, GameSession, GameStatus, Mark, Player, Scores, WinningLine,
};

pub const RULES: &str = "Tic Tac Toe Rules:
  - Players take turns placing X and O
  - First to get 3 in a row wins
  - Can be horizontal, vertical or diagonal
  - Type the number of any empty cell to play";

pub const HELP: &str = "Commands:
  1-9            place your mark in that cell
  again          play again, keep the score
  reset          reset the board and the score
  mode <single|multi>
                 switch mode (resets the score)
  quit           back to single player, score cleared
  rules          show the rules
  exit           leave the game";

const ROW_SEPARATOR: &str = "---+---+---";

/// Empty cells show their 1-based number; cells of the winning line are
/// wrapped in asterisks.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let cells: Vec<String> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, mark)| {
            let symbol = match mark {
                Mark::X => "X".to_string(),
                Mark::O => "O".to_string(),
                Mark::Empty => (index + 1).to_string(),
            };
            match winning_line {
                Some(line) if line.contains(index) => format!("*{}*", symbol),
                _ => format!(" {} ", symbol),
            }
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn score_line(scores: Scores) -> String {
    format!("Score  X: {}  O: {}", scores.x_wins, scores.o_wins)
}

pub fn mode_banner(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Single => "Mode 1 Player - You are X",
        GameMode::Multi => "Mode 2 Players - X starts",
    }
}

pub fn turn_message(mode: GameMode, player: Player) -> String {
    match (mode, player) {
        (GameMode::Single, Player::X) => "Your turn (X)".to_string(),
        (GameMode::Single, Player::O) => "AI thinking ...".to_string(),
        (GameMode::Multi, player) => format!("Player {}'s turn", player),
    }
}

pub fn game_over_message(mode: GameMode, status: GameStatus) -> Option<String> {
    let message = match (status, mode) {
        (GameStatus::InProgress, _) => return None,
        (GameStatus::Draw, _) => "It's a draw!".to_string(),
        (GameStatus::Won(Player::X), GameMode::Single) => "Congratulations, you won!".to_string(),
        (GameStatus::Won(Player::O), GameMode::Single) => "Sorry, you lost!".to_string(),
        (GameStatus::Won(player), GameMode::Multi) => format!("Player {} wins!", player),
    };
    Some(message)
}

pub fn status_message(session: &GameSession) -> String {
    game_over_message(session.mode(), session.status())
        .unwrap_or_else(|| turn_message(session.mode(), session.current_player()))
}

/// Player-facing text for a refused action; cells are reported 1-based.
pub fn describe_error(err: &GameError) -> String {
    match err {
        GameError::InvalidMove(MoveRejection::CellOccupied(index)) => {
            format!("Cell {} is already taken", index + 1)
        }
        GameError::InvalidMove(MoveRejection::OutOfBounds(index)) => {
            format!("Cell {} does not exist", index + 1)
        }
        GameError::InvalidMove(MoveRejection::NotYourTurn(player)) => {
            format!("Wait, it's not {}'s turn", player)
        }
        GameError::InvalidMove(MoveRejection::GameOver) => {
            "The game is over, type 'again' to play again".to_string()
        }
        other => other.to_string(),
    }
}

pub fn render_session(session: &GameSession) -> String {
    let mut out = render_board(session.board(), session.winning_line());
    out.push_str("\n\n");
    out.push_str(&score_line(session.scores()));
    out.push('\n');
    out.push_str(&status_message(session));
    if session.is_terminal() {
        out.push_str("\nType 'again' to play again or 'reset' to clear the score.");
    }
    out
}
