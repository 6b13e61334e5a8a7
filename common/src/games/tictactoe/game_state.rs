use crate::MoveRejection;
use super::board::Board;
use super::types::{CELL_COUNT, GameStatus, MoveOutcome, Player, WinningLine};
use super::win_detector::winning_line_for;

/// Board, turn holder and terminal state of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn place_mark(&mut self, index: usize, player: Player) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        if player != self.current_player {
            return Err(MoveRejection::NotYourTurn(player));
        }

        if index >= CELL_COUNT {
            return Err(MoveRejection::OutOfBounds(index));
        }

        if !self.board.is_valid_move(index) {
            return Err(MoveRejection::CellOccupied(index));
        }

        self.board.set(index, player.mark());

        self.check_game_over(player);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            index,
            player,
            status: self.status,
            winning_line: self.winning_line,
        })
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    // Only the mover can have completed a line.
    fn check_game_over(&mut self, player: Player) {
        if let Some(line) = winning_line_for(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
