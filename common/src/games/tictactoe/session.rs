use crate::games::SessionRng;
use crate::{GameError, MoveRejection, log};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, GameStatus, MoveOutcome, Player, Scores, WinningLine};

/// One play session: the current game plus the running score and mode.
///
/// All mutation goes through the methods below; accessors hand out copies or
/// shared references only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    game_state: TicTacToeGameState,
    scores: Scores,
    mode: GameMode,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            scores: Scores::default(),
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        self.game_state.board()
    }

    pub fn current_player(&self) -> Player {
        self.game_state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn is_terminal(&self) -> bool {
        self.game_state.status().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.game_state.winning_line()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<MoveOutcome, GameError> {
        let outcome = match self.game_state.place_mark(index, player) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                log!("[session] {} rejected at cell {}: {}", player, index, rejection);
                return Err(rejection.into());
            }
        };

        match outcome.status {
            GameStatus::Won(winner) => {
                self.scores.record_win(winner);
                log!(
                    "[session] {} wins with {:?} (X {} - O {})",
                    winner,
                    outcome.winning_line.map(|line| line.cells),
                    self.scores.x_wins,
                    self.scores.o_wins
                );
            }
            GameStatus::Draw => log!("[session] Draw"),
            GameStatus::InProgress => {}
        }

        Ok(outcome)
    }

    /// Applies a move on behalf of the human side. In single mode the human
    /// only ever plays X.
    pub fn play_human_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let player = self.current_player();
        if self.mode == GameMode::Single && player != Player::X && !self.is_terminal() {
            return Err(MoveRejection::NotYourTurn(player).into());
        }
        self.apply_move(index, player)
    }

    pub fn needs_opponent_move(&self) -> bool {
        self.mode == GameMode::Single
            && !self.is_terminal()
            && self.current_player() == Player::O
    }

    /// Lets the built-in opponent play O if it is its turn. Returns `None`
    /// when no opponent move is due, which is always the case in multi mode.
    pub fn play_opponent_move(&mut self, rng: &mut SessionRng) -> Result<Option<MoveOutcome>, GameError> {
        if !self.needs_opponent_move() {
            return Ok(None);
        }

        let input = BotInput::from_session(self);
        let index = calculate_move(&input, rng)?;
        log!("[session] Opponent picks cell {}", index);

        self.apply_move(index, input.bot_player).map(Some)
    }

    pub fn reset(&mut self, keep_scores: bool) {
        self.game_state = TicTacToeGameState::new();
        if !keep_scores {
            self.scores = Scores::default();
        }
        log!("[session] Reset (keep_scores: {})", keep_scores);
    }

    pub fn play_again(&mut self) {
        self.reset(true);
    }

    pub fn reset_scores(&mut self) {
        self.reset(false);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        log!("[session] Mode set to {}", mode);
        self.reset(false);
    }

    /// Parses a textual mode before switching; an unknown name leaves the
    /// session untouched.
    pub fn set_mode_named(&mut self, mode: &str) -> Result<(), GameError> {
        let mode = mode.parse::<GameMode>()?;
        self.set_mode(mode);
        Ok(())
    }

    pub fn quit(&mut self) {
        self.set_mode(GameMode::Single);
    }
}
