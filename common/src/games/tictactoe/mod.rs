mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, WINNING_LINES, get_available_moves};
pub use bot_controller::{BotInput, calculate_move, find_winning_move, select_move};
pub use game_state::TicTacToeGameState;
pub use session::GameSession;
pub use settings::TicTacToeSettings;
pub use types::{CELL_COUNT, GameMode, GameStatus, Mark, MoveOutcome, Player, Scores, WinningLine};
pub use win_detector::winning_line_for;
