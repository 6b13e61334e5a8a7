use crate::GameError;
use crate::games::SessionRng;
use super::board::{Board, WINNING_LINES, get_available_moves};
use super::session::GameSession;
use super::types::{Mark, Player};

pub struct BotInput {
    pub board: Board,
    pub bot_player: Player,
    pub opponent_player: Player,
}

impl BotInput {
    /// Snapshot for whoever holds the turn in `session`.
    pub fn from_session(session: &GameSession) -> Self {
        let bot_player = session.current_player();
        Self {
            board: *session.board(),
            bot_player,
            opponent_player: bot_player.opponent(),
        }
    }
}

pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Result<usize, GameError> {
    select_move(&input.board, input.bot_player, input.opponent_player, rng)
}

/// One-ply heuristic: complete our own line, otherwise block theirs,
/// otherwise play a uniformly random empty cell.
pub fn select_move(
    board: &Board,
    me: Player,
    opponent: Player,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if me == opponent {
        return Err(GameError::PreconditionViolation(format!(
            "Opponent and player share the {} mark",
            me
        )));
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(GameError::PreconditionViolation(
            "No empty cell left to play".to_string(),
        ));
    }

    if let Some(index) = find_winning_move(board, me) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(board, opponent) {
        return Ok(index);
    }

    Ok(calculate_random_move(&available_moves, rng))
}

/// First line, in `WINNING_LINES` order, where `player` holds two cells and
/// the third is empty.
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    let mark = player.mark();

    for line in WINNING_LINES.iter() {
        let mut owned = 0;
        let mut empty = None;
        let mut empty_count = 0;

        for &index in line {
            match board.get(index) {
                Some(cell) if cell == mark => owned += 1,
                Some(Mark::Empty) => {
                    empty = Some(index);
                    empty_count += 1;
                }
                _ => {}
            }
        }

        if owned == 2 && empty_count == 1 {
            return empty;
        }
    }

    None
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> usize {
    available_moves[rng.random_range(0..available_moves.len())]
}
