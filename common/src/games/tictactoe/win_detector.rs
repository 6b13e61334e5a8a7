use super::board::{Board, WINNING_LINES};
use super::types::{Player, WinningLine};

/// First line (rows, columns, diagonals) fully held by `player`.
pub fn winning_line_for(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .map(|&cells| WinningLine::new(player, cells))
}
