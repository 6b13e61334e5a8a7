use super::types::{CELL_COUNT, Mark};

/// Rows, then columns, then diagonals. Callers that scan for the first match
/// depend on this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9-character pattern such as `"XX.OO...."`.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, ch) in pattern.chars().enumerate() {
            cells[i] = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.cells().len(), CELL_COUNT);
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_pattern_layout() {
        let board = Board::from_pattern("XX.OO....");
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(get_available_moves(&board), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_and_out_of_range() {
        let board = Board::from_pattern("X........");
        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(1));
        assert!(!board.is_valid_move(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_pattern("XOXXOOOXX");
        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_winning_lines_cover_each_cell() {
        for index in 0..CELL_COUNT {
            assert!(WINNING_LINES.iter().any(|line| line.contains(&index)));
        }
        assert_eq!(WINNING_LINES.iter().filter(|line| line.contains(&4)).count(), 4);
    }
}
