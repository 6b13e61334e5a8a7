use derive_more::{Display, Error, From};

use crate::games::tictactoe::Player;

/// Why a move was refused. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    #[display("Game is already over")]
    GameOver,

    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    #[display("Cell {} is out of bounds", _0)]
    OutOfBounds(#[error(not(source))] usize),

    #[display("Cell {} is already marked", _0)]
    CellOccupied(#[error(not(source))] usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(MoveRejection),

    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(#[error(not(source))] String),

    #[display("Precondition violated: {}", _0)]
    PreconditionViolation(#[error(not(source))] String),

    #[display("Config file error: {}", _0)]
    ConfigIo(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejection_messages() {
        assert_eq!(MoveRejection::GameOver.to_string(), "Game is already over");
        assert_eq!(MoveRejection::NotYourTurn(Player::O).to_string(), "It's not O's turn");
        assert_eq!(MoveRejection::CellOccupied(4).to_string(), "Cell 4 is already marked");
    }

    #[test]
    fn test_invalid_move_wraps_rejection() {
        let err: GameError = MoveRejection::OutOfBounds(9).into();
        assert_eq!(err, GameError::InvalidMove(MoveRejection::OutOfBounds(9)));
        assert_eq!(err.to_string(), "Invalid move: Cell 9 is out of bounds");
    }

    #[test]
    fn test_invalid_move_exposes_rejection_as_source() {
        use std::error::Error as _;

        let err = GameError::from(MoveRejection::CellOccupied(2));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Cell 2 is already marked");

        let err = GameError::InvalidConfiguration("bad mode".to_string());
        assert!(err.source().is_none());
    }
}
