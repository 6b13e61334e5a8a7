use derive_more::Display;
use tictactoe_common::GameError;
use tictactoe_common::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    PlaceMark(usize),
    PlayAgain,
    ResetScores,
    SetMode(GameMode),
    Quit,
    Rules,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandParseError {
    #[display("Type a cell number (1-9) or 'help'")]
    Empty,

    #[display("Unknown command '{}', type 'help'", _0)]
    Unknown(String),

    #[display("Cell must be a number from 1 to {}, got '{}'", CELL_COUNT, _0)]
    BadCell(String),

    #[display("{}", _0)]
    BadMode(GameError),
}

impl ClientCommand {
    /// Parses one input line. Cells are numbered 1-9 for players and mapped to
    /// board indices 0-8.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandParseError::Empty);
        };

        if first.chars().all(|c| c.is_ascii_digit()) {
            return match first.parse::<usize>() {
                Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(ClientCommand::PlaceMark(cell - 1)),
                _ => Err(CommandParseError::BadCell(first.to_string())),
            };
        }

        match first.to_ascii_lowercase().as_str() {
            "again" | "play" => Ok(ClientCommand::PlayAgain),
            "reset" => Ok(ClientCommand::ResetScores),
            "mode" => {
                let mode = words.next().unwrap_or_default();
                mode.parse::<GameMode>()
                    .map(ClientCommand::SetMode)
                    .map_err(CommandParseError::BadMode)
            }
            "quit" => Ok(ClientCommand::Quit),
            "rules" => Ok(ClientCommand::Rules),
            "help" | "?" => Ok(ClientCommand::Help),
            "exit" => Ok(ClientCommand::Exit),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}
