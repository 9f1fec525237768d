//! Crate-wide error types.
//!
//! Every error the engine can produce is a closed, enumerable set (§7):
//! there is no `Box<dyn Error>` erasure at the protocol boundary.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "rank {rank} out of bounds"),
            SquareError::FileOutOfBounds { file } => write!(f, "file {file} out of bounds"),
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    TooFewParts { found: usize },
    InvalidRank { rank: usize },
    TooManyFiles { rank: usize, files: usize },
    InvalidPiece { char: char },
    InvalidSideToMove { found: String },
    InvalidCastling { char: char },
    InvalidEnPassant { found: String },
    TooManyKings { color: &'static str },
    MissingKing { color: &'static str },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN has too few fields: found {found}, need at least 4")
            }
            FenError::InvalidRank { rank } => write!(f, "FEN has too many ranks at index {rank}"),
            FenError::TooManyFiles { rank, files } => {
                write!(f, "FEN rank {rank} has {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => write!(f, "invalid piece character '{char}'"),
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => write!(f, "invalid castling character '{char}'"),
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant target '{found}'")
            }
            FenError::TooManyKings { color } => write!(f, "{color} has more than one king"),
            FenError::MissingKing { color } => write!(f, "{color} has no king"),
        }
    }
}

impl std::error::Error for FenError {}

impl From<SquareError> for FenError {
    fn from(_: SquareError) -> Self {
        FenError::InvalidEnPassant { found: String::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    TooShort { notation: String },
    BadSquare { notation: String, source: SquareError },
    UnknownPromotion { char: char },
    NotLegal { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::TooShort { notation } => {
                write!(f, "move notation '{notation}' is too short")
            }
            MoveParseError::BadSquare { notation, source } => {
                write!(f, "move notation '{notation}' has a bad square: {source}")
            }
            MoveParseError::UnknownPromotion { char } => {
                write!(f, "unknown promotion piece '{char}'")
            }
            MoveParseError::NotLegal { notation } => {
                write!(f, "'{notation}' is not a legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Top-level error enum surfaced at the protocol/driver boundary (§7).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    Fen(FenError),
    MoveParse { notation: String, source: MoveParseError },
    UnknownCommand { line: String },
    MissingArgument { command: &'static str, argument: &'static str },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Fen(e) => write!(f, "malformed FEN: {e}"),
            EngineError::MoveParse { notation, source } => {
                write!(f, "illegal move '{notation}': {source}")
            }
            EngineError::UnknownCommand { line } => write!(f, "unknown command: {line}"),
            EngineError::MissingArgument { command, argument } => {
                write!(f, "'{command}' is missing required argument '{argument}'")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<FenError> for EngineError {
    fn from(e: FenError) -> Self {
        EngineError::Fen(e)
    }
}
