use crate::domains::robots::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Workspace bounds must be non-negative: maxX={max_x}, maxY={max_y}")]
    InvalidWorkspace { max_x: i32, max_y: i32 },

    #[error("Position out of bounds: {position}")]
    OutOfBounds { position: Position },

    #[error("Final position already occupied by another robot: {position}")]
    PositionOccupied { position: Position },

    #[error("Unknown instruction: {symbol}")]
    UnknownInstruction { symbol: char },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApplicationError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput { line, reason: reason.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
