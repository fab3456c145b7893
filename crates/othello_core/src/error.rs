use thiserror::Error;

use crate::types::{Position, Side};

/// Errors raised by board accessors and move application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is off the board")]
    OutOfRange(Position),

    /// The board is left unchanged when this is returned.
    #[error("{side} has no legal move at {position}")]
    IllegalMove { side: Side, position: Position },

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}
