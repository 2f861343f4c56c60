use thiserror::Error;

/// Move-time failures reported by the engine's pile operations.
///
/// Kept separate from [`crate::command::CommandStatus`], which only describes
/// how an input line parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient pile size: requested {requested}, available {available}")]
    InsufficientPileSize { requested: usize, available: usize },
    #[error("Empty pile")]
    EmptyPile,
    #[error("{0}")]
    Misc(String),
}
