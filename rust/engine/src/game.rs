use serde::{Deserialize, Serialize};

/// Lifecycle of a game. Only engine operations move between states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Game may continue and is in progress
    #[default]
    InProgress,
    /// Game has encountered an error
    Error,
    /// Game has been won
    Won,
    /// Game has become unwinnable or was abandoned
    Over,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Won | GameState::Over)
    }
}

/// Distribution pattern used to populate piles from the stock.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum DealMethod {
    /// One face-up card to each pile
    Single,
    /// Triangular deal: round `i` covers piles `i..N`
    Incrementing,
    /// Mirror of `Incrementing`: round `i` covers piles `0..N-i`
    Decrementing,
    /// Round-robin until the stock runs out
    All,
}
