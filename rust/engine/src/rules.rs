use crate::command::{CommandDescriptor, CommandStatus};
use crate::game::GameState;
use crate::table::Table;

/// Game-specific policy injected into the engine by the host game.
///
/// The engine itself knows no legality rules: it asks `evaluate` for the
/// state after a move and leaves `validate` to the host before a move is
/// attempted.
///
/// # Examples
///
/// ```
/// use patience_engine::game::GameState;
/// use patience_engine::pile::PileType;
/// use patience_engine::rules::GameRules;
/// use patience_engine::table::Table;
///
/// struct EmptyStockWins;
///
/// impl GameRules for EmptyStockWins {
///     fn evaluate(&self, table: &Table, current: GameState) -> GameState {
///         if table.piles(PileType::Stock).iter().all(|p| p.is_empty()) {
///             GameState::Won
///         } else {
///             current
///         }
///     }
/// }
///
/// let rules = EmptyStockWins;
/// assert_eq!(rules.evaluate(&Table::new(), GameState::InProgress), GameState::Won);
/// ```
pub trait GameRules {
    /// State the game is in after the latest accepted move.
    fn evaluate(&self, table: &Table, current: GameState) -> GameState;

    /// Checks a parsed command against the table before it runs.
    fn validate(&self, _table: &Table, _descriptor: &CommandDescriptor) -> CommandStatus {
        CommandStatus::Ok
    }
}

/// Rules that never end the game and accept every command.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenRules;

impl GameRules for OpenRules {
    fn evaluate(&self, _table: &Table, current: GameState) -> GameState {
        current
    }
}
