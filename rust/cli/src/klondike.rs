//! Klondike: table layout, win check and move policy for the console game.

use patience_engine::cards::Rank;
use patience_engine::command::{CommandDescriptor, CommandId, CommandStatus};
use patience_engine::deck::SuitCount;
use patience_engine::engine::Engine;
use patience_engine::errors::GameError;
use patience_engine::game::{DealMethod, GameState};
use patience_engine::pile::{PileRef, PileType};
use patience_engine::rules::GameRules;
use patience_engine::table::Table;

pub const FOUNDATION_COUNT: usize = 4;
pub const TABLEAU_COUNT: usize = 7;

/// Won once every foundation is topped by a King.
#[derive(Debug, Default, Clone, Copy)]
pub struct KlondikeRules;

impl KlondikeRules {
    fn registered(table: &Table, r: Option<PileRef>) -> Option<PileRef> {
        r.filter(|r| table.pile(*r).is_some())
    }
}

impl GameRules for KlondikeRules {
    fn evaluate(&self, table: &Table, current: GameState) -> GameState {
        let foundations = table.piles(PileType::Foundation);
        if foundations.is_empty() {
            return current;
        }
        let all_kings = foundations.iter().all(|f| {
            f.top_card()
                .and_then(|id| table.card(id))
                .is_some_and(|c| c.rank() == Rank::King)
        });
        if all_kings { GameState::Won } else { current }
    }

    fn validate(&self, table: &Table, descriptor: &CommandDescriptor) -> CommandStatus {
        match descriptor.command {
            Some(CommandId::Move) | Some(CommandId::Force) => {
                let src = Self::registered(table, descriptor.src());
                let dst = Self::registered(table, descriptor.dst());
                let (Some(src), Some(dst)) = (src, dst) else {
                    return CommandStatus::BadMove;
                };
                let src_empty = table.pile(src).map_or(true, |p| p.is_empty());
                if src_empty || src == dst || dst.kind == PileType::Stock {
                    return CommandStatus::BadMove;
                }
                CommandStatus::Ok
            }
            Some(CommandId::Flip) => match Self::registered(table, descriptor.src()) {
                Some(_) => CommandStatus::Ok,
                None => CommandStatus::BadMove,
            },
            _ => CommandStatus::Ok,
        }
    }
}

/// Sets up a fresh Klondike table: stock, discard, four foundations and
/// seven tableau columns dealt in a staircase.
pub fn new_game(seed: Option<u64>) -> Result<Engine, GameError> {
    let mut engine = Engine::new(SuitCount::Four, Box::new(KlondikeRules), seed);
    engine.register_pile(PileType::Stock, 1, 0, 0);
    engine.register_pile(PileType::Discard, 1, 1, 0);
    engine.register_pile(PileType::Foundation, FOUNDATION_COUNT, 3, 0);
    engine.register_pile(PileType::Tableau, TABLEAU_COUNT, 0, 1);
    engine.deal(PileType::Tableau, DealMethod::Incrementing)?;
    Ok(engine)
}
