use std::fmt;

use tracing::{debug, info, warn};

use crate::cards::CardId;
use crate::command::{CommandDescriptor, CommandStatus};
use crate::deck::{Deck, SuitCount};
use crate::errors::GameError;
use crate::game::{DealMethod, GameState};
use crate::pile::{PileRef, PileType};
use crate::rules::GameRules;
use crate::table::Table;

/// The single stock pile everything is dealt from.
pub const STOCK: PileRef = PileRef {
    kind: PileType::Stock,
    index: 0,
};

/// A player action the engine can take back and replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move {
        src: PileRef,
        dst: PileRef,
        count: usize,
    },
    Flip {
        pile: PileRef,
        card: CardId,
    },
}

/// Core game engine: owns the table and the deck, deals, moves cards and
/// tracks whether the game is finished.
///
/// Win detection is delegated to the injected [`GameRules`].
///
/// # Examples
///
/// ```
/// use patience_engine::deck::SuitCount;
/// use patience_engine::engine::Engine;
/// use patience_engine::game::DealMethod;
/// use patience_engine::pile::PileType;
/// use patience_engine::rules::OpenRules;
///
/// let mut engine = Engine::new(SuitCount::Four, Box::new(OpenRules), Some(12345));
/// assert_eq!(engine.seed(), 12345);
///
/// engine.register_pile(PileType::Stock, 1, 0, 0);
/// engine.register_pile(PileType::Tableau, 7, 0, 1);
///
/// match engine.deal(PileType::Tableau, DealMethod::Incrementing) {
///     Ok(dealt) => assert_eq!(dealt, 28),
///     Err(e) => println!("Failed to deal: {}", e),
/// }
/// ```
pub struct Engine {
    /// All piles and the card arena
    table: Table,
    /// Shuffled deck, held until the stock pile is registered
    deck: Option<Deck>,
    state: GameState,
    /// Seed the deck was actually shuffled with
    seed: u64,
    rules: Box<dyn GameRules>,
    undo: Vec<Action>,
    redo: Vec<Action>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("table", &self.table)
            .field("deck", &self.deck)
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("undo", &self.undo)
            .field("redo", &self.redo)
            .finish_non_exhaustive()
    }
}

fn unknown_pile(r: PileRef) -> GameError {
    GameError::Misc(format!("no such pile: {}", r))
}

impl Engine {
    /// Builds and shuffles a deck; `None` lets the deck pick a time-based seed.
    pub fn new(suit_count: SuitCount, rules: Box<dyn GameRules>, seed: Option<u64>) -> Self {
        let mut deck = Deck::new(suit_count);
        let seed = deck.shuffle(seed);
        info!(seed, suits = suit_count.suits(), "deck shuffled");
        Self {
            table: Table::new(),
            deck: Some(deck),
            state: GameState::InProgress,
            seed,
            rules,
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Read-only view for renderers and host policy.
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn rules(&self) -> &dyn GameRules {
        self.rules.as_ref()
    }

    /// Registers `count` piles of `kind` at x, x+1, ... on row `y`.
    ///
    /// The first time a stock pile exists, the whole shuffled deck is pushed
    /// into stock pile 0. Later registrations only add piles.
    pub fn register_pile(&mut self, kind: PileType, count: usize, x: usize, y: usize) {
        self.table.register(kind, count, x, y);
        info!(pile = %kind, count, x, y, "piles registered");

        if kind != PileType::Stock {
            return;
        }
        if let Some(deck) = self.deck.take() {
            if self.table.pile(STOCK).is_none() {
                self.deck = Some(deck);
                return;
            }
            let seeded = self.table.seed_pile(STOCK, deck.into_cards());
            debug!(cards = seeded.unwrap_or(0), "stock seeded from deck");
        }
    }

    /// Distributes cards from the stock onto every pile of `kind`, returning
    /// how many cards were dealt.
    ///
    /// A deal starts a new history: earlier moves can no longer be undone.
    ///
    /// Fails with [`GameError::EmptyPile`] without dealing anything if the
    /// stock is empty. A failure part-way through stops the deal; cards
    /// already moved stay where they are.
    pub fn deal(&mut self, kind: PileType, method: DealMethod) -> Result<usize, GameError> {
        let stock_count = self
            .table
            .pile(STOCK)
            .ok_or_else(|| GameError::Misc("stock pile not registered".into()))?
            .card_count();
        if kind == PileType::Stock {
            return Err(GameError::Misc("cannot deal onto the stock".into()));
        }
        let piles = self.table.pile_count(kind);
        if piles == 0 {
            return Err(GameError::Misc(format!("no {} piles registered", kind)));
        }
        if stock_count == 0 {
            return Err(GameError::EmptyPile);
        }

        let result = self.deal_with(kind, piles, method);
        // recorded moves no longer line up with the piles
        self.undo.clear();
        self.redo.clear();
        match &result {
            Ok(dealt) => info!(pile = %kind, ?method, dealt, "cards dealt"),
            Err(e) => warn!(pile = %kind, ?method, error = %e, "deal stopped"),
        }
        result
    }

    fn deal_with(&mut self, kind: PileType, piles: usize, method: DealMethod) -> Result<usize, GameError> {
        let mut dealt = 0;
        match method {
            DealMethod::Single => {
                for i in 0..piles {
                    self.deal_one(PileRef::new(kind, i), true)?;
                    dealt += 1;
                }
            }
            DealMethod::Incrementing => {
                for i in 0..piles {
                    for j in i..piles {
                        self.deal_one(PileRef::new(kind, j), i == j)?;
                        dealt += 1;
                    }
                }
            }
            DealMethod::Decrementing => {
                for i in (1..=piles).rev() {
                    for j in 0..i {
                        self.deal_one(PileRef::new(kind, j), j == i - 1)?;
                        dealt += 1;
                    }
                }
            }
            DealMethod::All => {
                let mut received = vec![false; piles];
                'rounds: loop {
                    for (i, got) in received.iter_mut().enumerate() {
                        if self.table.pile(STOCK).map_or(true, |p| p.is_empty()) {
                            break 'rounds;
                        }
                        self.deal_one(PileRef::new(kind, i), false)?;
                        *got = true;
                        dealt += 1;
                    }
                }
                for i in (0..piles).filter(|&i| received[i]) {
                    let target = PileRef::new(kind, i);
                    if let Some(id) = self.table.pile(target).and_then(|p| p.top_card()) {
                        self.set_face(id, true)?;
                    }
                }
            }
        }
        Ok(dealt)
    }

    fn deal_one(&mut self, target: PileRef, flip: bool) -> Result<(), GameError> {
        self.transfer(STOCK, target, 1)?;
        if flip {
            let id = self
                .table
                .pile(target)
                .and_then(|p| p.top_card())
                .ok_or_else(|| unknown_pile(target))?;
            self.set_face(id, true)?;
        }
        Ok(())
    }

    /// Moves `n` cards from the bottom of `src` onto the top of `dst`,
    /// keeping their order, and records the move for undo.
    ///
    /// An empty source is [`GameError::EmptyPile`]; a non-empty source
    /// holding fewer than `n` cards is [`GameError::InsufficientPileSize`].
    /// Neither pile changes on failure.
    pub fn move_cards(&mut self, src: PileRef, dst: PileRef, n: usize) -> Result<(), GameError> {
        self.transfer(src, dst, n)?;
        self.record(Action::Move { src, dst, count: n });
        debug!(%src, %dst, n, "cards moved");
        Ok(())
    }

    pub fn move_card(&mut self, src: PileRef, dst: PileRef) -> Result<(), GameError> {
        self.move_cards(src, dst, 1)
    }

    /// Turns the top card of `pile` face up and records it for undo.
    pub fn flip_top_card(&mut self, pile: PileRef) -> Result<CardId, GameError> {
        let id = self
            .table
            .pile(pile)
            .ok_or_else(|| unknown_pile(pile))?
            .top_card()
            .ok_or(GameError::EmptyPile)?;
        if self.table.card(id).is_some_and(|c| c.is_face_up()) {
            return Err(GameError::Misc(format!("top card of {} is already face up", pile)));
        }
        self.set_face(id, true)?;
        self.record(Action::Flip { pile, card: id });
        debug!(%pile, "top card flipped");
        Ok(id)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reverts the most recent recorded action exactly.
    pub fn undo(&mut self) -> Result<Action, GameError> {
        let action = self
            .undo
            .pop()
            .ok_or_else(|| GameError::Misc("nothing to undo".into()))?;
        if let Err(e) = self.revert(action) {
            self.state = GameState::Error;
            return Err(e);
        }
        self.redo.push(action);
        debug!(?action, "action undone");
        Ok(action)
    }

    /// Re-applies the most recently undone action.
    pub fn redo(&mut self) -> Result<Action, GameError> {
        let action = self
            .redo
            .pop()
            .ok_or_else(|| GameError::Misc("nothing to redo".into()))?;
        let applied = match action {
            Action::Move { src, dst, count } => self.transfer(src, dst, count),
            Action::Flip { card, .. } => self.set_face(card, true),
        };
        if let Err(e) = applied {
            self.state = GameState::Error;
            return Err(e);
        }
        self.undo.push(action);
        debug!(?action, "action redone");
        Ok(action)
    }

    /// Asks the host's validation policy about a parsed command.
    pub fn validate(&self, descriptor: &CommandDescriptor) -> CommandStatus {
        self.rules.validate(&self.table, descriptor)
    }

    /// Runs the injected win check and stores its verdict.
    pub fn check_for_win(&mut self) -> GameState {
        let next = self.rules.evaluate(&self.table, self.state);
        if next != self.state {
            info!(from = ?self.state, to = ?next, "game state changed");
        }
        self.state = next;
        next
    }

    /// Abandons the game.
    pub fn resign(&mut self) {
        if !self.state.is_finished() {
            info!("game abandoned");
            self.state = GameState::Over;
        }
    }

    fn record(&mut self, action: Action) {
        self.undo.push(action);
        self.redo.clear();
    }

    fn transfer(&mut self, src: PileRef, dst: PileRef, n: usize) -> Result<(), GameError> {
        let available = self.table.pile(src).ok_or_else(|| unknown_pile(src))?.card_count();
        if self.table.pile(dst).is_none() {
            return Err(unknown_pile(dst));
        }
        if available == 0 {
            return Err(GameError::EmptyPile);
        }
        if available < n {
            return Err(GameError::InsufficientPileSize {
                requested: n,
                available,
            });
        }

        let moved: Vec<CardId> = {
            let pile = self.table.pile_mut(src).ok_or_else(|| unknown_pile(src))?;
            (0..n).filter_map(|_| pile.pop_front()).collect()
        };
        let pile = self.table.pile_mut(dst).ok_or_else(|| unknown_pile(dst))?;
        for id in moved {
            pile.push(id);
        }
        Ok(())
    }

    fn revert(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Move { src, dst, count } => {
                let available = self.table.pile(dst).ok_or_else(|| unknown_pile(dst))?.card_count();
                if self.table.pile(src).is_none() {
                    return Err(unknown_pile(src));
                }
                if available < count {
                    return Err(GameError::InsufficientPileSize {
                        requested: count,
                        available,
                    });
                }
                let taken: Vec<CardId> = {
                    let pile = self.table.pile_mut(dst).ok_or_else(|| unknown_pile(dst))?;
                    (0..count).filter_map(|_| pile.pop()).collect()
                };
                let pile = self.table.pile_mut(src).ok_or_else(|| unknown_pile(src))?;
                for id in taken {
                    pile.push_front(id);
                }
                Ok(())
            }
            Action::Flip { card, .. } => self.set_face(card, false),
        }
    }

    fn set_face(&mut self, id: CardId, up: bool) -> Result<(), GameError> {
        let card = self
            .table
            .card_mut(id)
            .ok_or_else(|| GameError::Misc(format!("no such card: {}", id.0)))?;
        if up {
            card.flip_face_up();
        } else {
            card.flip_face_down();
        }
        Ok(())
    }
}
