use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_ranks, all_suits, Card};
use crate::errors::GameError;

pub const CARDS_PER_SUIT: usize = 13;

/// Number of suits a deck is built from. Partial decks serve non-standard
/// variants such as one- and two-suit games.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SuitCount {
    One = 1,
    Two = 2,
    Three = 3,
    #[default]
    Four = 4,
}

impl SuitCount {
    pub fn suits(self) -> usize {
        self as usize
    }

    pub fn card_count(self) -> usize {
        self.suits() * CARDS_PER_SUIT
    }
}

impl TryFrom<u8> for SuitCount {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(SuitCount::One),
            2 => Ok(SuitCount::Two),
            3 => Ok(SuitCount::Three),
            4 => Ok(SuitCount::Four),
            _ => Err(GameError::Misc(format!(
                "suit count must be between 1 and 4, got {}",
                v
            ))),
        }
    }
}

/// Builds the canonical ordering: grouped by suit, ranks ascending, all face
/// down.
pub fn ordered_cards(suit_count: SuitCount) -> Vec<Card> {
    let mut v = Vec::with_capacity(suit_count.card_count());
    for &s in all_suits().iter().take(suit_count.suits()) {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}

/// Seed derived from the wall clock, used when the caller supplies none.
pub fn time_seed() -> u64 {
    let now = chrono::Utc::now();
    match now.timestamp_nanos_opt() {
        Some(nanos) => nanos as u64,
        None => now.timestamp_micros() as u64,
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    suit_count: SuitCount,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(suit_count: SuitCount) -> Self {
        Self {
            suit_count,
            cards: ordered_cards(suit_count),
        }
    }

    /// Shuffles from canonical order and returns the seed actually used.
    ///
    /// With `None` a time-derived seed is generated. The seed is the only
    /// entropy source, so the same seed always yields the same order.
    pub fn shuffle(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(time_seed);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        self.cards = ordered_cards(self.suit_count);
        self.cards.shuffle(&mut rng);
        seed
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
