use serde::{Deserialize, Serialize};

/// Represents one of the four suits of a standard deck.
/// Declaration order is the order suits are added to a partial deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Hearts and Diamonds are red, Clubs and Spades are black.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Represents the face value of a card. Jokers exist for variants but are
/// never part of a standard build.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Joker (0)
    Joker = 0,
    /// Ace (1)
    Ace,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Joker,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Stable index of a card in the table's card arena.
///
/// Piles hold ids, never cards, so moving a card between piles is an id
/// relocation and a card can only ever sit in one pile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CardId(pub usize);

/// A single playing card: fixed identity plus a face orientation that flips in
/// place during play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// New cards start face down.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn flip_face_up(&mut self) {
        self.face_up = true;
    }

    pub fn flip_face_down(&mut self) {
        self.face_up = false;
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

/// Ace through King; the Joker is left out on purpose.
pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_follow_face_order() {
        assert_eq!(Rank::Joker.value(), 0);
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        for r in all_ranks() {
            assert_eq!(Rank::from_u8(r.value()), r);
        }
        assert_eq!(Rank::from_u8(42), Rank::Joker);
    }

    #[test]
    fn red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn flipping_keeps_identity() {
        let mut c = Card::new(Suit::Clubs, Rank::Queen);
        let original = c;
        assert!(!c.is_face_up());
        c.flip_face_up();
        assert!(c.is_face_up());
        assert_eq!((c.suit(), c.rank()), (original.suit(), original.rank()));
        assert_ne!(c, original);
        c.flip_face_down();
        assert_eq!(c, original);
    }
}
