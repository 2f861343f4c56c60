//! Card formatters for terminal display.
//!
//! The table renderer draws cards with short ASCII initials (`A`, `10`, `Q`
//! and `H`, `S`, ...). Replies to the player use the long name.
//!
//! ## Example
//!
//! ```rust
//! use patience_engine::cards::{Rank, Suit};
//! use patience_cli::formatters::{rank_initial, suit_initial, suit_name};
//!
//! assert_eq!(rank_initial(Rank::Ten), "10");
//! assert_eq!(suit_initial(Suit::Spades), "S");
//! assert_eq!(suit_name(Suit::Hearts), "Hearts");
//! ```

use patience_engine::cards::{Card, Rank, Suit};

const RANK_INITIALS: [&str; 14] = [
    "Jo", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

const RANK_NAMES: [&str; 14] = [
    "Joker", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Jack", "Queen", "King",
];

pub fn rank_initial(rank: Rank) -> &'static str {
    RANK_INITIALS[rank.value() as usize]
}

pub fn rank_name(rank: Rank) -> &'static str {
    RANK_NAMES[rank.value() as usize]
}

pub fn suit_initial(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    }
}

pub fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

/// Long form such as `"Queen of Spades"`.
///
/// ```rust
/// use patience_engine::cards::{Card, Rank, Suit};
/// # use patience_cli::formatters::format_card;
///
/// let card = Card::new(Suit::Spades, Rank::Queen);
/// assert_eq!(format_card(&card), "Queen of Spades");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{} of {}", rank_name(card.rank()), suit_name(card.suit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patience_engine::cards::{all_ranks, all_suits};

    #[test]
    fn initials_cover_every_card() {
        let faces: Vec<String> = all_suits()
            .into_iter()
            .flat_map(|s| all_ranks().into_iter().map(move |r| (s, r)))
            .map(|(s, r)| format!("{}{}", rank_initial(r), suit_initial(s)))
            .collect();
        assert_eq!(faces.len(), 52);
        assert!(faces.iter().all(|f| f.len() <= 3));
        assert!(faces.contains(&"10D".to_string()));
        assert!(faces.contains(&"AH".to_string()));
    }

    #[test]
    fn joker_has_its_own_initial() {
        assert_eq!(rank_initial(Rank::Joker), "Jo");
        assert_eq!(rank_name(Rank::Joker), "Joker");
    }

    #[test]
    fn long_names_ignore_orientation() {
        let mut card = Card::new(Suit::Diamonds, Rank::Ten);
        card.flip_face_up();
        assert_eq!(format_card(&card), "Ten of Diamonds");
    }
}
