use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Role a pile plays on the table. Declaration order is also the order the
/// table walks pile groups in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PileType {
    /// Face-down source pile cards are dealt from
    Stock,
    Discard,
    Waste,
    Foundation,
    Cell,
    Tableau,
}

impl PileType {
    pub fn name(self) -> &'static str {
        match self {
            PileType::Stock => "stock",
            PileType::Discard => "discard",
            PileType::Waste => "waste",
            PileType::Foundation => "foundation",
            PileType::Cell => "cell",
            PileType::Tableau => "tableau",
        }
    }

    /// How a pile of this type is drawn on the console.
    pub fn print_style(self) -> PrintStyle {
        match self {
            PileType::Stock => PrintStyle::TopCardOnly,
            PileType::Discard => PrintStyle::BottomCardUnlessEmpty,
            PileType::Waste => PrintStyle::Nothing,
            PileType::Foundation | PileType::Cell => PrintStyle::BottomCardOnly,
            PileType::Tableau => PrintStyle::Cascade,
        }
    }
}

impl std::fmt::Display for PileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PrintStyle {
    Nothing,
    TopCardOnly,
    BottomCardOnly,
    /// Bottom card, or nothing at all when the pile is empty
    BottomCardUnlessEmpty,
    /// Every card, overlapped
    Cascade,
}

/// Display position in table columns/rows, not characters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Addresses one pile: its type plus its registration index within that type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PileRef {
    pub kind: PileType,
    pub index: usize,
}

impl PileRef {
    pub fn new(kind: PileType, index: usize) -> Self {
        Self { kind, index }
    }
}

/// An ordered run of cards. The back is the "top" (last card placed), the
/// front is the "bottom".
#[derive(Debug, Clone)]
pub struct Pile {
    kind: PileType,
    style: PrintStyle,
    coord: Coord,
    cards: VecDeque<CardId>,
}

impl Pile {
    pub fn new(kind: PileType, x: usize, y: usize) -> Self {
        Self {
            kind,
            style: kind.print_style(),
            coord: Coord { x, y },
            cards: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> PileType {
        self.kind
    }

    pub fn print_style(&self) -> PrintStyle {
        self.style
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: CardId) {
        self.cards.push_back(card);
    }

    /// `None` on an empty pile; emptiness is for the caller to judge.
    pub fn pop(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    pub fn push_front(&mut self, card: CardId) {
        self.cards.push_front(card);
    }

    pub fn pop_front(&mut self) -> Option<CardId> {
        self.cards.pop_front()
    }

    pub fn top_card(&self) -> Option<CardId> {
        self.cards.back().copied()
    }

    pub fn bottom_card(&self) -> Option<CardId> {
        self.cards.front().copied()
    }

    /// Card at `index` counted from the bottom; `None` when out of bounds.
    pub fn get_card(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    /// Bottom-to-top walk over the card ids.
    pub fn cards(&self) -> impl DoubleEndedIterator<Item = CardId> + ExactSizeIterator + '_ {
        self.cards.iter().copied()
    }

    /// Read-only cursor for presentation code. Each call starts a fresh walk.
    pub fn cursor(&self) -> PileCursor<'_> {
        PileCursor { pile: self, pos: 0 }
    }
}

/// Restartable cursor over a borrowed pile.
///
/// `next_card` steps toward the bottom (front) and `previous_card` toward the
/// top (back). Walking off either end yields `None` without failing.
#[derive(Debug, Clone)]
pub struct PileCursor<'a> {
    pile: &'a Pile,
    pos: isize,
}

impl<'a> PileCursor<'a> {
    /// Card at `offset` from the cursor position, without moving.
    pub fn peek(&self, offset: isize) -> Option<CardId> {
        let at = self.pos.checked_add(offset)?;
        if at < 0 {
            return None;
        }
        self.pile.get_card(at as usize)
    }

    pub fn current(&self) -> Option<CardId> {
        self.peek(0)
    }

    pub fn top_card(&mut self) -> Option<CardId> {
        self.pos = self.pile.card_count() as isize - 1;
        self.current()
    }

    pub fn bottom_card(&mut self) -> Option<CardId> {
        self.pos = 0;
        self.current()
    }

    pub fn next_card(&mut self) -> Option<CardId> {
        self.pos -= 1;
        self.current()
    }

    pub fn previous_card(&mut self) -> Option<CardId> {
        self.pos += 1;
        self.current()
    }

    pub fn pile(&self) -> &'a Pile {
        self.pile
    }
}
