use std::collections::BTreeMap;

use crate::cards::{Card, CardId};
use crate::pile::{Pile, PileRef, PileType};

/// Every pile on the table, grouped by type, plus the arena that owns the
/// cards they reference.
///
/// Within a type, registration order is addressing order: the third cell
/// registered is `PileRef { kind: Cell, index: 2 }`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    piles: BTreeMap<PileType, Vec<Pile>>,
    cards: Vec<Card>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `count` piles of `kind`, x incrementing from `x`. Returns
    /// `true` when this is the first registration of `kind`.
    pub fn register(&mut self, kind: PileType, count: usize, x: usize, y: usize) -> bool {
        let is_new = !self.piles.contains_key(&kind);
        let group = self.piles.entry(kind).or_default();
        group.extend((0..count).map(|i| Pile::new(kind, x + i, y)));
        is_new
    }

    pub fn is_registered(&self, kind: PileType) -> bool {
        self.piles.contains_key(&kind)
    }

    /// Number of registered pile types.
    pub fn group_count(&self) -> usize {
        self.piles.len()
    }

    pub fn piles(&self, kind: PileType) -> &[Pile] {
        self.piles.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pile_count(&self, kind: PileType) -> usize {
        self.piles(kind).len()
    }

    pub fn pile(&self, r: PileRef) -> Option<&Pile> {
        self.piles.get(&r.kind)?.get(r.index)
    }

    pub(crate) fn pile_mut(&mut self, r: PileRef) -> Option<&mut Pile> {
        self.piles.get_mut(&r.kind)?.get_mut(r.index)
    }

    /// All piles in type order, then registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PileRef, &Pile)> + '_ {
        self.piles.iter().flat_map(|(&kind, group)| {
            group
                .iter()
                .enumerate()
                .map(move |(index, pile)| (PileRef::new(kind, index), pile))
        })
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.0)
    }

    /// Card on top of the referenced pile, resolved through the arena.
    pub fn top_card_of(&self, r: PileRef) -> Option<&Card> {
        self.pile(r)?.top_card().and_then(|id| self.card(id))
    }

    /// Cards that exist on this table, in or out of piles.
    pub fn arena_len(&self) -> usize {
        self.cards.len()
    }

    /// Cards currently held by piles.
    pub fn total_cards(&self) -> usize {
        self.piles.values().flatten().map(Pile::card_count).sum()
    }

    /// Moves `cards` into the arena and pushes their new ids onto `target`,
    /// in order. Returns the number of cards seeded.
    pub(crate) fn seed_pile(&mut self, target: PileRef, cards: Vec<Card>) -> Option<usize> {
        // checked before the arena grows so a bad ref leaves no orphans
        self.pile(target)?;
        let first = self.cards.len();
        let n = cards.len();
        self.cards.extend(cards);
        let pile = self.pile_mut(target)?;
        for id in first..first + n {
            pile.push(CardId(id));
        }
        Some(n)
    }
}
