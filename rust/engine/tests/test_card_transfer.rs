use patience_engine::deck::SuitCount;
use patience_engine::engine::{Engine, STOCK};
use patience_engine::errors::GameError;
use patience_engine::pile::{PileRef, PileType};
use patience_engine::rules::OpenRules;

fn tableau(i: usize) -> PileRef {
    PileRef::new(PileType::Tableau, i)
}

fn setup() -> Engine {
    let mut eng = Engine::new(SuitCount::Four, Box::new(OpenRules), Some(99));
    eng.register_pile(PileType::Stock, 1, 0, 0);
    eng.register_pile(PileType::Tableau, 4, 0, 1);
    eng
}

fn count(eng: &Engine, r: PileRef) -> usize {
    eng.table().pile(r).unwrap().card_count()
}

#[test]
fn moves_update_counts() {
    let mut eng = setup();
    eng.move_card(STOCK, tableau(0)).unwrap();
    eng.move_cards(STOCK, tableau(2), 2).unwrap();
    assert_eq!(count(&eng, tableau(0)), 1);
    assert_eq!(count(&eng, tableau(1)), 0);
    assert_eq!(count(&eng, tableau(2)), 2);
    assert_eq!(count(&eng, tableau(3)), 0);
    assert_eq!(count(&eng, STOCK), 49);
    assert_eq!(eng.table().total_cards(), 52);
}

#[test]
fn moving_from_empty_pile_fails_and_changes_nothing() {
    let mut eng = setup();
    assert_eq!(eng.move_card(tableau(1), tableau(3)), Err(GameError::EmptyPile));
    assert_eq!(count(&eng, tableau(1)), 0);
    assert_eq!(count(&eng, tableau(3)), 0);
}

#[test]
fn short_source_is_insufficient_not_empty() {
    let mut eng = setup();
    eng.move_cards(STOCK, tableau(0), 2).unwrap();
    let before: Vec<_> = eng.table().pile(tableau(0)).unwrap().cards().collect();

    let result = eng.move_cards(tableau(0), tableau(1), 3);
    assert_eq!(
        result,
        Err(GameError::InsufficientPileSize {
            requested: 3,
            available: 2
        })
    );
    let after: Vec<_> = eng.table().pile(tableau(0)).unwrap().cards().collect();
    assert_eq!(before, after);
    assert_eq!(count(&eng, tableau(1)), 0);
}

#[test]
fn moved_run_keeps_relative_order() {
    let mut eng = setup();
    eng.move_card(STOCK, tableau(1)).unwrap();
    let existing = eng.table().pile(tableau(1)).unwrap().top_card().unwrap();
    let expected: Vec<_> = eng.table().pile(STOCK).unwrap().cards().take(3).collect();

    eng.move_cards(STOCK, tableau(1), 3).unwrap();
    let pile: Vec<_> = eng.table().pile(tableau(1)).unwrap().cards().collect();
    assert_eq!(pile[0], existing);
    assert_eq!(&pile[1..], expected.as_slice());
}

#[test]
fn whole_pile_can_move() {
    let mut eng = setup();
    eng.move_cards(STOCK, tableau(3), 52).unwrap();
    assert_eq!(count(&eng, STOCK), 0);
    assert_eq!(count(&eng, tableau(3)), 52);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(GameError::EmptyPile.to_string(), "Empty pile");
    assert_eq!(
        GameError::InsufficientPileSize {
            requested: 3,
            available: 1
        }
        .to_string(),
        "Insufficient pile size: requested 3, available 1"
    );
}
