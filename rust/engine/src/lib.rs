//! # patience-engine: Patience Game Engine Core
//!
//! A deterministic engine for text-console patience games in the Klondike
//! family. Provides the pile/card model, dealing and card transfer, seeded
//! shuffling, and the interpreter that turns operator text into structured
//! commands.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card, CardId)
//! - [`deck`] - Deck construction for 1-4 suits and seeded ChaCha20 shuffling
//! - [`pile`] - Piles, print styles and the read-only render cursor
//! - [`table`] - Pile map grouped by pile type, plus the card arena
//! - [`engine`] - Pile registration, dealing, moves, undo/redo and game state
//! - [`command`] - Command-line tokenizer and descriptor parser
//! - [`rules`] - Injected win-check and validation policy
//! - [`game`] - Game state and deal methods
//! - [`errors`] - Error types for move-time failures
//!
//! ## Quick Start
//!
//! ```rust
//! use patience_engine::deck::SuitCount;
//! use patience_engine::engine::Engine;
//! use patience_engine::game::DealMethod;
//! use patience_engine::pile::PileType;
//! use patience_engine::rules::OpenRules;
//!
//! let mut engine = Engine::new(SuitCount::Four, Box::new(OpenRules), Some(42));
//! engine.register_pile(PileType::Stock, 1, 0, 0);
//! engine.register_pile(PileType::Foundation, 4, 3, 0);
//! engine.register_pile(PileType::Tableau, 7, 0, 1);
//! engine.deal(PileType::Tableau, DealMethod::Incrementing).unwrap();
//!
//! assert_eq!(engine.table().total_cards(), 52);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! The same seed always produces the same deck order:
//!
//! ```rust
//! use patience_engine::deck::{Deck, SuitCount};
//!
//! let mut d1 = Deck::new(SuitCount::Four);
//! let mut d2 = Deck::new(SuitCount::Four);
//! assert_eq!(d1.shuffle(Some(7)), 7);
//! d2.shuffle(Some(7));
//! assert_eq!(d1.cards(), d2.cards());
//! ```
//!
//! ## Parsing Commands
//!
//! ```rust
//! use patience_engine::command::{parse, CommandStatus};
//!
//! let parsed = parse("FLIP D");
//! assert_eq!(parsed.status, CommandStatus::MissingArguments);
//! assert_eq!(parsed.status_for_arity(), CommandStatus::Ok);
//! ```

pub mod cards;
pub mod command;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod pile;
pub mod rules;
pub mod table;
