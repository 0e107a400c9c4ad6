//! # klondike-engine: Klondike Solitaire Rule Engine Core
//!
//! A deterministic state manager and rule engine for single-player Klondike
//! solitaire. Provides deck construction and shuffling, the opening deal,
//! move legality and application, and game-record logging with reproducible
//! RNG for replayable layouts and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`rules`] - Move legality predicates and table-rule configuration
//! - [`state`] - Pile groups, the opening deal, and the read surface
//! - [`moves`] - The three move operations as pure state transitions
//! - [`engine`] - Game container applying moves by whole-state replacement
//! - [`logger`] - Game-record serialization to JSONL
//! - [`errors`] - Error types for deal precondition violations
//!
//! ## Quick Start
//!
//! ```rust
//! use klondike_engine::engine::Engine;
//! use klondike_engine::moves::{Move, MoveSource};
//! use klondike_engine::rules::Rules;
//!
//! let mut engine = Engine::new(Some(42), Rules::default()).expect("fresh deck");
//!
//! // Draw from the stock; always legal.
//! assert!(engine.apply(Move::Draw));
//!
//! // Ask for a foundation move; rejection is a normal outcome that
//! // leaves the state untouched.
//! let applied = engine.apply(Move::ToFoundation {
//!     source: MoveSource::Waste,
//! });
//! let _ = applied;
//! ```
//!
//! ## Deterministic Layouts
//!
//! All layouts are reproducible using seeded RNG:
//!
//! ```rust
//! use klondike_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.cards(), d2.cards());
//! ```
//!
//! ## Move Legality
//!
//! Legality checks are pure and usable on their own:
//!
//! ```rust
//! use klondike_engine::cards::{Card, Rank, Suit};
//! use klondike_engine::rules::can_place_on_foundation;
//!
//! let ace = Card::new(Suit::Spades, Rank::Ace).faced_up();
//! let two = Card::new(Suit::Spades, Rank::Two).faced_up();
//!
//! assert!(can_place_on_foundation(ace, None));
//! assert!(can_place_on_foundation(two, Some(&ace)));
//! assert!(!can_place_on_foundation(two, None));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod moves;
pub mod rules;
pub mod state;
