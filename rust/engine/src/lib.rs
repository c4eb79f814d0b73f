//! # showdown-engine: Hand Ranking and Showdown Resolution
//!
//! A deterministic Texas Hold'em showdown engine for replaying recorded hands.
//! Given each player's hole cards and a five-card board it finds every player's
//! best five-card hand, ranks the hands with exact tie-breaks, picks the winners
//! and splits the pot. Every function is pure: the same inputs always produce the
//! same result and the same event trace.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), display and parsing
//! - [`hand`] - Best-of-seven hand evaluation and hand categories
//! - [`compare`] - Ordering of hand results and kicker introspection
//! - [`winners`] - Winner determination across several hands
//! - [`pot`] - Pot split arithmetic and remainder assignment
//! - [`showdown`] - Validated showdown resolution
//! - [`events`] - Ordered showdown event trace and sinks
//! - [`logger`] - JSONL event logger and showdown summaries
//! - [`config`] - Showdown options (remainder policy)
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::{evaluate_hand, Category};
//!
//! // Evaluate a 7-card poker hand
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Showdown With Events
//!
//! ```rust
//! use showdown_engine::cards::parse_cards;
//! use showdown_engine::events::ShowdownEvent;
//! use showdown_engine::showdown::{resolve_showdown_with_events, ShowdownConfig, ShowdownPlayer};
//!
//! let config = ShowdownConfig {
//!     players: vec![
//!         ShowdownPlayer::new("alice", parse_cards("Ah Ad").unwrap()),
//!         ShowdownPlayer::new("bob", parse_cards("Ac As").unwrap()),
//!         ShowdownPlayer::folded("carol"),
//!     ],
//!     community_cards: parse_cards("Th 9h 8d 4c 2s").unwrap(),
//!     pot_size: 100,
//! };
//!
//! let mut events: Vec<ShowdownEvent> = Vec::new();
//! let result = resolve_showdown_with_events(&config, &mut events).unwrap();
//! assert!(result.is_split_pot);
//! assert_eq!(result.amount_won("alice"), Some(50));
//! assert_eq!(events.len(), 5);
//! ```

pub mod cards;
pub mod compare;
pub mod config;
pub mod errors;
pub mod events;
pub mod hand;
pub mod logger;
pub mod pot;
pub mod showdown;
pub mod winners;
