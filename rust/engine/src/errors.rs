use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Malformed card: {0:?}")]
    Malformed(String),
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(char),
}

/// Raised by the evaluator and the winner determiner on malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandEvaluationError {
    #[error("Hand must contain 5 to 7 cards, got {count}")]
    InvalidCardCount { count: usize },
    #[error("Duplicate card in hand: {card}")]
    DuplicateCard { card: Card },
    #[error("Expected exactly 2 hole cards, got {count}")]
    InvalidHoleCardCount { count: usize },
    #[error("Cannot determine winners from an empty entry list")]
    NoEntries,
}

/// Raised by the showdown resolver. Validation failures abort before any evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowdownError {
    #[error("Showdown requires exactly 5 community cards, got {count}")]
    InvalidCommunityCardCount { count: usize },
    #[error("Pot size must be a positive integer, got {pot}")]
    InvalidPotSize { pot: u64 },
    #[error("All players folded")]
    AllPlayersFolded,
    #[error("Player {player_id} must have exactly 2 hole cards, got {count}")]
    InvalidHoleCardCount { player_id: String, count: usize },
    #[error("Card {card} appears more than once in the showdown")]
    DuplicateCard { card: Card },
    #[error("Player id {player_id} is used by more than one seat")]
    DuplicatePlayerId { player_id: String },
    #[error(transparent)]
    Evaluation(#[from] HandEvaluationError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse showdown options: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid showdown options: {0}")]
    Invalid(String),
}
