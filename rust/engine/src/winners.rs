use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::compare::{are_hands_equal, compare_hand_ranks};
use crate::errors::HandEvaluationError;
use crate::hand::{evaluate_hand, HandRank};

/// One contender: a player identifier and the 5 to 7 cards they play with.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEntry {
    pub player_id: String,
    pub cards: Vec<Card>,
}

impl HandEntry {
    pub fn new(player_id: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            player_id: player_id.into(),
            cards,
        }
    }
}

/// Players holding the best hand, in entry order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WinnerSet {
    pub winner_ids: Vec<String>,
    pub is_tie: bool,
    /// The winning hand result shared by every winner.
    pub best: HandRank,
}

/// Finds every entry whose hand equals the strongest hand.
///
/// # Errors
///
/// [`HandEvaluationError::NoEntries`] for an empty list; any evaluation error of an entry.
pub fn determine_winners(entries: &[HandEntry]) -> Result<WinnerSet, HandEvaluationError> {
    let ranks = entries
        .iter()
        .map(|e| evaluate_hand(&e.cards))
        .collect::<Result<Vec<_>, _>>()?;
    let (indices, best) = winners_among(&ranks)?;
    let winner_ids: Vec<String> = indices
        .iter()
        .map(|&i| entries[i].player_id.clone())
        .collect();
    Ok(WinnerSet {
        is_tie: winner_ids.len() > 1,
        winner_ids,
        best,
    })
}

/// Positional variant of [`determine_winners`] for callers without stable identifiers.
pub fn determine_winner_indices(hands: &[Vec<Card>]) -> Result<Vec<usize>, HandEvaluationError> {
    let ranks = hands
        .iter()
        .map(|cards| evaluate_hand(cards))
        .collect::<Result<Vec<_>, _>>()?;
    winners_among(&ranks).map(|(indices, _)| indices)
}

/// Indices of the maximal results, ascending, plus the maximum itself.
pub(crate) fn winners_among(
    ranks: &[HandRank],
) -> Result<(Vec<usize>, HandRank), HandEvaluationError> {
    let best = ranks
        .iter()
        .max_by(|a, b| compare_hand_ranks(a, b))
        .ok_or(HandEvaluationError::NoEntries)?;
    let indices = ranks
        .iter()
        .enumerate()
        .filter(|(_, r)| are_hands_equal(r, best))
        .map(|(i, _)| i)
        .collect();
    Ok((indices, best.clone()))
}
