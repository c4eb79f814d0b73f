use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::HandEvaluationError;
use crate::hand::{evaluate_hand, HandRank};

/// What separates two hand results.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decider {
    /// The categories differ.
    Category,
    /// Same category; the kicker at this zero-based index differs first.
    Kicker(usize),
    /// The hands are exactly equal.
    Tie,
}

/// Total order over hand results: category first, then kickers pairwise.
/// A kicker list that is a strict prefix of the other ranks lower, so `Equal`
/// holds exactly when the two results are `==`.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::compare::compare_hand_ranks;
/// use showdown_engine::hand::evaluate_hand;
///
/// let wheel = evaluate_hand(&parse_cards("Ah 2c 3d 4s 5h").unwrap()).unwrap();
/// let six_high = evaluate_hand(&parse_cards("2c 3d 4s 5h 6c").unwrap()).unwrap();
/// assert!(compare_hand_ranks(&wheel, &six_high).is_lt());
/// ```
pub fn compare_hand_ranks(a: &HandRank, b: &HandRank) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => {
            for (x, y) in a.kickers.iter().zip(b.kickers.iter()) {
                match x.cmp(y) {
                    Ordering::Equal => continue,
                    ord => return ord,
                }
            }
            a.kickers.len().cmp(&b.kickers.len())
        }
        ord => ord,
    }
}

/// Evaluates both card sets, then compares them.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Result<Ordering, HandEvaluationError> {
    let ra = evaluate_hand(a)?;
    let rb = evaluate_hand(b)?;
    Ok(compare_hand_ranks(&ra, &rb))
}

pub fn are_hands_equal(a: &HandRank, b: &HandRank) -> bool {
    compare_hand_ranks(a, b).is_eq()
}

pub fn decided_by(a: &HandRank, b: &HandRank) -> Decider {
    if a.category != b.category {
        return Decider::Category;
    }
    let shared = a.kickers.len().min(b.kickers.len());
    match a.kickers.iter().zip(b.kickers.iter()).position(|(x, y)| x != y) {
        Some(i) => Decider::Kicker(i),
        None if a.kickers.len() != b.kickers.len() => Decider::Kicker(shared),
        None => Decider::Tie,
    }
}

/// Index of the first kicker that differs between two hands of the same category.
/// `None` when the hands tie exactly or differ by category.
pub fn deciding_kicker_index(a: &HandRank, b: &HandRank) -> Option<usize> {
    match decided_by(a, b) {
        Decider::Kicker(i) => Some(i),
        Decider::Category | Decider::Tie => None,
    }
}
