use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Card, Rank};
use crate::compare::compare_hand_ranks;
use crate::errors::HandEvaluationError;

/// The ten hand-strength classes. Declaration order is strength order,
/// and the discriminant is the conventional 1 (high card) to 10 (royal flush) code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable result of evaluating a hand.
///
/// `kickers` is ordered most significant first; its length depends on the category:
///
/// | Category | kickers |
/// |---|---|
/// | RoyalFlush | `[A]` |
/// | StraightFlush, Straight | `[high card]` (the wheel reports `5`) |
/// | FourOfAKind | `[quad, kicker]` |
/// | FullHouse | `[trips, pair]` |
/// | Flush, HighCard | five ranks, descending |
/// | ThreeOfAKind | `[trips, k1, k2]` |
/// | TwoPair | `[high pair, low pair, kicker]` |
/// | OnePair | `[pair, k1, k2, k3]` |
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub kickers: Vec<Rank>,
}

impl HandRank {
    pub fn kicker_values(&self) -> Vec<u8> {
        self.kickers.iter().map(|r| r.value()).collect()
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hand_ranks(self, other)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        let mut sep = ": ";
        for k in &self.kickers {
            write!(f, "{}{}", sep, k)?;
            sep = " ";
        }
        Ok(())
    }
}

/// The best five-card hand found, with the cards that make it up (in input order).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestHand {
    pub rank: HandRank,
    pub cards: [Card; 5],
}

/// Evaluates the best five-card hand out of 5 to 7 cards.
///
/// Six and seven card inputs are resolved by classifying every five-card subset
/// and keeping the maximum.
///
/// # Errors
///
/// - [`HandEvaluationError::InvalidCardCount`] when fewer than 5 or more than 7 cards are given
/// - [`HandEvaluationError::DuplicateCard`] when the same card appears twice
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::hand::{evaluate_hand, Category};
///
/// let cards = parse_cards("As Ks Qs Js Ts").unwrap();
/// let rank = evaluate_hand(&cards).unwrap();
/// assert_eq!(rank.category, Category::RoyalFlush);
///
/// let wheel = parse_cards("Ac 2c 3c 4c 5c 9d Kh").unwrap();
/// let rank = evaluate_hand(&wheel).unwrap();
/// assert_eq!(rank.category, Category::StraightFlush);
/// assert_eq!(rank.kicker_values(), vec![5]);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<HandRank, HandEvaluationError> {
    evaluate_best_hand(cards).map(|best| best.rank)
}

pub fn evaluate_best_hand(cards: &[Card]) -> Result<BestHand, HandEvaluationError> {
    validate_cards(cards)?;
    let mut best: Option<BestHand> = None;
    for five in five_card_subsets(cards) {
        let rank = classify_five(&five);
        let better = match &best {
            None => true,
            Some(b) => compare_hand_ranks(&rank, &b.rank).is_gt(),
        };
        if better {
            best = Some(BestHand { rank, cards: five });
        }
    }
    best.ok_or(HandEvaluationError::InvalidCardCount { count: cards.len() })
}

/// Evaluates two hole cards together with the board.
pub fn evaluate_hole_and_board(
    hole: &[Card],
    board: &[Card],
) -> Result<HandRank, HandEvaluationError> {
    if hole.len() != 2 {
        return Err(HandEvaluationError::InvalidHoleCardCount { count: hole.len() });
    }
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate_hand(&cards)
}

fn validate_cards(cards: &[Card]) -> Result<(), HandEvaluationError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(HandEvaluationError::InvalidCardCount { count: cards.len() });
    }
    let mut seen = HashSet::with_capacity(cards.len());
    for &card in cards {
        if !seen.insert(card) {
            return Err(HandEvaluationError::DuplicateCard { card });
        }
    }
    Ok(())
}

// C(n, 5) subsets in lexicographic index order: 1, 6 or 21 of them.
fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

fn classify_five(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    // (count, rank), most copies first, then highest rank first
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for &r in all_ranks().iter().rev() {
        let n = rank_counts[r.value() as usize];
        if n > 0 {
            groups.push((n, r));
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    let ranks: Vec<Rank> = groups.iter().map(|&(_, r)| r).collect();

    let straight = if groups.len() == 5 {
        detect_straight_high(&ranks)
    } else {
        None
    };

    if let (true, Some(high)) = (flush, straight) {
        let category = if high == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return HandRank {
            category,
            kickers: vec![high],
        };
    }

    let top = groups[0].0;
    let second = groups.get(1).map_or(0, |g| g.0);
    let category = match (top, second) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        _ if flush => Category::Flush,
        _ if straight.is_some() => Category::Straight,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    let kickers = match (category, straight) {
        (Category::Straight, Some(high)) => vec![high],
        _ => ranks,
    };
    HandRank { category, kickers }
}

/// Returns the straight's high card for five distinct ranks given in descending order.
fn detect_straight_high(desc: &[Rank]) -> Option<Rank> {
    let v: Vec<u8> = desc.iter().map(|r| r.value()).collect();
    if v.len() != 5 {
        return None;
    }
    if v.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(desc[0]);
    }
    // Ace plays low only in A-2-3-4-5, which is a five-high straight
    if v == [14u8, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}
