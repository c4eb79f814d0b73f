use serde::{Deserialize, Serialize};

use crate::config::RemainderPolicy;

/// Equal floor share per winner plus the chips left over.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotSplit {
    pub amount_per_winner: u64,
    pub remainder: u64,
}

/// Splits `pot` evenly across `winner_count` winners.
///
/// A zero `winner_count` yields no share and leaves the whole pot as remainder.
///
/// ```
/// use showdown_engine::pot::calculate_pot_split;
///
/// let split = calculate_pot_split(101, 2);
/// assert_eq!(split.amount_per_winner, 50);
/// assert_eq!(split.remainder, 1);
/// ```
pub fn calculate_pot_split(pot: u64, winner_count: usize) -> PotSplit {
    if winner_count == 0 {
        return PotSplit {
            amount_per_winner: 0,
            remainder: pot,
        };
    }
    let n = winner_count as u64;
    PotSplit {
        amount_per_winner: pot / n,
        remainder: pot % n,
    }
}

/// Per-winner amounts, in the order of `winner_seats`, with the remainder assigned
/// by `policy`. `winner_seats` are the winners' indices in the players list, ascending.
pub fn distribute_pot(pot: u64, winner_seats: &[usize], policy: RemainderPolicy) -> Vec<u64> {
    let split = calculate_pot_split(pot, winner_seats.len());
    let mut awards = vec![split.amount_per_winner; winner_seats.len()];
    if awards.is_empty() || split.remainder == 0 {
        return awards;
    }
    match policy {
        RemainderPolicy::FirstWinner => awards[0] += split.remainder,
        RemainderPolicy::OneChipEach => {
            for award in awards.iter_mut().take(split.remainder as usize) {
                *award += 1;
            }
        }
        RemainderPolicy::LeftOfButton { button } => {
            let start = winner_seats
                .iter()
                .position(|&seat| seat > button)
                .unwrap_or(0);
            let n = awards.len();
            for k in 0..split.remainder as usize {
                awards[(start + k) % n] += 1;
            }
        }
    }
    awards
}
