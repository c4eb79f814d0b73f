use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::Card;
use crate::config::ShowdownOptions;
use crate::errors::ShowdownError;
use crate::events::{ShowdownEvent, ShowdownSink};
use crate::hand::{evaluate_hole_and_board, HandRank};
use crate::pot::{calculate_pot_split, distribute_pot, PotSplit};
use crate::winners::winners_among;

/// A seat at showdown. Folded players keep whatever cards they had; those are ignored.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownPlayer {
    pub id: String,
    pub hole_cards: Vec<Card>,
    #[serde(default)]
    pub folded: bool,
}

impl ShowdownPlayer {
    pub fn new(id: impl Into<String>, hole_cards: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            hole_cards,
            folded: false,
        }
    }

    pub fn folded(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hole_cards: Vec::new(),
            folded: true,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownConfig {
    /// Players in seat order. Ids must be unique, folded seats included.
    pub players: Vec<ShowdownPlayer>,
    pub community_cards: Vec<Card>,
    pub pot_size: u64,
}

/// Outcome for one player, aligned with the input players list.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub id: String,
    pub folded: bool,
    /// `None` exactly when the player folded.
    pub hand_rank: Option<HandRank>,
    pub amount_won: u64,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub winner_ids: Vec<String>,
    pub is_split_pot: bool,
    pub pot_awarded: u64,
    pub split: PotSplit,
    pub players: Vec<PlayerOutcome>,
}

impl ShowdownResult {
    pub fn amount_won(&self, player_id: &str) -> Option<u64> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.amount_won)
    }
}

/// True when at least two players are still in the hand.
pub fn is_showdown_needed(players: &[ShowdownPlayer]) -> bool {
    players.iter().filter(|p| !p.folded).count() >= 2
}

/// Resolves a showdown with the default remainder policy.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::showdown::{resolve_showdown, ShowdownConfig, ShowdownPlayer};
///
/// let config = ShowdownConfig {
///     players: vec![
///         ShowdownPlayer::new("p1", parse_cards("As Ac").unwrap()),
///         ShowdownPlayer::new("p2", parse_cards("Ks Kc").unwrap()),
///     ],
///     community_cards: parse_cards("Th 9h 8d 4c 2s").unwrap(),
///     pot_size: 100,
/// };
/// let result = resolve_showdown(&config).unwrap();
/// assert_eq!(result.winner_ids, vec!["p1".to_string()]);
/// assert_eq!(result.amount_won("p1"), Some(100));
/// ```
pub fn resolve_showdown(config: &ShowdownConfig) -> Result<ShowdownResult, ShowdownError> {
    resolve_showdown_with_options(config, &ShowdownOptions::default())
}

pub fn resolve_showdown_with_options(
    config: &ShowdownConfig,
    options: &ShowdownOptions,
) -> Result<ShowdownResult, ShowdownError> {
    resolve_showdown_with(config, options, &mut |_: &ShowdownEvent| {})
}

/// Resolves a showdown and streams its trace into `sink`.
/// Nothing is emitted when validation fails.
pub fn resolve_showdown_with_events<S>(
    config: &ShowdownConfig,
    sink: &mut S,
) -> Result<ShowdownResult, ShowdownError>
where
    S: ShowdownSink + ?Sized,
{
    resolve_showdown_with(config, &ShowdownOptions::default(), sink)
}

/// Validate, evaluate, determine winners, split the pot, then emit the trace.
pub fn resolve_showdown_with<S>(
    config: &ShowdownConfig,
    options: &ShowdownOptions,
    sink: &mut S,
) -> Result<ShowdownResult, ShowdownError>
where
    S: ShowdownSink + ?Sized,
{
    if let Err(err) = validate(config) {
        debug!(error = %err, "showdown rejected");
        return Err(err);
    }
    debug!(
        players = config.players.len(),
        pot = config.pot_size,
        "resolving showdown"
    );

    let mut ranks: Vec<Option<HandRank>> = Vec::with_capacity(config.players.len());
    for p in &config.players {
        if p.folded {
            ranks.push(None);
            continue;
        }
        let rank = evaluate_hole_and_board(&p.hole_cards, &config.community_cards)?;
        trace!(player = %p.id, hand = %rank, "hand evaluated");
        ranks.push(Some(rank));
    }

    let (seats, active_ranks): (Vec<usize>, Vec<HandRank>) = ranks
        .iter()
        .enumerate()
        .filter_map(|(seat, r)| r.clone().map(|r| (seat, r)))
        .unzip();
    let (winner_positions, _) = winners_among(&active_ranks)?;
    let winner_seats: Vec<usize> = winner_positions.iter().map(|&i| seats[i]).collect();

    let split = calculate_pot_split(config.pot_size, winner_seats.len());
    let awards = distribute_pot(config.pot_size, &winner_seats, options.remainder);

    let players: Vec<PlayerOutcome> = config
        .players
        .iter()
        .zip(ranks)
        .enumerate()
        .map(|(seat, (p, hand_rank))| PlayerOutcome {
            id: p.id.clone(),
            folded: p.folded,
            hand_rank,
            amount_won: winner_seats
                .iter()
                .position(|&w| w == seat)
                .map_or(0, |k| awards[k]),
        })
        .collect();
    let winner_ids: Vec<String> = winner_seats
        .iter()
        .map(|&seat| config.players[seat].id.clone())
        .collect();
    let result = ShowdownResult {
        is_split_pot: winner_ids.len() > 1,
        winner_ids,
        pot_awarded: config.pot_size,
        split,
        players,
    };
    debug!(
        winners = ?result.winner_ids,
        split_pot = result.is_split_pot,
        remainder = split.remainder,
        "showdown resolved"
    );

    sink.emit(&ShowdownEvent::ShowdownStarted {
        player_count: config.players.len(),
        active_count: seats.len(),
        pot_size: config.pot_size,
    });
    for (&seat, hand_rank) in seats.iter().zip(active_ranks) {
        sink.emit(&ShowdownEvent::HandEvaluated {
            player_id: config.players[seat].id.clone(),
            seat,
            hand_rank,
        });
    }
    sink.emit(&ShowdownEvent::PotAwarded {
        winner_ids: result.winner_ids.clone(),
        split,
        remainder_policy: options.remainder,
        awards,
    });
    sink.emit(&ShowdownEvent::HandCompleted {
        winner_ids: result.winner_ids.clone(),
        is_split_pot: result.is_split_pot,
    });

    Ok(result)
}

fn validate(config: &ShowdownConfig) -> Result<(), ShowdownError> {
    if config.community_cards.len() != 5 {
        return Err(ShowdownError::InvalidCommunityCardCount {
            count: config.community_cards.len(),
        });
    }
    if config.pot_size == 0 {
        return Err(ShowdownError::InvalidPotSize {
            pot: config.pot_size,
        });
    }
    if config.players.iter().all(|p| p.folded) {
        return Err(ShowdownError::AllPlayersFolded);
    }
    let active = config.players.iter().filter(|p| !p.folded);
    for p in active.clone() {
        if p.hole_cards.len() != 2 {
            return Err(ShowdownError::InvalidHoleCardCount {
                player_id: p.id.clone(),
                count: p.hole_cards.len(),
            });
        }
    }
    let mut seen = HashSet::new();
    let dealt = config
        .community_cards
        .iter()
        .chain(active.flat_map(|p| p.hole_cards.iter()));
    for &card in dealt {
        if !seen.insert(card) {
            return Err(ShowdownError::DuplicateCard { card });
        }
    }
    let mut ids = HashSet::with_capacity(config.players.len());
    for p in &config.players {
        if !ids.insert(p.id.as_str()) {
            return Err(ShowdownError::DuplicatePlayerId {
                player_id: p.id.clone(),
            });
        }
    }
    Ok(())
}
