use serde::{Deserialize, Serialize};

use crate::config::RemainderPolicy;
use crate::hand::HandRank;
use crate::pot::PotSplit;

/// One step of a showdown's audit trace.
///
/// A resolved showdown always yields, in order: one `ShowdownStarted`, one
/// `HandEvaluated` per non-folded player in players-list order, one `PotAwarded`
/// and one terminal `HandCompleted`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ShowdownEvent {
    ShowdownStarted {
        player_count: usize,
        active_count: usize,
        pot_size: u64,
    },
    HandEvaluated {
        player_id: String,
        /// Index in the players list.
        seat: usize,
        hand_rank: HandRank,
    },
    PotAwarded {
        winner_ids: Vec<String>,
        split: PotSplit,
        remainder_policy: RemainderPolicy,
        /// Amount per winner, aligned with `winner_ids`.
        awards: Vec<u64>,
    },
    HandCompleted {
        winner_ids: Vec<String>,
        is_split_pot: bool,
    },
}

impl ShowdownEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShowdownEvent::ShowdownStarted { .. } => "showdown-started",
            ShowdownEvent::HandEvaluated { .. } => "hand-evaluated",
            ShowdownEvent::PotAwarded { .. } => "pot-awarded",
            ShowdownEvent::HandCompleted { .. } => "hand-completed",
        }
    }
}

/// Receives showdown events synchronously, on the resolving thread, in trace order.
pub trait ShowdownSink {
    fn emit(&mut self, event: &ShowdownEvent);
}

impl<F> ShowdownSink for F
where
    F: FnMut(&ShowdownEvent),
{
    fn emit(&mut self, event: &ShowdownEvent) {
        self(event)
    }
}

impl ShowdownSink for Vec<ShowdownEvent> {
    fn emit(&mut self, event: &ShowdownEvent) {
        self.push(event.clone());
    }
}
