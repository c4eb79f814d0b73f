use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::compare::{compare_hand_ranks, decided_by, Decider};
use crate::events::{ShowdownEvent, ShowdownSink};
use crate::showdown::ShowdownResult;

/// Sink that writes each event as one JSON line (LF only) to a caller-supplied writer.
///
/// No timestamps are added, so replaying the same showdown produces the same bytes.
/// The first write error stops further output and is returned by [`EventLogger::finish`].
///
/// ```
/// use showdown_engine::cards::parse_cards;
/// use showdown_engine::logger::EventLogger;
/// use showdown_engine::showdown::{resolve_showdown_with_events, ShowdownConfig, ShowdownPlayer};
///
/// let config = ShowdownConfig {
///     players: vec![
///         ShowdownPlayer::new("p1", parse_cards("As Ac").unwrap()),
///         ShowdownPlayer::new("p2", parse_cards("Ks Kc").unwrap()),
///     ],
///     community_cards: parse_cards("Th 9h 8d 4c 2s").unwrap(),
///     pot_size: 100,
/// };
/// let mut logger = EventLogger::new(Vec::new());
/// resolve_showdown_with_events(&config, &mut logger).unwrap();
/// let bytes = logger.finish().unwrap();
/// assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 5);
/// ```
pub struct EventLogger<W: Write> {
    writer: W,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write> EventLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: 0,
            error: None,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    fn write_line(&mut self, event: &ShowdownEvent) -> io::Result<()> {
        let line = serde_json::to_string(event).map_err(io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Flushes and hands the writer back, or reports the first failed write.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ShowdownSink for EventLogger<W> {
    fn emit(&mut self, event: &ShowdownEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_line(event) {
            self.error = Some(e);
        }
    }
}

/// Compact record of who won a showdown and why, for hand histories.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownSummary {
    pub winners: Vec<String>,
    /// e.g. "split pot", "Flush over Straight", "One Pair, kicker K over Q"
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShowdownSummary {
    pub fn from_result(result: &ShowdownResult) -> Self {
        let notes = if result.is_split_pot {
            Some("split pot".to_string())
        } else {
            runner_up_note(result)
        };
        Self {
            winners: result.winner_ids.clone(),
            notes,
        }
    }
}

fn runner_up_note(result: &ShowdownResult) -> Option<String> {
    let best = result
        .players
        .iter()
        .find(|p| result.winner_ids.contains(&p.id))
        .and_then(|p| p.hand_rank.as_ref())?;
    let runner_up = result
        .players
        .iter()
        .filter(|p| !result.winner_ids.contains(&p.id))
        .filter_map(|p| p.hand_rank.as_ref())
        .max_by(|a, b| compare_hand_ranks(a, b))?;
    match decided_by(best, runner_up) {
        Decider::Category => Some(format!("{} over {}", best.category, runner_up.category)),
        Decider::Kicker(i) => {
            let (win, lose) = (best.kickers.get(i)?, runner_up.kickers.get(i)?);
            if i == 0 {
                Some(format!("{}, {} over {}", best.category, win, lose))
            } else {
                Some(format!("{}, kicker {} over {}", best.category, win, lose))
            }
        }
        Decider::Tie => None,
    }
}
