//! One round of pairings.

use crate::models::game::{GameMatch, MatchId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of building one round.
///
/// `matches` are snapshots of the committed pool entries, in commit order.
/// A round that fell short of `matches_per_round` has no cost.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<GameMatch>,
    pub no_of_players: usize,
    pub matches_per_round: usize,
    cost: Option<u64>,
    /// How many commitments were undone while searching.
    pub backtracks: usize,
}

impl Round {
    /// Wrap the committed matches; the cost is set only if the quota was met.
    pub fn new(
        matches: Vec<GameMatch>,
        no_of_players: usize,
        matches_per_round: usize,
        backtracks: usize,
    ) -> Self {
        let cost = if matches.len() == matches_per_round {
            Some(matches.iter().map(|m| u64::from(m.rank_difference())).sum())
        } else {
            None
        };
        Self {
            matches,
            no_of_players,
            matches_per_round,
            cost,
            backtracks,
        }
    }

    /// Sum of rank differences, defined only for a complete round.
    pub fn cost(&self) -> Option<u64> {
        self.cost
    }

    /// Number of committed matches.
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// True if no match could be committed.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if the round reached `matches_per_round`.
    pub fn is_complete(&self) -> bool {
        self.cost.is_some()
    }

    /// Pool ids of the matches in this round.
    pub fn match_ids(&self) -> Vec<MatchId> {
        self.matches.iter().map(|m| m.id).collect()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for game in &self.matches {
            write!(f, "{game}  ")?;
        }
        Ok(())
    }
}
