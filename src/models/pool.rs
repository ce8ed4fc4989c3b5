//! Candidate pool: every pairing still on the table for the tournament.

use crate::models::game::{GameMatch, MatchId};
use crate::models::player::{Player, PlayerId};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All possible matches of a tournament, stored once and indexed per player.
///
/// Each player's list holds ids into `matches`, sorted by opponent id. Both
/// players of a match point at the same entry, so marking it played through
/// one player is visible through the other.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CandidatePool {
    matches: Vec<GameMatch>,
    by_player: BTreeMap<PlayerId, Vec<MatchId>>,
}

impl CandidatePool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the pairing of `first` and `second`, or return the id it already has.
    pub fn add_match(&mut self, first: &Player, second: &Player) -> Result<MatchId, TournamentError> {
        if let Some(id) = self.find(first.id, second.id) {
            return Ok(id);
        }
        self.push_match(first, second)
    }

    /// Add a pairing known to be new, skipping the duplicate lookup.
    pub(crate) fn push_match(&mut self, first: &Player, second: &Player) -> Result<MatchId, TournamentError> {
        let id = self.matches.len();
        let game = GameMatch::new(id, first, second)?;
        self.matches.push(game);
        self.insert_sorted(first.id, second.id, id);
        self.insert_sorted(second.id, first.id, id);
        Ok(id)
    }

    fn insert_sorted(&mut self, player: PlayerId, opponent: PlayerId, id: MatchId) {
        let matches = &self.matches;
        let list = self.by_player.entry(player).or_default();
        let pos = list.partition_point(|&m| {
            matches[m]
                .opponent_of(player)
                .map_or(false, |other| other < opponent)
        });
        list.insert(pos, id);
    }

    /// Ids of the matches involving `player`, ascending by opponent id.
    pub fn candidates_for(&self, player: PlayerId) -> &[MatchId] {
        self.by_player.get(&player).map_or(&[], Vec::as_slice)
    }

    /// Id of the match between `a` and `b`, in either order.
    pub fn find(&self, a: PlayerId, b: PlayerId) -> Option<MatchId> {
        self.candidates_for(a)
            .iter()
            .copied()
            .find(|&id| self.matches[id].opponent_of(a) == Some(b))
    }

    /// The match stored under `id`.
    pub fn get(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.get(id)
    }

    /// Mutable access to the match stored under `id`.
    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.get_mut(id)
    }

    /// Mark a match as played or not, through either player's view.
    pub fn set_played(&mut self, id: MatchId, played: bool) -> Result<(), TournamentError> {
        let game = self
            .matches
            .get_mut(id)
            .ok_or(TournamentError::MatchNotFound(id))?;
        game.played = played;
        Ok(())
    }

    /// Every match in the pool, in insertion order.
    pub fn matches(&self) -> &[GameMatch] {
        &self.matches
    }

    /// Number of distinct pairings.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if no pairing was added.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches not yet used in any round.
    pub fn unplayed_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.played).count()
    }
}
