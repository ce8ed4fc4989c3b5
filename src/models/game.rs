//! A single pairing between two players.

use crate::models::player::{Player, PlayerId, Rank};
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of a match inside its candidate pool.
pub type MatchId = usize;

/// A pairing of two distinct players, with their ranks captured at creation.
///
/// Equality and hashing look only at the unordered pair of player ids, so a
/// match reached through either player's candidate list is the same match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub first_player_id: PlayerId,
    pub second_player_id: PlayerId,
    pub first_player_rank: Rank,
    pub second_player_rank: Rank,
    /// Set once the match is committed into a round.
    pub played: bool,
}

impl GameMatch {
    /// Pair two players. Fails with `InvalidPair` if both are the same player.
    pub fn new(id: MatchId, first: &Player, second: &Player) -> Result<Self, TournamentError> {
        if first.id == second.id {
            return Err(TournamentError::InvalidPair(first.id));
        }
        Ok(Self {
            id,
            first_player_id: first.id,
            second_player_id: second.id,
            first_player_rank: first.rank,
            second_player_rank: second.rank,
            played: false,
        })
    }

    /// Unordered identity of the match: (lower id, higher id).
    pub fn pair(&self) -> (PlayerId, PlayerId) {
        if self.first_player_id <= self.second_player_id {
            (self.first_player_id, self.second_player_id)
        } else {
            (self.second_player_id, self.first_player_id)
        }
    }

    /// The other side of the match, or `None` if `player` is not in it.
    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.first_player_id == player {
            Some(self.second_player_id)
        } else if self.second_player_id == player {
            Some(self.first_player_id)
        } else {
            None
        }
    }

    /// `|second rank - first rank|`.
    pub fn rank_difference(&self) -> u32 {
        self.second_player_rank.abs_diff(self.first_player_rank)
    }
}

impl PartialEq for GameMatch {
    fn eq(&self, other: &Self) -> bool {
        self.pair() == other.pair()
    }
}

impl Eq for GameMatch {}

impl Hash for GameMatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
    }
}

impl fmt::Display for GameMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>2}, {:>2})", self.first_player_id, self.second_player_id)
    }
}
