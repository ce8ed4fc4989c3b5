//! Tournament, TournamentConfig and TournamentError.

use crate::models::game::MatchId;
use crate::models::player::{Player, PlayerId};
use crate::models::pool::CandidatePool;
use crate::models::round::Round;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A match was requested between a player and themself.
    InvalidPair(PlayerId),
    /// Two roster entries share an id.
    DuplicatePlayer(PlayerId),
    /// No player with this id in the roster.
    PlayerNotFound(PlayerId),
    /// No match with this id in the candidate pool.
    MatchNotFound(MatchId),
    /// Fewer than 2 players.
    NotEnoughPlayers,
    /// Roster larger than [`MAX_PLAYERS`].
    TooManyPlayers { requested: usize, max: usize },
    /// More matches per round than the roster can fill.
    TooManyMatchesPerRound { requested: usize, max: usize },
    /// A roster file could not be read.
    RosterImport(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidPair(id) => write!(f, "Player {} cannot be paired with themself", id),
            TournamentError::DuplicatePlayer(id) => write!(f, "Player id {} appears more than once", id),
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::NotEnoughPlayers => write!(f, "Need at least 2 players"),
            TournamentError::TooManyPlayers { requested, max } => {
                write!(f, "Cannot seat {} players (at most {})", requested, max)
            }
            TournamentError::TooManyMatchesPerRound { requested, max } => {
                write!(f, "Cannot fit {} matches in a round (at most {})", requested, max)
            }
            TournamentError::RosterImport(msg) => write!(f, "Could not read roster: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Largest roster accepted. The pool grows with the square of the roster.
pub const MAX_PLAYERS: usize = 500;

/// Check a roster size against [`MAX_PLAYERS`].
pub fn check_roster_size(no_of_players: usize) -> Result<(), TournamentError> {
    if no_of_players > MAX_PLAYERS {
        return Err(TournamentError::TooManyPlayers {
            requested: no_of_players,
            max: MAX_PLAYERS,
        });
    }
    Ok(())
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Per-tournament settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub matches_per_round: usize,
}

impl TournamentConfig {
    /// Full rounds: every player paired, one sits out when the count is odd.
    pub fn for_players(no_of_players: usize) -> Self {
        Self {
            matches_per_round: no_of_players / 2,
        }
    }

    /// Check the roster size and that the quota fits the roster.
    pub fn validate(&self, no_of_players: usize) -> Result<(), TournamentError> {
        if no_of_players < 2 {
            return Err(TournamentError::NotEnoughPlayers);
        }
        check_roster_size(no_of_players)?;
        let max = no_of_players / 2;
        if self.matches_per_round > max {
            return Err(TournamentError::TooManyMatchesPerRound {
                requested: self.matches_per_round,
                max,
            });
        }
        Ok(())
    }
}

/// Tournament state: roster, candidate pool and the rounds built so far.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub config: TournamentConfig,
    /// Roster in pairing order.
    pub players: Vec<Player>,
    pub pool: CandidatePool,
    /// Completed rounds, oldest first.
    pub rounds: Vec<Round>,
}

impl Tournament {
    /// Create a tournament over an already built pool, with no rounds yet.
    pub fn new(players: Vec<Player>, pool: CandidatePool, config: TournamentConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            config,
            players,
            pool,
            rounds: Vec::new(),
        }
    }

    /// Look up a roster player by id.
    pub fn get_player(&self, id: PlayerId) -> Result<&Player, TournamentError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    /// Matches that no round has used yet.
    pub fn remaining_matches(&self) -> usize {
        self.pool.unplayed_count()
    }
}
