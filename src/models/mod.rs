//! Data structures for the chess tournament: players, matches, pool, rounds.

mod game;
mod player;
mod pool;
mod round;
mod tournament;

pub use game::{GameMatch, MatchId};
pub use player::{Player, PlayerId, Rank};
pub use pool::CandidatePool;
pub use round::Round;
pub use tournament::{
    check_roster_size, Tournament, TournamentConfig, TournamentError, TournamentId, MAX_PLAYERS,
};
