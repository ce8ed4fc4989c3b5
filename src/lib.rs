//! Chess tournament: models and round-building logic for round-robin pairing.

pub mod logic;
pub mod models;

pub use logic::{
    build_candidate_pool, build_round, candidates_for, choose_match, find_chain, find_free_player,
    find_player, find_players_to_meet, generate_round, random_roster, roster_from_csv,
    roster_from_ranks, start_tournament, Commitment, RANK_RANGE,
};
pub use models::{
    check_roster_size, CandidatePool, GameMatch, MatchId, Player, PlayerId, Rank, Round, Tournament,
    TournamentConfig, TournamentError, TournamentId, MAX_PLAYERS,
};
