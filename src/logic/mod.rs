//! Tournament business logic: setup, round building, matching lookups.

mod matching;
mod round_builder;
mod setup;

pub use matching::{candidates_for, find_chain, find_free_player, find_player, find_players_to_meet};
pub use round_builder::{build_round, choose_match, generate_round, Commitment};
pub use setup::{
    build_candidate_pool, random_roster, roster_from_csv, roster_from_ranks, start_tournament,
    RANK_RANGE,
};
