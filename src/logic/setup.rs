//! Setup: rosters, the round-robin candidate pool, and starting a tournament.

use crate::models::{
    check_roster_size, CandidatePool, Player, PlayerId, Rank, Tournament, TournamentConfig,
    TournamentError,
};
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::ops::RangeInclusive;

/// Rating band used for generated rosters.
pub const RANK_RANGE: RangeInclusive<Rank> = 1000..=2800;

/// Players with ids `0..n`, in the order of `ranks`.
pub fn roster_from_ranks(ranks: &[Rank]) -> Vec<Player> {
    ranks
        .iter()
        .zip(0..)
        .map(|(&rank, id)| Player::new(id, rank))
        .collect()
}

/// `n` players with ids `0..n` and ranks drawn from [`RANK_RANGE`].
pub fn random_roster<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Player> {
    let ranks: Vec<Rank> = (0..n).map(|_| rng.gen_range(RANK_RANGE)).collect();
    roster_from_ranks(&ranks)
}

#[derive(Deserialize)]
struct RosterRecord {
    id: PlayerId,
    rank: Rank,
}

/// Read a roster from CSV with an `id,rank` header. Roster order is file order.
///
/// Stops with `TooManyPlayers` as soon as the file exceeds the roster cap.
pub fn roster_from_csv<R: Read>(reader: R) -> Result<Vec<Player>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut players = Vec::new();
    for record in rdr.deserialize::<RosterRecord>() {
        let record = record.map_err(|e| TournamentError::RosterImport(e.to_string()))?;
        check_roster_size(players.len() + 1)?;
        players.push(Player::new(record.id, record.rank));
    }
    check_unique_ids(&players)?;
    Ok(players)
}

fn check_unique_ids(players: &[Player]) -> Result<(), TournamentError> {
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !seen.insert(p.id) {
            return Err(TournamentError::DuplicatePlayer(p.id));
        }
    }
    Ok(())
}

/// Every unordered pair of players once; the earlier roster entry is the first player.
pub fn build_candidate_pool(players: &[Player]) -> Result<CandidatePool, TournamentError> {
    check_unique_ids(players)?;
    let mut pool = CandidatePool::new();
    for (i, first) in players.iter().enumerate() {
        for second in &players[i + 1..] {
            pool.push_match(first, second)?;
        }
    }
    Ok(pool)
}

/// Validate the roster and config and create a tournament over the full round-robin pool.
pub fn start_tournament(
    mut players: Vec<Player>,
    config: TournamentConfig,
) -> Result<Tournament, TournamentError> {
    config.validate(players.len())?;
    for p in &mut players {
        p.release();
    }
    let pool = build_candidate_pool(&players)?;
    log::debug!(
        "tournament with {} players, {} possible matches, {} per round",
        players.len(),
        pool.len(),
        config.matches_per_round
    );
    Ok(Tournament::new(players, pool, config))
}
