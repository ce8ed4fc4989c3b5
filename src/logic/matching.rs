//! Lookups over the roster and the candidate pool.

use crate::models::{CandidatePool, GameMatch, Player, PlayerId};
use std::collections::HashSet;

/// First player in roster order who is not yet placed in the current round.
pub fn find_free_player(players: &[Player]) -> Option<&Player> {
    players.iter().find(|p| !p.busy)
}

pub fn find_player(players: &[Player], id: PlayerId) -> Option<&Player> {
    players.iter().find(|p| p.id == id)
}

/// The player's candidate matches, ascending by opponent id.
pub fn candidates_for<'a>(
    player: &Player,
    pool: &'a CandidatePool,
) -> impl Iterator<Item = &'a GameMatch> + 'a {
    pool.candidates_for(player.id)
        .iter()
        .filter_map(move |&id| pool.get(id))
}

/// Opponents `player` has not played yet, ascending by id.
pub fn find_players_to_meet(player: PlayerId, pool: &CandidatePool) -> Vec<PlayerId> {
    pool.candidates_for(player)
        .iter()
        .filter_map(|&id| pool.get(id))
        .filter(|m| !m.played)
        .filter_map(|m| m.opponent_of(player))
        .collect()
}

/// Walk the not-yet-played graph from `start`, always stepping to the
/// lowest-id unvisited opponent, until no step is possible.
///
/// Returns the visited players in walk order, starting with `start`. Not used
/// when building rounds; it only reports how far unplayed pairings connect.
pub fn find_chain(start: PlayerId, pool: &CandidatePool) -> Vec<PlayerId> {
    let mut chain = vec![start];
    let mut visited: HashSet<PlayerId> = HashSet::from([start]);
    let mut current = start;

    loop {
        let next = find_players_to_meet(current, pool)
            .into_iter()
            .find(|p| !visited.contains(p));
        match next {
            Some(p) => {
                visited.insert(p);
                chain.push(p);
                current = p;
            }
            None => return chain,
        }
    }
}
