//! Round construction: pick one partner per free player, backtracking out of dead ends.

use crate::logic::matching::{candidates_for, find_free_player, find_player};
use crate::models::{CandidatePool, MatchId, Player, PlayerId, Round, Tournament};
use log::{debug, trace};

/// A match placed into the round under construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Commitment {
    pub match_id: MatchId,
    /// The free player the search started from.
    pub player: PlayerId,
    pub opponent: PlayerId,
}

/// Commit a match for the first free player in roster order.
///
/// Candidates are tried in ascending opponent id. A candidate is skipped when
/// its opponent id is below `minimum_partner_id`, the opponent is busy, or the
/// match was already played. With no minimum, only opponents with a higher id
/// than the free player are considered.
///
/// On success both players are marked busy and the match played. Returns
/// `None` when every player is busy or no candidate survives.
pub fn choose_match(
    pool: &mut CandidatePool,
    players: &mut [Player],
    minimum_partner_id: Option<u64>,
) -> Option<Commitment> {
    let roster: &[Player] = players;
    let player = find_free_player(roster)?;
    let floor = minimum_partner_id.unwrap_or(u64::from(player.id) + 1);

    let chosen = candidates_for(player, pool).find_map(|m| {
        let opponent = m.opponent_of(player.id)?;
        let available = u64::from(opponent) >= floor
            && !m.played
            && find_player(roster, opponent).map_or(false, |p| !p.busy);
        available.then_some(Commitment {
            match_id: m.id,
            player: player.id,
            opponent,
        })
    })?;

    set_busy(players, chosen.player, true);
    set_busy(players, chosen.opponent, true);
    if let Some(m) = pool.get_mut(chosen.match_id) {
        m.played = true;
    }
    Some(chosen)
}

/// Build one round of `matches_per_round` matches.
///
/// Dead ends are escaped by undoing the most recent commitment and resuming
/// that player's search past the undone opponent. If the search runs out with
/// nothing committed, the round comes back empty and incomplete. Matches of a
/// complete round stay played; every player is free again on return.
pub fn build_round(pool: &mut CandidatePool, players: &mut [Player], matches_per_round: usize) -> Round {
    let mut committed: Vec<Commitment> = Vec::with_capacity(matches_per_round);
    let mut minimum_partner_id: Option<u64> = None;
    let mut backtracks = 0;

    while committed.len() < matches_per_round {
        if let Some(commitment) = choose_match(pool, players, minimum_partner_id) {
            trace!("commit ({}, {})", commitment.player, commitment.opponent);
            committed.push(commitment);
            minimum_partner_id = None;
            continue;
        }

        let Some(last) = committed.pop() else {
            debug!("round abandoned: no match can be started");
            break;
        };
        undo(pool, players, &last);
        backtracks += 1;
        minimum_partner_id = Some(u64::from(last.opponent) + 1);
        trace!("backtrack ({}, {})", last.player, last.opponent);
    }

    let matches = committed
        .iter()
        .filter_map(|c| pool.get(c.match_id).cloned())
        .collect();
    for p in players.iter_mut() {
        p.release();
    }

    let round = Round::new(matches, players.len(), matches_per_round, backtracks);
    if round.is_complete() {
        debug!(
            "round complete: {} matches, cost {:?}, {} backtracks",
            round.count(),
            round.cost(),
            backtracks
        );
    }
    round
}

/// Build the tournament's next round and record it if complete.
pub fn generate_round(tournament: &mut Tournament) -> Round {
    let round = build_round(
        &mut tournament.pool,
        &mut tournament.players,
        tournament.config.matches_per_round,
    );
    if round.is_complete() {
        tournament.rounds.push(round.clone());
    }
    round
}

fn undo(pool: &mut CandidatePool, players: &mut [Player], commitment: &Commitment) {
    set_busy(players, commitment.player, false);
    set_busy(players, commitment.opponent, false);
    if let Some(m) = pool.get_mut(commitment.match_id) {
        m.played = false;
    }
}

fn set_busy(players: &mut [Player], id: PlayerId, busy: bool) {
    if let Some(p) = players.iter_mut().find(|p| p.id == id) {
        if busy {
            p.mark_busy();
        } else {
            p.release();
        }
    }
}
