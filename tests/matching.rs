//! Integration tests for matches, the candidate pool and matching lookups.

use chess_tournament::{
    build_candidate_pool, candidates_for, find_chain, find_free_player, find_player,
    find_players_to_meet, roster_from_ranks, CandidatePool, GameMatch, Player, TournamentError,
};
use std::collections::HashSet;

#[test]
fn pairing_a_player_with_themself_fails() {
    let p = Player::new(3, 1500);
    assert_eq!(
        GameMatch::new(0, &p, &p),
        Err(TournamentError::InvalidPair(3))
    );

    let mut pool = CandidatePool::new();
    assert_eq!(pool.add_match(&p, &p), Err(TournamentError::InvalidPair(3)));
    assert!(pool.is_empty());
}

#[test]
fn match_equality_ignores_order_and_ranks() {
    let a = Player::new(1, 1500);
    let b = Player::new(2, 1800);
    let ab = GameMatch::new(0, &a, &b).unwrap();
    let ba = GameMatch::new(5, &b, &Player::new(1, 900)).unwrap();

    assert_eq!(ab, ba);
    let set: HashSet<_> = [ab.clone(), ba].into_iter().collect();
    assert_eq!(set.len(), 1);

    assert_eq!(ab.opponent_of(1), Some(2));
    assert_eq!(ab.opponent_of(2), Some(1));
    assert_eq!(ab.opponent_of(7), None);
    assert_eq!(ab.rank_difference(), 300);
    assert_eq!(ab.to_string(), "( 1,  2)");
}

#[test]
fn pool_stores_each_pair_once() {
    let players = roster_from_ranks(&[1500, 1600, 1700]);
    let mut pool = CandidatePool::new();

    let first = pool.add_match(&players[0], &players[1]).unwrap();
    let again = pool.add_match(&players[1], &players[0]).unwrap();

    assert_eq!(first, again);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.find(1, 0), Some(first));
    assert_eq!(pool.find(0, 2), None);
}

#[test]
fn round_robin_pool_reuses_ids_for_existing_pairs() {
    let players = roster_from_ranks(&[1500, 1600, 1700, 1800]);
    let mut pool = build_candidate_pool(&players).unwrap();
    let existing = pool.find(3, 1).unwrap();

    assert_eq!(pool.add_match(&players[3], &players[1]), Ok(existing));
    assert_eq!(pool.len(), 6);
    let opponents: Vec<_> = candidates_for(&players[1], &pool)
        .map(|m| m.opponent_of(1).unwrap())
        .collect();
    assert_eq!(opponents, vec![0, 2, 3]);
}

#[test]
fn played_flag_is_shared_between_both_players() {
    let players = roster_from_ranks(&[1500, 1600, 1700]);
    let mut pool = build_candidate_pool(&players).unwrap();
    let id = pool.find(0, 2).unwrap();

    pool.set_played(id, true).unwrap();

    let from_first = candidates_for(&players[0], &pool).find(|m| m.id == id).unwrap();
    let from_second = candidates_for(&players[2], &pool).find(|m| m.id == id).unwrap();
    assert!(from_first.played);
    assert!(from_second.played);
    assert_eq!(pool.unplayed_count(), 2);
    assert_eq!(pool.set_played(99, true), Err(TournamentError::MatchNotFound(99)));
}

#[test]
fn candidates_are_sorted_by_opponent_id() {
    let players = roster_from_ranks(&[1500, 1600, 1700, 1800]);
    let mut pool = CandidatePool::new();
    pool.add_match(&players[2], &players[3]).unwrap();
    pool.add_match(&players[0], &players[2]).unwrap();
    pool.add_match(&players[2], &players[1]).unwrap();

    let opponents: Vec<_> = candidates_for(&players[2], &pool)
        .map(|m| m.opponent_of(2).unwrap())
        .collect();
    assert_eq!(opponents, vec![0, 1, 3]);
    assert_eq!(candidates_for(&Player::new(9, 0), &pool).count(), 0);
}

#[test]
fn free_player_is_first_not_busy_in_roster_order() {
    let mut players = roster_from_ranks(&[1500, 1600, 1700]);
    assert_eq!(find_free_player(&players).map(|p| p.id), Some(0));

    players[0].mark_busy();
    players[1].mark_busy();
    assert_eq!(find_free_player(&players).map(|p| p.id), Some(2));

    players[2].mark_busy();
    assert!(find_free_player(&players).is_none());

    assert_eq!(find_player(&players, 1).map(|p| p.rank), Some(1600));
    assert!(find_player(&players, 5).is_none());
}

#[test]
fn players_to_meet_skips_played_matches() {
    let players = roster_from_ranks(&[1500, 1600, 1700, 1800]);
    let mut pool = build_candidate_pool(&players).unwrap();
    pool.set_played(pool.find(0, 1).unwrap(), true).unwrap();

    assert_eq!(find_players_to_meet(0, &pool), vec![2, 3]);
    assert_eq!(find_players_to_meet(1, &pool), vec![2, 3]);
    assert_eq!(find_players_to_meet(3, &pool), vec![0, 1, 2]);
}

#[test]
fn chain_follows_lowest_unvisited_opponent() {
    let players = roster_from_ranks(&[1500, 1600, 1700, 1800]);
    let mut pool = build_candidate_pool(&players).unwrap();

    assert_eq!(find_chain(0, &pool), vec![0, 1, 2, 3]);

    pool.set_played(pool.find(0, 1).unwrap(), true).unwrap();
    assert_eq!(find_chain(0, &pool), vec![0, 2, 1, 3]);
}

#[test]
fn chain_stops_at_disconnected_players() {
    let players = roster_from_ranks(&[1500, 1600, 1700, 1800]);
    let mut pool = CandidatePool::new();
    pool.add_match(&players[0], &players[1]).unwrap();
    pool.add_match(&players[2], &players[3]).unwrap();

    assert_eq!(find_chain(0, &pool), vec![0, 1]);
    assert_eq!(find_chain(3, &pool), vec![3, 2]);
    assert_eq!(find_chain(7, &pool), vec![7]);
}
