//! Participant impact scoring and ranking.
//!
//! Impact is a weighted combination of a player's share of their team's
//! output. Shares are smoothed with small additive constants so a team
//! with near-zero totals in a category does not blow the score up.

use crate::models::{Participant, ParticipantStats};

const FULL_MATCH_SIZE: usize = 10;

const DAMAGE_SMOOTHING: f64 = 1000.0;
const KILL_SMOOTHING: f64 = 5.0;
const DEATH_SMOOTHING: f64 = 3.0;

const CHAMP_DAMAGE_WEIGHT: f64 = 1.0;
const OBJECTIVE_DAMAGE_WEIGHT: f64 = 0.5;
const TURRET_DAMAGE_WEIGHT: f64 = 0.7;
const KILL_WEIGHT: f64 = 2.5;
const VISION_WEIGHT: f64 = 1.0;
const HEALING_WEIGHT: f64 = 0.3;
const CC_WEIGHT: f64 = 0.3;
/// Assists count for 60% of a kill and share the kill pool's denominator.
const ASSIST_WEIGHT: f64 = KILL_WEIGHT * 0.6;
const DEATH_WEIGHT: f64 = 2.0;

#[derive(Debug, Default)]
struct TeamTotals {
    champ_damage: f64,
    objective_damage: f64,
    turret_damage: f64,
    kills: f64,
    vision: f64,
    healing: f64,
    cc_time: f64,
    deaths: f64,
}

impl TeamTotals {
    fn accumulate<'a>(members: impl Iterator<Item = &'a Participant>) -> Self {
        let mut totals = TeamTotals::default();
        for p in members {
            let s = &p.stats;
            totals.champ_damage += s.total_damage_dealt_to_champions as f64;
            totals.objective_damage += s.damage_dealt_to_objectives as f64;
            totals.turret_damage += s.damage_dealt_to_turrets as f64;
            totals.kills += s.kills as f64;
            totals.vision += s.vision_score as f64;
            totals.healing += s.total_heal as f64;
            totals.cc_time += s.time_ccing_others as f64;
            totals.deaths += s.deaths as f64;
        }
        totals
    }
}

fn impact_score(stats: &ParticipantStats, team: &TeamTotals) -> f64 {
    let mut score = 0.0;
    score += CHAMP_DAMAGE_WEIGHT * stats.total_damage_dealt_to_champions as f64
        / (team.champ_damage + DAMAGE_SMOOTHING);
    score += OBJECTIVE_DAMAGE_WEIGHT * stats.damage_dealt_to_objectives as f64
        / (team.objective_damage + DAMAGE_SMOOTHING);
    score += TURRET_DAMAGE_WEIGHT * stats.damage_dealt_to_turrets as f64
        / (team.turret_damage + DAMAGE_SMOOTHING);
    score += KILL_WEIGHT * stats.kills as f64 / (team.kills + KILL_SMOOTHING);

    let vision_pool = if team.vision == 0.0 { 1.0 } else { team.vision };
    score += VISION_WEIGHT * stats.vision_score as f64 / vision_pool;

    score += HEALING_WEIGHT * stats.total_heal as f64 / (team.healing + DAMAGE_SMOOTHING);
    score += CC_WEIGHT * stats.time_ccing_others as f64 / (team.cc_time + KILL_SMOOTHING);
    score += ASSIST_WEIGHT * stats.assists as f64 / (team.kills + KILL_SMOOTHING);

    score -= DEATH_WEIGHT * stats.deaths as f64 / (team.deaths + DEATH_SMOOTHING);
    score
}

/// Score and rank the participants of a match in place, filling `impact`
/// and `impact_rank` on each.
///
/// Anything other than a full 10-player match gets the degenerate result
/// (`impact = 1`, `impact_rank = 2` for everyone): partial ranking of odd
/// lobby sizes is worse than no ranking.
///
/// For full matches, each team is ranked 1-5 internally, then the two
/// players holding the same rank position on opposite teams have their
/// impacts rescaled to sum to exactly 2 so scores are comparable across
/// teams. Ties within a team are broken by ascending participant id.
pub fn rank_participants(participants: &mut [Participant]) {
    if participants.len() != FULL_MATCH_SIZE {
        for p in participants.iter_mut() {
            p.impact = 1.0;
            p.impact_rank = 2;
        }
        return;
    }

    let mut ranked_by_team: Vec<Vec<usize>> = Vec::with_capacity(2);
    for team_id in [100, 200] {
        let members: Vec<usize> = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.team_id == team_id)
            .map(|(i, _)| i)
            .collect();

        let totals = TeamTotals::accumulate(members.iter().map(|&i| &participants[i]));
        for &i in &members {
            participants[i].impact = impact_score(&participants[i].stats, &totals);
        }

        let mut order = members;
        order.sort_by(|&a, &b| {
            participants[b]
                .impact
                .partial_cmp(&participants[a].impact)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(participants[a].id.cmp(&participants[b].id))
        });
        for (rank, &i) in order.iter().enumerate() {
            participants[i].impact_rank = rank as i32 + 1;
        }
        ranked_by_team.push(order);
    }

    // Rescale each cross-team rank pair to a fixed total of 2.
    for (&a, &b) in ranked_by_team[0].iter().zip(ranked_by_team[1].iter()) {
        let total = participants[a].impact + participants[b].impact;
        participants[a].impact = 2.0 * participants[a].impact / total;
        participants[b].impact = 2.0 * participants[b].impact / total;
    }
}

/// Index of the match MVP: the globally highest normalized impact, ties
/// broken by ascending participant id. None on an empty slice.
pub fn find_mvp(participants: &[Participant]) -> Option<usize> {
    participants
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.impact
                .partial_cmp(&b.impact)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.id.cmp(&a.id))
        })
        .map(|(i, _)| i)
}

/// Percentage of the team's kills this participant took part in.
pub fn kill_participation(stats: &ParticipantStats, team_kills: i32) -> f64 {
    if team_kills == 0 {
        0.0
    } else {
        (stats.kills + stats.assists) as f64 / team_kills as f64 * 100.0
    }
}

/// Kills-and-assists per death; a deathless game reports kills + assists.
pub fn kda(stats: &ParticipantStats) -> f64 {
    if stats.deaths == 0 {
        (stats.kills + stats.assists) as f64
    } else {
        (stats.kills + stats.assists) as f64 / stats.deaths as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantStats;

    fn participant(id: i32, team_id: i32, stats: ParticipantStats) -> Participant {
        Participant {
            id,
            team_id,
            puuid: format!("puuid-{}", id),
            champion_id: id,
            stats,
            impact: 0.0,
            impact_rank: 0,
        }
    }

    fn stats(kills: i32, deaths: i32, assists: i32, champ_damage: i64) -> ParticipantStats {
        ParticipantStats {
            kills,
            deaths,
            assists,
            total_damage_dealt_to_champions: champ_damage,
            damage_dealt_to_objectives: champ_damage / 4,
            damage_dealt_to_turrets: champ_damage / 10,
            vision_score: 20 + assists,
            total_heal: 2000,
            time_ccing_others: 15,
            champ_level: 14,
            win: false,
        }
    }

    fn full_match() -> Vec<Participant> {
        let mut players = Vec::new();
        for i in 0..5 {
            players.push(participant(i + 1, 100, stats(2 + i, 6 - i, 4, 10_000 + 4_000 * i as i64)));
        }
        for i in 0..5 {
            players.push(participant(i + 6, 200, stats(1 + i, 5 - i, 6, 9_000 + 3_500 * i as i64)));
        }
        players
    }

    #[test]
    fn rank_pairs_sum_to_two_across_teams() {
        let mut players = full_match();
        rank_participants(&mut players);

        for rank in 1..=5 {
            let blue: f64 = players
                .iter()
                .find(|p| p.team_id == 100 && p.impact_rank == rank)
                .map(|p| p.impact)
                .expect("blue player at rank");
            let red: f64 = players
                .iter()
                .find(|p| p.team_id == 200 && p.impact_rank == rank)
                .map(|p| p.impact)
                .expect("red player at rank");
            assert!(
                (blue + red - 2.0).abs() < 1e-9,
                "pair at rank {} sums to {}",
                rank,
                blue + red
            );
        }
    }

    #[test]
    fn every_team_rank_is_assigned_once() {
        let mut players = full_match();
        rank_participants(&mut players);

        for team_id in [100, 200] {
            let mut ranks: Vec<i32> = players
                .iter()
                .filter(|p| p.team_id == team_id)
                .map(|p| p.impact_rank)
                .collect();
            ranks.sort();
            assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn bigger_game_outranks_smaller_game() {
        let mut players = full_match();
        rank_participants(&mut players);

        // Participant 5 has the most kills/damage and the fewest deaths on blue.
        let carry = players.iter().find(|p| p.id == 5).unwrap();
        assert_eq!(carry.impact_rank, 1);
        let feeder = players.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(feeder.impact_rank, 5);
    }

    #[test]
    fn non_standard_match_size_gets_uniform_fallback() {
        for size in [0usize, 4, 9, 11] {
            let mut players: Vec<Participant> = (0..size)
                .map(|i| {
                    let team = if i % 2 == 0 { 100 } else { 200 };
                    participant(i as i32 + 1, team, stats(3, 3, 3, 12_000))
                })
                .collect();
            rank_participants(&mut players);
            for p in &players {
                assert!((p.impact - 1.0).abs() < 1e-9);
                assert_eq!(p.impact_rank, 2);
            }
        }
    }

    #[test]
    fn identical_players_tie_break_by_id() {
        let mut players: Vec<Participant> = (0..10)
            .map(|i| {
                let team = if i < 5 { 100 } else { 200 };
                participant(i + 1, team, stats(3, 3, 3, 12_000))
            })
            .collect();
        rank_participants(&mut players);

        let blue_rank_one = players
            .iter()
            .find(|p| p.team_id == 100 && p.impact_rank == 1)
            .unwrap();
        assert_eq!(blue_rank_one.id, 1);
    }

    #[test]
    fn mvp_is_the_global_impact_maximum() {
        let mut players = full_match();
        rank_participants(&mut players);

        let mvp = find_mvp(&players).expect("non-empty match");
        let top = players[mvp].impact;
        assert!(players.iter().all(|p| p.impact <= top));
    }

    #[test]
    fn mvp_tie_breaks_toward_lower_id() {
        // Ten identical players: normalization leaves every impact at
        // exactly 1.0, a full ten-way tie.
        let mut players: Vec<Participant> = (0..10)
            .map(|i| {
                let team = if i < 5 { 100 } else { 200 };
                participant(i + 1, team, stats(3, 3, 3, 12_000))
            })
            .collect();
        rank_participants(&mut players);

        let mvp = find_mvp(&players).expect("non-empty match");
        assert_eq!(players[mvp].id, 1);
    }

    #[test]
    fn kill_participation_handles_zero_kill_team() {
        let s = stats(0, 2, 0, 4_000);
        assert_eq!(kill_participation(&s, 0), 0.0);
        let s = stats(3, 2, 7, 12_000);
        assert!((kill_participation(&s, 20) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn kda_reports_deathless_games_as_kills_plus_assists() {
        assert!((kda(&stats(5, 0, 7, 10_000)) - 12.0).abs() < 1e-9);
        assert!((kda(&stats(4, 2, 6, 10_000)) - 5.0).abs() < 1e-9);
    }
}
