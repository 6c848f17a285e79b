//! Timeline frame augmentation for charting.
//!
//! Adds per-frame team gold totals, signed advantages, percent advantage
//! and per-participant CS to a raw frame array. Every derived field is
//! overwritten on each pass, so reapplying the reshaper never double
//! counts.

use crate::models::{Participant, TimelineFrame};
use std::collections::HashMap;

/// Augment `frames` in place.
///
/// `participants` supplies the participant-id to team mapping; frames
/// referencing unknown participant ids contribute to neither team's gold.
///
/// The percent advantage always divides by the *trailing* team's gold:
/// "how far ahead is the leader, as a share of what the loser has". The
/// two percentages are exact negations of each other, as are the signed
/// advantages.
pub fn reshape_timeline(frames: &mut [TimelineFrame], participants: &[Participant]) {
    let team_of: HashMap<i32, i32> = participants.iter().map(|p| (p.id, p.team_id)).collect();

    for frame in frames.iter_mut() {
        compute_gold_advantage(frame, &team_of);

        for pf in frame.participantframes.iter_mut() {
            pf.cs = pf.jungle_minions_killed + pf.minions_killed;
        }

        if let Some(events) = frame.events.as_mut() {
            events.sort_by_key(|e| e.timestamp);
        }
    }
}

fn compute_gold_advantage(frame: &mut TimelineFrame, team_of: &HashMap<i32, i32>) {
    let mut team100_gold: i64 = 0;
    let mut team200_gold: i64 = 0;
    for pf in &frame.participantframes {
        match team_of.get(&pf.participant_id) {
            Some(100) => team100_gold += pf.total_gold,
            Some(200) => team200_gold += pf.total_gold,
            _ => {}
        }
    }

    frame.team100_gold = team100_gold;
    frame.team200_gold = team200_gold;
    frame.team100_adv = team100_gold - team200_gold;
    frame.team200_adv = team200_gold - team100_gold;

    if frame.team100_adv >= 0 {
        frame.team100_perc_adv = frame.team100_adv as f64 / team200_gold as f64 * 100.0;
        frame.team200_perc_adv = -frame.team100_perc_adv;
    } else {
        frame.team200_perc_adv = frame.team200_adv as f64 / team100_gold as f64 * 100.0;
        frame.team100_perc_adv = -frame.team200_perc_adv;
    }
}
