use colored::*;
use rift_analytics::analysis::impact::{find_mvp, kda, kill_participation};
use rift_analytics::models::{Match, TimelineFrame};
use rift_analytics::AnnotatedItem;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ImpactRow {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "K/D/A")]
    kda_line: String,
    #[tabled(rename = "KP")]
    kill_participation: String,
    #[tabled(rename = "KDA")]
    kda_ratio: String,
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Rank")]
    rank: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    stat: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Gold Value")]
    gold_value: String,
}

#[derive(Tabled)]
struct GoldRow {
    #[tabled(rename = "Min")]
    minute: String,
    #[tabled(rename = "Blue Gold")]
    blue_gold: String,
    #[tabled(rename = "Red Gold")]
    red_gold: String,
    #[tabled(rename = "Blue Adv")]
    blue_adv: String,
    #[tabled(rename = "Blue Adv %")]
    blue_perc: String,
}

pub fn display_impact_table(match_data: &Match) {
    println!(
        "\n{}",
        format!("⚔️  Impact Ranking — {}", match_data.id).bold().cyan()
    );
    println!("{}\n", "=".repeat(70).cyan());

    let mvp_index = find_mvp(&match_data.participants);

    let mut order: Vec<usize> = (0..match_data.participants.len()).collect();
    order.sort_by(|&a, &b| {
        match_data.participants[b]
            .impact
            .partial_cmp(&match_data.participants[a].impact)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows = vec![];
    for idx in order {
        let p = &match_data.participants[idx];
        let team_kills: i32 = match_data
            .participants
            .iter()
            .filter(|other| other.team_id == p.team_id)
            .map(|other| other.stats.kills)
            .sum();

        let mut player = player_label(&p.puuid, p.champion_id);
        if mvp_index == Some(idx) {
            player = format!("{} ★ MVP", player);
        }

        rows.push(ImpactRow {
            team: if p.team_id == 100 { "Blue".to_string() } else { "Red".to_string() },
            player,
            kda_line: format!("{}/{}/{}", p.stats.kills, p.stats.deaths, p.stats.assists),
            kill_participation: format!("{:.0}%", kill_participation(&p.stats, team_kills)),
            kda_ratio: format!("{:.1}", kda(&p.stats)),
            impact: format!("{:.3}", p.impact),
            rank: format!("#{}", p.impact_rank),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_item_summary(item: &AnnotatedItem) {
    println!(
        "\n{}",
        format!("🛒 {} ({} gold)", item.name, item.gold.total).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let mut keys: Vec<&String> = item.stats.keys().collect();
    keys.sort();

    let mut rows = vec![];
    for key in keys {
        let stat = &item.stats[key];
        let gold_value = if stat.gold_value.is_nan() {
            "?".to_string()
        } else {
            format!("{:.0}", stat.gold_value)
        };
        rows.push(StatRow {
            stat: key.clone(),
            value: format!("{}", stat.value),
            gold_value,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n{} {:.0} gold in raw stats ({:.0}% gold efficiency)",
        "📈".green(),
        item.total_stat_gold(),
        item.gold_efficiency() * 100.0
    );

    if !item.notes.is_empty() {
        println!("\n{}", "Notes".bold().yellow());
        for note in &item.notes {
            println!("• {}", note);
        }
    }
    println!();
}

pub fn display_gold_advantage(frames: &[TimelineFrame]) {
    println!("\n{}", "💰 Team Gold Advantage".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut rows = vec![];
    for frame in frames {
        let blue_adv = if frame.team100_adv >= 0 {
            format!("+{}", frame.team100_adv).green().to_string()
        } else {
            format!("{}", frame.team100_adv).red().to_string()
        };
        rows.push(GoldRow {
            minute: format!("{}", frame.timestamp / 60_000),
            blue_gold: format!("{}", frame.team100_gold),
            red_gold: format!("{}", frame.team200_gold),
            blue_adv,
            blue_perc: format!("{:.1}%", frame.team100_perc_adv),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_damage_breakdown(
    armor: f64,
    negated: f64,
    multiplier_before: f64,
    multiplier_after: f64,
    percent_increase: f64,
) {
    println!("\n{}", "🗡️  Armor Penetration".bold().cyan());
    println!("{}\n", "=".repeat(50).cyan());
    println!("Target armor:        {:.0}", armor);
    println!("Armor negated:       {:.1}", negated);
    println!(
        "Damage multiplier:   {:.3} → {:.3}",
        multiplier_before, multiplier_after
    );
    println!(
        "{} {}",
        "Damage increase:".bold(),
        format!("+{:.1}%", percent_increase).green()
    );
    println!();
}

pub fn display_effective_health_summary(before: f64, after: f64, gold_per_point: f64) {
    println!("\n{}", "🛡️  Effective Health".bold().cyan());
    println!("{}\n", "=".repeat(50).cyan());
    println!("Effective health:    {:.0} → {:.0}", before, after);
    if gold_per_point.is_finite() {
        println!(
            "{} {}",
            "Gold per point:".bold(),
            format!("{:.2}", gold_per_point).green()
        );
    } else {
        println!("{}", "Item adds no effective health".yellow());
    }
    println!();
}

/// Short display handle for a participant: the first 8 characters of the
/// puuid, or the champion id when the puuid is too short to abbreviate.
fn player_label(puuid: &str, champion_id: i32) -> String {
    if puuid.len() >= 8 {
        puuid.chars().take(8).collect()
    } else {
        format!("Champion {}", champion_id)
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_label_truncates_on_char_boundaries() {
        assert_eq!(player_label("abcdef1234567890", 1), "abcdef12");
        // Multi-byte characters inside the first 8 bytes must not panic.
        assert_eq!(player_label("áéíóúäëï-rest", 1), "áéíóúäëï");
    }

    #[test]
    fn player_label_falls_back_to_champion_id() {
        assert_eq!(player_label("short", 103), "Champion 103");
    }
}
